//! Token types for the vocabulary DSL.
//!
//! The set is small: three bracket pairs (`(`, `[`, `#{`), the literals
//! `nil`, `true` and `false`, integers for features like `:person`, symbols,
//! and `:keyword` feature names. Comments are kept as trivia tokens.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Token types for the vocabulary DSL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    // Delimiters
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `#{` for sets
    HashBrace,
    /// `}`
    RBrace,

    // Literals
    /// `nil`
    Nil,
    /// `true`
    True,
    /// `false`
    False,
    /// Integer literal like `3`
    Int(i64),
    /// Symbol like `buy`, `PRP$`, or `table:`
    Symbol(String),
    /// Keyword like `:pos`
    Keyword(String),

    // Meta
    /// Comment text (including `;`)
    Comment(String),
    /// End of input
    Eof,
    /// Lexer error
    Error(String),
}

impl TokenKind {
    /// Returns true if this token kind should be ignored during reading.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self, Self::Comment(_))
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::HashBrace => "'#{'",
            Self::RBrace => "'}'",
            Self::Nil => "nil",
            Self::True => "true",
            Self::False => "false",
            Self::Int(_) => "integer",
            Self::Symbol(_) => "symbol",
            Self::Keyword(_) => "keyword",
            Self::Comment(_) => "comment",
            Self::Eof => "end of input",
            Self::Error(_) => "error",
        }
    }
}
