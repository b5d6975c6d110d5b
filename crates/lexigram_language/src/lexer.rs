//! Lexer for the vocabulary DSL.
//!
//! Words and tags lex as symbols, so Penn tags like `PRP$`, frame codes like
//! `NP_PP`, contractions like `n't`, and table heads like `table:` each come
//! out as a single [`TokenKind::Symbol`]. A leading `:` starts a feature
//! keyword, stored without the colon. `#{` opens an atom set. Commas separate
//! like whitespace and `;` runs to end of line.
//!
//! Malformed input yields [`TokenKind::Error`] tokens rather than failing, so
//! the reader reports the position.

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for vocabulary source.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;

        let Some(c) = self.peek_char() else {
            return Token::new(
                TokenKind::Eof,
                Span::new(start, start, start_line, start_column),
            );
        };

        let kind = match c {
            '(' => {
                self.advance();
                TokenKind::LParen
            }
            ')' => {
                self.advance();
                TokenKind::RParen
            }
            '[' => {
                self.advance();
                TokenKind::LBracket
            }
            ']' => {
                self.advance();
                TokenKind::RBracket
            }
            '}' => {
                self.advance();
                TokenKind::RBrace
            }
            ';' => self.scan_comment(),
            '#' => self.scan_hash(),
            ':' => self.scan_keyword(),
            c if c.is_ascii_digit() => self.scan_number(),
            '-' | '+' => {
                // Could be number or symbol
                if self.peek_char_n(1).is_some_and(|c| c.is_ascii_digit()) {
                    self.scan_number()
                } else {
                    self.scan_symbol()
                }
            }
            c if is_symbol_start(c) => self.scan_symbol(),
            c => {
                self.advance();
                TokenKind::Error(format!("unexpected character: {c}"))
            }
        };

        Token::new(
            kind,
            Span::new(start, self.position, start_line, start_column),
        )
    }

    /// Tokenizes all source and returns a vector of tokens.
    ///
    /// Comments are included in the output.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Skips whitespace. Commas count as whitespace.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() || c == ',' {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn scan_comment(&mut self) -> TokenKind {
        let mut text = String::new();
        while let Some(c) = self.peek_char() {
            if c == '\n' {
                break;
            }
            text.push(c);
            self.advance();
        }
        TokenKind::Comment(text)
    }

    /// Scans `#{`, the only form starting with `#`.
    fn scan_hash(&mut self) -> TokenKind {
        self.advance(); // consume '#'
        match self.peek_char() {
            Some('{') => {
                self.advance();
                TokenKind::HashBrace
            }
            Some(c) => TokenKind::Error(format!("unexpected character after #: {c}")),
            None => TokenKind::Error("unexpected end of input after #".into()),
        }
    }

    fn scan_keyword(&mut self) -> TokenKind {
        self.advance(); // consume ':'
        let name = self.scan_symbol_text();
        if name.is_empty() {
            TokenKind::Error("expected keyword name after ':'".into())
        } else {
            TokenKind::Keyword(name)
        }
    }

    fn scan_number(&mut self) -> TokenKind {
        let start = self.position;

        if self.peek_char() == Some('-') || self.peek_char() == Some('+') {
            self.advance();
        }

        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let text = &self.source[start..self.position];
        match text.parse::<i64>() {
            Ok(n) => TokenKind::Int(n),
            Err(e) => TokenKind::Error(format!("invalid integer: {e}")),
        }
    }

    fn scan_symbol(&mut self) -> TokenKind {
        let name = self.scan_symbol_text();

        match name.as_str() {
            "nil" => TokenKind::Nil,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            _ => TokenKind::Symbol(name),
        }
    }

    /// Scans symbol text (used for both symbols and keywords).
    fn scan_symbol_text(&mut self) -> String {
        let start = self.position;
        while self.peek_char().is_some_and(is_symbol_char) {
            self.advance();
        }
        self.source[start..self.position].to_string()
    }
}

/// Returns true if `c` can start a symbol.
fn is_symbol_start(c: char) -> bool {
    c.is_alphabetic() || matches!(c, '_' | '+' | '-' | '*' | '/' | '!' | '?' | '$' | '&')
}

/// Returns true if `c` can appear in a symbol (not at start).
///
/// A trailing `:` is allowed so declaration heads like `table:` read as one
/// symbol; an inner `'` allows contractions and possessives as words.
fn is_symbol_char(c: char) -> bool {
    is_symbol_start(c) || c.is_ascii_digit() || matches!(c, '.' | ':' | '\'')
}
