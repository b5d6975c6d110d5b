//! Error types for the lexigram system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Queries against a built grammar or lexicon never produce errors; these
//! types cover construction (rule registration, vocabulary loading).

use std::fmt;

use thiserror::Error;

/// The main error type for lexigram operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an error for a rule whose right side is not 1 or 2 symbols long.
    #[must_use]
    pub fn non_cnf_rule(lhs: impl Into<String>, arity: usize) -> Self {
        Self::new(ErrorKind::NonCnfRule {
            lhs: lhs.into(),
            arity,
        })
    }

    /// Creates an unknown part-of-speech tag error.
    #[must_use]
    pub fn unknown_pos(tag: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownPos(tag.into()))
    }

    /// Creates an unknown subcategorization frame error.
    #[must_use]
    pub fn unknown_subcat_frame(code: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownSubcatFrame(code.into()))
    }

    /// Creates a parse error at the given position.
    #[must_use]
    pub fn parse(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::new(ErrorKind::ParseError {
            message: message.into(),
            line,
            column,
        })
    }

    /// Creates an invalid command error.
    #[must_use]
    pub fn invalid_command(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCommand(message.into()))
    }

    /// Creates an invalid vocabulary error.
    #[must_use]
    pub fn invalid_vocabulary(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidVocabulary(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A rule's right side has a length other than 1 or 2.
    #[error("rule {lhs} has {arity} right-side symbols; CNF allows 1 or 2")]
    NonCnfRule {
        /// Left side of the offending rule.
        lhs: String,
        /// Number of symbols on the right side.
        arity: usize,
    },

    /// Part-of-speech tag is not part of the tagset.
    #[error("unknown part-of-speech tag: {0}")]
    UnknownPos(String),

    /// Subcategorization frame code is not recognized.
    #[error("unknown subcategorization frame: {0}")]
    UnknownSubcatFrame(String),

    /// Syntax error in vocabulary source.
    #[error("parse error at {line}:{column}: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
    },

    /// Vocabulary source is well-formed but has the wrong shape.
    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(String),

    /// A query command could not be understood.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source name (vocabulary table, file, or grammar section).
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias using the lexigram [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
