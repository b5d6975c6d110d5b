//! Lexer and reader for the lexigram vocabulary DSL.
//!
//! Vocabulary tables are written as s-expressions:
//!
//! ```text
//! (table: modals :class closed
//!   (will :pos MD :tense FUT)
//!   (do   :pos MD :tense PRES :person #{1 2} :number nil))
//! ```
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of vocabulary source
//! - [`Reader`] - Reading tokens into [`Form`] trees
//!
//! Interpreting forms as lexicon tables is the lexicon crate's job.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod form;
pub mod lexer;
pub mod reader;
pub mod span;
pub mod token;

pub use form::Form;
pub use lexer::Lexer;
pub use reader::{MAX_DEPTH, Reader};
pub use span::Span;
pub use token::{Token, TokenKind};

/// Reads every form in `source`.
///
/// # Errors
/// Returns a parse error if the source is not well-formed.
pub fn read(source: &str) -> lexigram_foundation::Result<Vec<Form>> {
    Reader::new(source).read_all()
}
