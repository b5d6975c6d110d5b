//! Query REPL and CLI for lexigram.
//!
//! This crate provides:
//! - [`Session`] - The grammar and lexicon a REPL queries
//! - [`Command`] - Parsed query commands and their rendering
//! - [`Repl`] - Interactive read-eval-print loop
//! - [`init_logging`] - `tracing` subscriber setup for the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod editor;
pub mod logging;
pub mod repl;
pub mod session;

pub use command::Command;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use logging::init_logging;
pub use repl::{Repl, run_batch};
pub use session::Session;
