//! CNF grammar rules and indices for lexigram.
//!
//! This crate provides:
//! - [`Rule`] - A CNF rule split into [`RuleKey`] and [`RulePayload`]
//! - [`GrammarBuilder`] - Rule collection with fail-fast CNF checks
//! - [`Grammar`] - Immutable rule store indexed by left side, right side
//!   pair, and part-of-speech
//! - [`english`] - The English grammar

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod english;
pub mod grammar;
pub mod rule;

use std::sync::LazyLock;

pub use grammar::{DEFAULT_START_SYMBOL, Grammar, GrammarBuilder};
pub use rule::{Constraint, Rhs, Rule, RuleKey, RulePayload};

static ENGLISH: LazyLock<Grammar> = LazyLock::new(english::build);

/// Returns the process-wide English grammar, building it on first use.
#[must_use]
pub fn english_grammar() -> &'static Grammar {
    &ENGLISH
}
