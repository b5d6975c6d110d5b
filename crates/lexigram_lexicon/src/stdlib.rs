//! Bundled English vocabulary.
//!
//! Tables are listed in merge order: readings for a word appear in the order
//! their tables occur here.

/// Function words.
pub const CLOSED_CLASS: &str = include_str!("../data/closed_class.lex");

/// Nouns, verbs, and adjectives.
pub const OPEN_CLASS: &str = include_str!("../data/open_class.lex");

/// Returns the bundled sources as `(name, text)` pairs in merge order.
#[must_use]
pub fn sources() -> [(&'static str, &'static str); 2] {
    [("closed_class.lex", CLOSED_CLASS), ("open_class.lex", OPEN_CLASS)]
}
