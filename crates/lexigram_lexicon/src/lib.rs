//! Feature-annotated English lexicon for lexigram.
//!
//! This crate provides:
//! - [`LexicalEntry`] - One reading of a word form
//! - [`VerbSubcatFrame`] - Verb complement patterns
//! - [`MorphologicalAnalyzer`] - The seam for resolving inflected forms
//! - [`VocabularyTable`] - Vocabulary read from the table DSL
//! - [`Lexicon`] - Layered lookup: stored readings, then morphology
//! - [`LexiconConfig`] - Lookup and construction settings

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod entry;
pub mod lexicon;
pub mod morphology;
pub mod stdlib;
pub mod subcat;
pub mod vocabulary;

use std::sync::LazyLock;

pub use config::LexiconConfig;
pub use entry::LexicalEntry;
pub use lexicon::{Lexicon, LexiconBuilder, TableSummary};
pub use morphology::{Analysis, MorphologicalAnalyzer, NoMorphology};
pub use subcat::{SubcatEntry, VerbSubcatFrame};
pub use vocabulary::{VocabularyTable, WordClass, read_tables};

static ENGLISH: LazyLock<Lexicon> =
    LazyLock::new(|| Lexicon::english().expect("bundled vocabulary reads"));

/// Returns the process-wide English lexicon, building it on first use.
///
/// The shared lexicon has no morphological analyzer. Build one with
/// [`LexiconBuilder::english`] and [`LexiconBuilder::analyzer`] to resolve
/// inflected forms.
///
/// # Panics
/// Panics if the bundled vocabulary fails to read, which the crate's tests
/// rule out.
#[must_use]
pub fn english_lexicon() -> &'static Lexicon {
    &ENGLISH
}
