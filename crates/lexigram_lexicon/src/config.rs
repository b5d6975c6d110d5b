//! Configuration for lexicon construction and lookup.

use crate::subcat::VerbSubcatFrame;

/// Configuration for a [`Lexicon`](crate::Lexicon).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexiconConfig {
    /// Ask the morphological analyzer when a word has no stored readings.
    pub morphology_fallback: bool,

    /// Frames reported for a verb lemma with no registered subcategorization.
    pub default_frames: Vec<VerbSubcatFrame>,

    /// Fold words and lemmas to lowercase on insertion and lookup.
    pub lowercase_keys: bool,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            morphology_fallback: true,
            default_frames: vec![VerbSubcatFrame::NounPhrase],
            lowercase_keys: true,
        }
    }
}

impl LexiconConfig {
    /// Creates a configuration that only answers from stored readings.
    #[must_use]
    pub fn strict() -> Self {
        Self::default().with_morphology_fallback(false)
    }

    /// Builder method to enable/disable morphological fallback.
    #[must_use]
    pub fn with_morphology_fallback(mut self, enabled: bool) -> Self {
        self.morphology_fallback = enabled;
        self
    }

    /// Builder method to set the default subcategorization frames.
    #[must_use]
    pub fn with_default_frames(mut self, frames: Vec<VerbSubcatFrame>) -> Self {
        self.default_frames = frames;
        self
    }

    /// Builder method to enable/disable case folding.
    #[must_use]
    pub fn with_lowercase_keys(mut self, lowercase: bool) -> Self {
        self.lowercase_keys = lowercase;
        self
    }
}
