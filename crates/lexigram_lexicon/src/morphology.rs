//! The morphological analyzer seam.
//!
//! The lexicon consults an analyzer only for words it has no readings for.
//! An analyzer proposes `(lemma, residual features)` pairs; stripping
//! inflections is the analyzer's business.

use lexigram_foundation::{FeatureBundle, FeatureValue, Pos};

/// A lemma proposed for an inflected word, with the features the inflection
/// contributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Analysis {
    /// Proposed base form.
    pub lemma: String,
    /// Part of speech the inflection implies, replacing the lemma's.
    pub pos: Option<Pos>,
    /// Features the inflection contributes.
    pub features: FeatureBundle,
}

impl Analysis {
    /// Creates an analysis with no residual features.
    #[must_use]
    pub fn new(lemma: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            pos: None,
            features: FeatureBundle::new(),
        }
    }

    /// Sets the implied part of speech.
    #[must_use]
    pub fn with_pos(mut self, pos: Pos) -> Self {
        self.pos = Some(pos);
        self
    }

    /// Sets a residual feature.
    #[must_use]
    pub fn with_feature(mut self, name: &str, value: impl Into<FeatureValue>) -> Self {
        self.features.insert(name, value);
        self
    }
}

/// Proposes lemmas for words missing from the lexicon.
pub trait MorphologicalAnalyzer: Send + Sync {
    /// Returns candidate analyses for `word`, possibly none.
    fn analyze(&self, word: &str) -> Vec<Analysis>;
}

/// An analyzer that never proposes anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoMorphology;

impl MorphologicalAnalyzer for NoMorphology {
    fn analyze(&self, _word: &str) -> Vec<Analysis> {
        Vec::new()
    }
}

impl<F> MorphologicalAnalyzer for F
where
    F: Fn(&str) -> Vec<Analysis> + Send + Sync,
{
    fn analyze(&self, word: &str) -> Vec<Analysis> {
        self(word)
    }
}
