//! Lexical entries: one reading of a surface word form.

use std::fmt;

use lexigram_foundation::{FeatureBundle, FeatureValue, Pos};

use crate::subcat::VerbSubcatFrame;

/// One reading of a word: its part of speech, features, and complement frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexicalEntry {
    /// Part-of-speech tag.
    pub pos: Pos,
    /// Morphosyntactic features (number, person, tense, lemma, ...).
    pub features: FeatureBundle,
    /// Complement frames; empty for anything but base verbs.
    pub subcat: Vec<VerbSubcatFrame>,
}

impl LexicalEntry {
    /// Creates a reading with no features.
    #[must_use]
    pub fn new(pos: Pos) -> Self {
        Self {
            pos,
            features: FeatureBundle::new(),
            subcat: Vec::new(),
        }
    }

    /// Sets a feature.
    #[must_use]
    pub fn with_feature(mut self, name: &str, value: impl Into<FeatureValue>) -> Self {
        self.features.insert(name, value);
        self
    }

    /// Replaces the feature bundle.
    #[must_use]
    pub fn with_features(mut self, features: FeatureBundle) -> Self {
        self.features = features;
        self
    }

    /// Sets the complement frames.
    #[must_use]
    pub fn with_subcat(mut self, frames: Vec<VerbSubcatFrame>) -> Self {
        self.subcat = frames;
        self
    }

    /// Returns the `lemma` feature, if the reading records one.
    #[must_use]
    pub fn lemma(&self) -> Option<&str> {
        self.features.text("lemma")
    }

    /// Returns the `prep` feature, if the reading records one.
    #[must_use]
    pub fn preposition(&self) -> Option<&str> {
        self.features.text("prep")
    }

    /// Returns a copy with `residual` laid over the features.
    ///
    /// Features in `residual` win.
    #[must_use]
    pub fn overlaid(&self, residual: &FeatureBundle) -> Self {
        Self {
            pos: self.pos,
            features: self.features.overlay(residual),
            subcat: self.subcat.clone(),
        }
    }
}

impl fmt::Display for LexicalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pos)?;
        if !self.features.is_empty() {
            write!(f, " {}", self.features)?;
        }
        if !self.subcat.is_empty() {
            f.write_str(" [")?;
            for (i, frame) in self.subcat.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{frame}")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
