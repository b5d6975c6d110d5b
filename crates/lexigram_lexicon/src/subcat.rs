//! Verb subcategorization frames.
//!
//! A frame names the complement pattern a verb takes. Frames are
//! informational: nothing here validates a parsed complement against them.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use lexigram_foundation::Error;

/// A complement pattern a verb can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VerbSubcatFrame {
    /// Intransitive (`NONE`): *she swims*
    None,
    /// Direct object (`NP`): *buy a book*
    NounPhrase,
    /// Prepositional complement (`PP`): *listen to music*
    PrepositionalPhrase,
    /// Object and prepositional phrase (`NP_PP`): *put it on the table*
    NounPhrasePrepositionalPhrase,
    /// Two objects (`NP_NP`): *give him a book*
    DoubleNounPhrase,
    /// Object and adjective phrase (`NP_ADJP`): *make it clean*
    NounPhraseAdjectivePhrase,
    /// Clause (`CP`): *say that it rained*
    Clausal,
    /// Infinitive (`INF`): *try to leave*
    Infinitival,
    /// Adjective phrase (`ADJP`): *feel tired*
    AdjectivePhrase,
}

impl VerbSubcatFrame {
    /// Every frame.
    pub const ALL: [VerbSubcatFrame; 9] = [
        Self::None,
        Self::NounPhrase,
        Self::PrepositionalPhrase,
        Self::NounPhrasePrepositionalPhrase,
        Self::DoubleNounPhrase,
        Self::NounPhraseAdjectivePhrase,
        Self::Clausal,
        Self::Infinitival,
        Self::AdjectivePhrase,
    ];

    /// Returns the short code used in vocabulary source.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::NounPhrase => "NP",
            Self::PrepositionalPhrase => "PP",
            Self::NounPhrasePrepositionalPhrase => "NP_PP",
            Self::DoubleNounPhrase => "NP_NP",
            Self::NounPhraseAdjectivePhrase => "NP_ADJP",
            Self::Clausal => "CP",
            Self::Infinitival => "INF",
            Self::AdjectivePhrase => "ADJP",
        }
    }
}

impl fmt::Display for VerbSubcatFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for VerbSubcatFrame {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|frame| frame.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::unknown_subcat_frame(s))
    }
}

/// Registered complementation data for a verb lemma.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubcatEntry {
    /// Frames in declaration order.
    pub frames: Vec<VerbSubcatFrame>,
    /// Preposition the verb governs, as *to* in *listen to*.
    pub preposition: Option<Arc<str>>,
}

impl SubcatEntry {
    /// Creates an entry with the given frames.
    #[must_use]
    pub fn new(frames: Vec<VerbSubcatFrame>) -> Self {
        Self {
            frames,
            preposition: None,
        }
    }

    /// Sets the governed preposition.
    #[must_use]
    pub fn with_preposition(mut self, preposition: &str) -> Self {
        self.preposition = Some(Arc::from(preposition));
        self
    }
}
