//! Penn Treebank part-of-speech tags.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A part-of-speech tag.
///
/// Each tag doubles as the name of a pre-terminal grammar category, so
/// [`Pos::as_str`] is the key used to find the grammar's lexical rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(clippy::upper_case_acronyms)]
pub enum Pos {
    /// Coordinating conjunction
    CC,
    /// Determiner
    DT,
    /// Preposition or subordinating conjunction
    IN,
    /// Adjective
    JJ,
    /// Adjective, comparative
    JJR,
    /// Adjective, superlative
    JJS,
    /// Modal
    MD,
    /// Noun, singular or mass
    NN,
    /// Noun, plural
    NNS,
    /// Proper noun, singular
    NNP,
    /// Proper noun, plural
    NNPS,
    /// Personal pronoun
    PRP,
    /// Possessive pronoun (`PRP$`)
    PRPS,
    /// Adverb
    RB,
    /// Adverb, comparative
    RBR,
    /// Adverb, superlative
    RBS,
    /// Infinitival `to`
    TO,
    /// Verb, base form
    VB,
    /// Verb, past tense
    VBD,
    /// Verb, gerund or present participle
    VBG,
    /// Verb, past participle
    VBN,
    /// Verb, non-3rd person singular present
    VBP,
    /// Verb, 3rd person singular present
    VBZ,
    /// Wh-determiner
    WDT,
    /// Wh-pronoun
    WP,
    /// Wh-adverb
    WRB,
}

impl Pos {
    /// Every tag in the tagset.
    pub const ALL: [Pos; 26] = [
        Pos::CC,
        Pos::DT,
        Pos::IN,
        Pos::JJ,
        Pos::JJR,
        Pos::JJS,
        Pos::MD,
        Pos::NN,
        Pos::NNS,
        Pos::NNP,
        Pos::NNPS,
        Pos::PRP,
        Pos::PRPS,
        Pos::RB,
        Pos::RBR,
        Pos::RBS,
        Pos::TO,
        Pos::VB,
        Pos::VBD,
        Pos::VBG,
        Pos::VBN,
        Pos::VBP,
        Pos::VBZ,
        Pos::WDT,
        Pos::WP,
        Pos::WRB,
    ];

    /// Returns the tag as written in the tagset.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CC => "CC",
            Self::DT => "DT",
            Self::IN => "IN",
            Self::JJ => "JJ",
            Self::JJR => "JJR",
            Self::JJS => "JJS",
            Self::MD => "MD",
            Self::NN => "NN",
            Self::NNS => "NNS",
            Self::NNP => "NNP",
            Self::NNPS => "NNPS",
            Self::PRP => "PRP",
            Self::PRPS => "PRP$",
            Self::RB => "RB",
            Self::RBR => "RBR",
            Self::RBS => "RBS",
            Self::TO => "TO",
            Self::VB => "VB",
            Self::VBD => "VBD",
            Self::VBG => "VBG",
            Self::VBN => "VBN",
            Self::VBP => "VBP",
            Self::VBZ => "VBZ",
            Self::WDT => "WDT",
            Self::WP => "WP",
            Self::WRB => "WRB",
        }
    }

    /// Returns true for any verb tag (`VB*`).
    #[must_use]
    pub const fn is_verb(self) -> bool {
        matches!(
            self,
            Self::VB | Self::VBD | Self::VBG | Self::VBN | Self::VBP | Self::VBZ
        )
    }

    /// Returns true for any adjective tag (`JJ*`).
    #[must_use]
    pub const fn is_adjective(self) -> bool {
        matches!(self, Self::JJ | Self::JJR | Self::JJS)
    }

    /// Returns true for any noun tag (`NN*`).
    #[must_use]
    pub const fn is_noun(self) -> bool {
        matches!(self, Self::NN | Self::NNS | Self::NNP | Self::NNPS)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pos {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|pos| pos.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::unknown_pos(s))
    }
}
