//! The knowledge base a REPL session queries.

use lexigram_foundation::Result;
use lexigram_grammar::{Grammar, english};
use lexigram_lexicon::{Lexicon, LexiconBuilder};

/// A grammar and lexicon built for one session.
#[derive(Debug)]
pub struct Session {
    grammar: Grammar,
    lexicon: Lexicon,
}

impl Session {
    /// Creates a session over the given grammar and lexicon.
    #[must_use]
    pub fn new(grammar: Grammar, lexicon: Lexicon) -> Self {
        Self { grammar, lexicon }
    }

    /// Creates a session over the English grammar and bundled vocabulary.
    ///
    /// # Errors
    /// Returns an error if the bundled vocabulary does not read.
    pub fn english() -> Result<Self> {
        Self::english_with::<&str>([])
    }

    /// Like [`Session::english`], with extra vocabulary sources merged after
    /// the bundled tables.
    ///
    /// # Errors
    /// Returns an error if any vocabulary source does not read.
    pub fn english_with<S: AsRef<str>>(extra: impl IntoIterator<Item = S>) -> Result<Self> {
        let mut builder = LexiconBuilder::english()?;
        for source in extra {
            builder = builder.source(source.as_ref())?;
        }
        Ok(Self::new(english::build(), builder.build()))
    }

    /// Returns the grammar.
    #[must_use]
    pub const fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Returns the lexicon.
    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}
