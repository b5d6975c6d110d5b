//! The lexicon: word forms to readings, lemmas to complement frames.
//!
//! Lookup is layered. A word with stored readings is answered from the table.
//! Otherwise the morphological analyzer proposes lemmas, and every stored
//! reading of a known lemma is returned with the analysis' residual features
//! laid over it.

use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use lexigram_foundation::{Pos, Result};
use tracing::{debug, trace};

use crate::config::LexiconConfig;
use crate::entry::LexicalEntry;
use crate::morphology::{MorphologicalAnalyzer, NoMorphology};
use crate::stdlib;
use crate::subcat::{SubcatEntry, VerbSubcatFrame};
use crate::vocabulary::{VocabularyTable, WordClass, read_tables};

/// Summary of a table merged into a lexicon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableSummary {
    /// Table name.
    pub name: String,
    /// Word class.
    pub class: WordClass,
    /// Number of readings the table contributed.
    pub entries: usize,
}

// =============================================================================
// Builder
// =============================================================================

/// Collects vocabulary tables and an analyzer for a [`Lexicon`].
pub struct LexiconBuilder {
    tables: Vec<VocabularyTable>,
    analyzer: Box<dyn MorphologicalAnalyzer>,
    config: LexiconConfig,
}

impl Default for LexiconBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconBuilder {
    /// Creates an empty builder with no analyzer and the default config.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            analyzer: Box::new(NoMorphology),
            config: LexiconConfig::default(),
        }
    }

    /// Creates a builder holding the bundled English vocabulary.
    ///
    /// # Errors
    /// Returns an error if the bundled vocabulary does not read.
    pub fn english() -> Result<Self> {
        stdlib::sources()
            .into_iter()
            .try_fold(Self::new(), |builder, (_, text)| builder.source(text))
    }

    /// Appends a table; its readings follow those of earlier tables.
    #[must_use]
    pub fn table(mut self, table: VocabularyTable) -> Self {
        self.tables.push(table);
        self
    }

    /// Reads and appends every table in vocabulary source.
    ///
    /// # Errors
    /// Returns an error if the source is not well-formed vocabulary.
    pub fn source(mut self, text: &str) -> Result<Self> {
        self.tables.extend(read_tables(text)?);
        Ok(self)
    }

    /// Sets the morphological analyzer consulted for unknown words.
    #[must_use]
    pub fn analyzer(mut self, analyzer: impl MorphologicalAnalyzer + 'static) -> Self {
        self.analyzer = Box::new(analyzer);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: LexiconConfig) -> Self {
        self.config = config;
        self
    }

    /// Merges the tables into a lexicon.
    ///
    /// Every reading of a word is kept, in table order then entry order.
    /// Base verb readings that declare frames register the lemma's
    /// subcategorization and governed preposition.
    #[must_use]
    pub fn build(self) -> Lexicon {
        let Self {
            tables,
            analyzer,
            config,
        } = self;

        let mut entries: HashMap<String, Vec<LexicalEntry>> = HashMap::new();
        let mut subcat = HashMap::new();
        let mut summaries = Vec::with_capacity(tables.len());

        for table in tables {
            summaries.push(TableSummary {
                name: table.name,
                class: table.class,
                entries: table.entries.len(),
            });
            for (word, entry) in table.entries {
                let key = fold(&word, config.lowercase_keys).into_owned();
                if entry.pos == Pos::VB && !entry.subcat.is_empty() {
                    let mut registered = SubcatEntry::new(entry.subcat.clone());
                    if let Some(prep) = entry.preposition() {
                        registered = registered.with_preposition(prep);
                    }
                    subcat.insert(key.clone(), registered);
                }
                entries.entry(key).or_default().push(entry);
            }
        }

        let lexicon = Lexicon {
            entries,
            subcat,
            tables: summaries,
            analyzer,
            config,
        };
        debug!(
            words = lexicon.len(),
            readings = lexicon.reading_count(),
            verbs = lexicon.subcat.len(),
            tables = lexicon.tables.len(),
            "lexicon built"
        );
        lexicon
    }
}

impl fmt::Debug for LexiconBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexiconBuilder")
            .field("tables", &self.tables.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Lexicon
// =============================================================================

/// An immutable lexicon.
pub struct Lexicon {
    entries: HashMap<String, Vec<LexicalEntry>>,
    subcat: HashMap<String, SubcatEntry>,
    tables: Vec<TableSummary>,
    analyzer: Box<dyn MorphologicalAnalyzer>,
    config: LexiconConfig,
}

impl Lexicon {
    /// Creates a builder.
    #[must_use]
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::new()
    }

    /// Builds the bundled English lexicon with no morphological analyzer.
    ///
    /// # Errors
    /// Returns an error if the bundled vocabulary does not read.
    pub fn english() -> Result<Self> {
        Ok(LexiconBuilder::english()?.build())
    }

    /// Returns every reading of `word`.
    ///
    /// Stored readings are borrowed. Readings derived through the analyzer
    /// are owned. Returns `None` if neither resolves the word.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<Cow<'_, [LexicalEntry]>> {
        let key = fold(word, self.config.lowercase_keys);
        if let Some(readings) = self.entries.get(key.as_ref()) {
            return Some(Cow::Borrowed(readings.as_slice()));
        }
        if !self.config.morphology_fallback {
            return None;
        }

        let derived = self.analyze_unknown(&key);
        if derived.is_empty() {
            None
        } else {
            trace!(word = %key, readings = derived.len(), "resolved through morphology");
            Some(Cow::Owned(derived))
        }
    }

    fn analyze_unknown(&self, word: &str) -> Vec<LexicalEntry> {
        let mut derived = Vec::new();
        for analysis in self.analyzer.analyze(word) {
            let lemma = fold(&analysis.lemma, self.config.lowercase_keys);
            let Some(readings) = self.entries.get(lemma.as_ref()) else {
                continue;
            };
            for reading in readings {
                let mut entry = reading.overlaid(&analysis.features);
                if let Some(pos) = analysis.pos {
                    entry.pos = pos;
                }
                derived.push(entry);
            }
        }
        derived
    }

    /// Returns the distinct parts of speech `word` can take.
    #[must_use]
    pub fn pos_tags(&self, word: &str) -> BTreeSet<Pos> {
        self.lookup(word)
            .map(|readings| readings.iter().map(|e| e.pos).collect())
            .unwrap_or_default()
    }

    /// Returns the first reading of `word`, optionally restricted to `pos`.
    #[must_use]
    pub fn features(&self, word: &str, pos: Option<Pos>) -> Option<LexicalEntry> {
        let readings = self.lookup(word)?;
        readings
            .iter()
            .find(|e| pos.is_none_or(|p| e.pos == p))
            .cloned()
    }

    /// Returns the complement frames registered for a verb lemma.
    ///
    /// Unregistered lemmas get the configured default, `[NP]` unless changed.
    #[must_use]
    pub fn verb_subcat(&self, lemma: &str) -> &[VerbSubcatFrame] {
        self.subcat_entry(lemma)
            .map_or(self.config.default_frames.as_slice(), |e| e.frames.as_slice())
    }

    /// Returns the preposition a verb lemma governs, as *to* for *listen*.
    #[must_use]
    pub fn governed_preposition(&self, lemma: &str) -> Option<&str> {
        self.subcat_entry(lemma)?.preposition.as_deref()
    }

    /// Returns the registered complementation data for a verb lemma.
    #[must_use]
    pub fn subcat_entry(&self, lemma: &str) -> Option<&SubcatEntry> {
        self.subcat
            .get(fold(lemma, self.config.lowercase_keys).as_ref())
    }

    /// Returns true if [`Lexicon::lookup`] resolves `word`.
    #[must_use]
    pub fn has_word(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// Returns the number of distinct stored word forms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no word forms are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of stored readings across all words.
    #[must_use]
    pub fn reading_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Iterates over stored word forms in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over lemmas with registered complementation data.
    pub fn verbs(&self) -> impl Iterator<Item = &str> {
        self.subcat.keys().map(String::as_str)
    }

    /// Returns the merged tables in merge order.
    #[must_use]
    pub fn tables(&self) -> &[TableSummary] {
        &self.tables
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &LexiconConfig {
        &self.config
    }
}

impl fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexicon")
            .field("words", &self.entries.len())
            .field("verbs", &self.subcat.len())
            .field("tables", &self.tables)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexicon({} words, {} readings, {} verbs)",
            self.len(),
            self.reading_count(),
            self.subcat.len()
        )
    }
}

fn fold(word: &str, lowercase: bool) -> Cow<'_, str> {
    if lowercase && word.chars().any(|c| !c.to_lowercase().eq(std::iter::once(c))) {
        Cow::Owned(word.to_lowercase())
    } else {
        Cow::Borrowed(word)
    }
}
