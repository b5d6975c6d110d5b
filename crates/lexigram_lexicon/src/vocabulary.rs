//! Vocabulary tables read from the vocabulary DSL.
//!
//! A table is a named, ordered list of word readings:
//!
//! ```text
//! (table: determiners :class closed
//!   (a   :pos DT :number SG :definite false)
//!   (the :pos DT :number nil :definite true))
//! ```
//!
//! Entry values map onto features as follows: `nil` leaves the feature
//! unconstrained, `#{1 2}` admits any listed value, and symbols, integers,
//! and booleans are single values. `:pos` is required and `:subcat` takes a
//! vector of frame codes.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use lexigram_foundation::{Atom, Error, ErrorContext, FeatureBundle, FeatureValue, Pos, Result};
use lexigram_language::{Form, Span};

use crate::entry::LexicalEntry;
use crate::subcat::VerbSubcatFrame;

/// Head symbol of a table declaration.
pub const TABLE_HEAD: &str = "table:";

/// Whether a table lists function words or content words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordClass {
    /// Function words; the set is fixed.
    Closed,
    /// Content words; the set grows.
    Open,
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => f.write_str("closed"),
            Self::Open => f.write_str("open"),
        }
    }
}

impl FromStr for WordClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "closed" => Ok(Self::Closed),
            "open" => Ok(Self::Open),
            other => Err(Error::invalid_vocabulary(format!(
                "word class must be closed or open, got {other}"
            ))),
        }
    }
}

/// A named table of word readings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VocabularyTable {
    /// Table name, such as `determiners`.
    pub name: String,
    /// Word class of the table.
    pub class: WordClass,
    /// Word forms and their readings, in source order.
    pub entries: Vec<(String, LexicalEntry)>,
}

impl VocabularyTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new(name: impl Into<String>, class: WordClass) -> Self {
        Self {
            name: name.into(),
            class,
            entries: Vec::new(),
        }
    }

    /// Adds a reading.
    #[must_use]
    pub fn with_entry(mut self, word: impl Into<String>, entry: LexicalEntry) -> Self {
        self.entries.push((word.into(), entry));
        self
    }

    /// Returns the number of readings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no readings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reads a table from a `(table: ...)` form.
    ///
    /// Returns `Ok(None)` if the form is not a table declaration.
    ///
    /// # Errors
    /// Returns an error if the declaration is malformed, names an unknown
    /// part of speech, or names an unknown subcategorization frame.
    pub fn from_form(form: &Form) -> Result<Option<Self>> {
        let Form::List(elements, span) = form else {
            return Ok(None);
        };
        match elements.first() {
            Some(Form::Symbol(head, _)) if head == TABLE_HEAD => {}
            _ => return Ok(None),
        }

        let name = match elements.get(1) {
            Some(Form::Symbol(name, _)) => name.clone(),
            Some(other) => {
                return Err(at(
                    other.span(),
                    format!("table name must be a symbol, got {}", other.type_name()),
                ));
            }
            None => return Err(at(*span, "table: requires a name")),
        };

        let mut class = WordClass::Open;
        let mut i = 2;
        while let Some(Form::Keyword(option, option_span)) = elements.get(i) {
            let value = elements
                .get(i + 1)
                .ok_or_else(|| at(*option_span, format!("missing value for :{option}")))?;
            match option.as_str() {
                "class" => {
                    let text = value.as_symbol().ok_or_else(|| {
                        at(value.span(), format!("expected symbol, got {}", value.type_name()))
                    })?;
                    class = text.parse().map_err(|e| in_table(e, &name, value.span()))?;
                }
                other => {
                    return Err(at(*option_span, format!("unknown table option :{other}")));
                }
            }
            i += 2;
        }

        let mut table = Self::new(name, class);
        for element in &elements[i..] {
            let entry = read_entry(element).map_err(|e| in_table(e, &table.name, element.span()))?;
            table.entries.push(entry);
        }
        Ok(Some(table))
    }
}

/// Reads every table in `source`.
///
/// # Errors
/// Returns an error if the source does not read, or if any top-level form is
/// not a well-formed table declaration.
pub fn read_tables(source: &str) -> Result<Vec<VocabularyTable>> {
    let forms = lexigram_language::read(source)?;
    let mut tables = Vec::with_capacity(forms.len());
    for form in &forms {
        match VocabularyTable::from_form(form)? {
            Some(table) => tables.push(table),
            None => {
                let span = form.span();
                return Err(Error::invalid_vocabulary(format!(
                    "expected a table: declaration, got {}",
                    form.type_name()
                ))
                .with_context(ErrorContext::new().with_position(span.line as usize, span.column as usize)));
            }
        }
    }
    Ok(tables)
}

// =============================================================================
// Entries
// =============================================================================

/// Reads `(word :pos TAG :feature value ...)`.
fn read_entry(form: &Form) -> Result<(String, LexicalEntry)> {
    let Form::List(elements, span) = form else {
        return Err(at(
            form.span(),
            format!("expected entry list, got {}", form.type_name()),
        ));
    };

    let word = match elements.first() {
        Some(Form::Symbol(word, _)) => word.clone(),
        Some(other) => {
            return Err(at(
                other.span(),
                format!("entry word must be a symbol, got {}", other.type_name()),
            ));
        }
        None => return Err(at(*span, "empty entry")),
    };

    let mut pos = None;
    let mut features = FeatureBundle::new();
    let mut subcat = Vec::new();
    let mut seen = BTreeSet::new();

    let mut rest = elements[1..].iter();
    while let Some(key_form) = rest.next() {
        let key = key_form.as_keyword().ok_or_else(|| {
            at(
                key_form.span(),
                format!("expected feature keyword, got {}", key_form.type_name()),
            )
        })?;
        if !seen.insert(key) {
            return Err(at(key_form.span(), format!("duplicate feature :{key} for {word}")));
        }
        let value = rest
            .next()
            .ok_or_else(|| at(key_form.span(), format!("missing value for :{key}")))?;

        match key {
            "pos" => {
                let tag = value.as_symbol().ok_or_else(|| {
                    at(value.span(), format!("expected tag symbol, got {}", value.type_name()))
                })?;
                pos = Some(tag.parse::<Pos>()?);
            }
            "subcat" => subcat = read_frames(value)?,
            _ => features.insert(key, read_value(value)?),
        }
    }

    let pos = pos.ok_or_else(|| Error::invalid_vocabulary(format!("entry {word} has no :pos")))?;
    let entry = LexicalEntry::new(pos)
        .with_features(features)
        .with_subcat(subcat);
    Ok((word, entry))
}

fn read_frames(form: &Form) -> Result<Vec<VerbSubcatFrame>> {
    let Form::Vector(codes, _) = form else {
        return Err(at(
            form.span(),
            format!(":subcat expects a vector, got {}", form.type_name()),
        ));
    };
    codes
        .iter()
        .map(|code| match code {
            Form::Symbol(code, _) => code.parse(),
            other => Err(at(
                other.span(),
                format!("expected frame code, got {}", other.type_name()),
            )),
        })
        .collect()
}

fn read_value(form: &Form) -> Result<FeatureValue> {
    match form {
        Form::Nil(_) => Ok(FeatureValue::Unconstrained),
        Form::Set(items, _) => Ok(FeatureValue::OneOf(
            items.iter().map(read_atom).collect::<Result<_>>()?,
        )),
        other => read_atom(other).map(FeatureValue::Scalar),
    }
}

fn read_atom(form: &Form) -> Result<Atom> {
    match form {
        Form::Bool(b, _) => Ok(Atom::Bool(*b)),
        Form::Int(n, _) => Ok(Atom::Int(*n)),
        Form::Symbol(s, _) => Ok(Atom::from(s.as_str())),
        other => Err(at(
            other.span(),
            format!("expected feature value, got {}", other.type_name()),
        )),
    }
}

fn at(span: Span, message: impl Into<String>) -> Error {
    Error::parse(message, span.line, span.column)
}

/// Tags an error with the table it came from, keeping any position it has.
fn in_table(error: Error, table: &str, span: Span) -> Error {
    let context = error
        .context
        .clone()
        .unwrap_or_else(|| ErrorContext::new().with_position(span.line as usize, span.column as usize))
        .with_source(table);
    error.with_context(context)
}
