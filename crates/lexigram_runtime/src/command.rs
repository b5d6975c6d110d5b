//! REPL query commands.
//!
//! Each line is one command: a name followed by whitespace-separated
//! arguments, such as `pair NP VP` or `features close JJ`.

use std::fmt::Write;
use std::sync::Arc;

use lexigram_foundation::{Error, Pos, Result};
use lexigram_grammar::Rule;

use crate::session::Session;

/// Command names, for completion and help.
pub const COMMAND_NAMES: [&str; 10] = [
    "lookup", "pos", "features", "subcat", "lhs", "pair", "lexical", "start", "stats", "help",
];

/// A parsed query command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Every reading of a word.
    Lookup(String),
    /// The parts of speech a word can take.
    Pos(String),
    /// The first reading of a word, optionally for one part of speech.
    Features(String, Option<Pos>),
    /// The complement frames of a verb lemma.
    Subcat(String),
    /// Rules with the given left side.
    Lhs(String),
    /// Binary rules with the given right side pair.
    Pair(String, String),
    /// Unary rules over the given symbol.
    Lexical(String),
    /// Whether a symbol is the start symbol.
    Start(String),
    /// Grammar and lexicon sizes.
    Stats,
    /// Command summary.
    Help,
}

impl Command {
    /// Parses a command line.
    ///
    /// # Errors
    /// Returns an error for an unknown command, the wrong number of
    /// arguments, or an unknown part-of-speech tag.
    pub fn parse(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(Error::invalid_command("empty command"));
        };
        let args: Vec<&str> = words.collect();

        let command = match (name.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("lookup", [word]) => Self::Lookup((*word).to_string()),
            ("pos", [word]) => Self::Pos((*word).to_string()),
            ("features", [word]) => Self::Features((*word).to_string(), None),
            ("features", [word, tag]) => Self::Features((*word).to_string(), Some(tag.parse()?)),
            ("subcat", [lemma]) => Self::Subcat((*lemma).to_string()),
            ("lhs", [symbol]) => Self::Lhs((*symbol).to_string()),
            ("pair", [left, right]) => Self::Pair((*left).to_string(), (*right).to_string()),
            ("lexical", [symbol]) => Self::Lexical((*symbol).to_string()),
            ("start", [symbol]) => Self::Start((*symbol).to_string()),
            ("stats", []) => Self::Stats,
            ("help" | "?", []) => Self::Help,
            (known, _) if COMMAND_NAMES.contains(&known) => {
                return Err(Error::invalid_command(format!(
                    "wrong arguments for {known}; try `help`"
                )));
            }
            (unknown, _) => {
                return Err(Error::invalid_command(format!(
                    "unknown command {unknown}; try `help`"
                )));
            }
        };
        Ok(command)
    }

    /// Runs the command against a session and renders the answer.
    #[must_use]
    pub fn run(&self, session: &Session) -> String {
        let grammar = session.grammar();
        let lexicon = session.lexicon();

        match self {
            Self::Lookup(word) => match lexicon.lookup(word) {
                Some(readings) => {
                    let mut out = String::new();
                    for (i, reading) in readings.iter().enumerate() {
                        let _ = writeln!(out, "{:>3}. {reading}", i + 1);
                    }
                    out
                }
                None => format!("no readings for {word}\n"),
            },
            Self::Pos(word) => {
                let tags = lexicon.pos_tags(word);
                if tags.is_empty() {
                    format!("no readings for {word}\n")
                } else {
                    let tags: Vec<&str> = tags.iter().map(|p| p.as_str()).collect();
                    format!("{}\n", tags.join(" "))
                }
            }
            Self::Features(word, pos) => match lexicon.features(word, *pos) {
                Some(entry) => format!("{entry}\n"),
                None => match pos {
                    Some(pos) => format!("no {pos} reading for {word}\n"),
                    None => format!("no readings for {word}\n"),
                },
            },
            Self::Subcat(lemma) => {
                let frames: Vec<String> = lexicon
                    .verb_subcat(lemma)
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                let mut out = frames.join(" ");
                match lexicon.subcat_entry(lemma) {
                    None => out.push_str(" (default)"),
                    Some(entry) => {
                        if let Some(prep) = &entry.preposition {
                            let _ = write!(out, " (governs {prep})");
                        }
                    }
                }
                out.push('\n');
                out
            }
            Self::Lhs(symbol) => render_rules(grammar.rules_for_lhs(symbol)),
            Self::Pair(left, right) => render_rules(grammar.rules_for_rhs_pair(left, right)),
            Self::Lexical(symbol) => render_rules(grammar.lexical_rules_for_pos(symbol)),
            Self::Start(symbol) => {
                if grammar.is_start_symbol(symbol) {
                    "yes\n".to_string()
                } else {
                    "no\n".to_string()
                }
            }
            Self::Stats => format!("{grammar}\n{lexicon}\n"),
            Self::Help => HELP.to_string(),
        }
    }
}

fn render_rules(rules: &[Arc<Rule>]) -> String {
    if rules.is_empty() {
        return "no rules\n".to_string();
    }
    let mut out = String::new();
    for rule in rules {
        let _ = writeln!(out, "{rule}");
    }
    out
}

const HELP: &str = "\
lookup WORD          every reading of WORD
pos WORD             parts of speech WORD can take
features WORD [POS]  first reading of WORD, optionally for POS
subcat LEMMA         complement frames of a verb
lhs SYMBOL           rules rewriting SYMBOL
pair LEFT RIGHT      binary rules with right side LEFT RIGHT
lexical SYMBOL       unary rules over SYMBOL
start SYMBOL         whether SYMBOL is the start symbol
stats                grammar and lexicon sizes
help                 this summary
";
