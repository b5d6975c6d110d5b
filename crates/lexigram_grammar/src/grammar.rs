//! An indexed, immutable CNF grammar.
//!
//! A [`GrammarBuilder`] collects rules; [`GrammarBuilder::build`] indexes them
//! once and yields a [`Grammar`] that only answers queries. Lookups never fail:
//! an unknown symbol yields an empty slice.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use lexigram_foundation::{Result, Symbol};
use tracing::debug;

use crate::rule::{Rhs, Rule};

/// The default start symbol.
pub const DEFAULT_START_SYMBOL: &str = "S";

type Bucket = Vec<Arc<Rule>>;

// =============================================================================
// Builder
// =============================================================================

/// Collects rules for a [`Grammar`].
#[derive(Debug)]
pub struct GrammarBuilder {
    rules: Vec<Rule>,
    start: Symbol,
}

impl Default for GrammarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarBuilder {
    /// Creates an empty builder with start symbol `S`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            start: Symbol::new(DEFAULT_START_SYMBOL),
        }
    }

    /// Sets the start symbol.
    #[must_use]
    pub fn with_start_symbol(mut self, symbol: &str) -> Self {
        self.start = Symbol::new(symbol);
        self
    }

    /// Adds a rule.
    pub fn rule(&mut self, rule: Rule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Adds `lhs → child` with an empty payload.
    pub fn unary(&mut self, lhs: &str, child: &str) -> &mut Self {
        self.rule(Rule::unary(lhs, child))
    }

    /// Adds `lhs → left right` with an empty payload.
    pub fn binary(&mut self, lhs: &str, left: &str, right: &str) -> &mut Self {
        self.rule(Rule::binary(lhs, left, right))
    }

    /// Adds a rule from a slice of right side names.
    ///
    /// # Errors
    /// Returns [`ErrorKind::NonCnfRule`](lexigram_foundation::ErrorKind::NonCnfRule)
    /// if `rhs` does not hold exactly one or two names. Nothing is added.
    pub fn add_rule(&mut self, lhs: &str, rhs: &[&str]) -> Result<&mut Self> {
        let rhs = Rhs::from_slice(lhs, rhs)?;
        let rule = match rhs {
            Rhs::Unary(child) => Rule::unary(lhs, child.as_str()),
            Rhs::Binary(left, right) => Rule::binary(lhs, left.as_str(), right.as_str()),
        };
        Ok(self.rule(rule))
    }

    /// Returns the number of rules collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Indexes the collected rules.
    #[must_use]
    pub fn build(self) -> Grammar {
        let mut grammar = Grammar {
            rules: Vec::with_capacity(self.rules.len()),
            by_lhs: HashMap::new(),
            by_pair: HashMap::new(),
            by_pos: HashMap::new(),
            non_terminals: BTreeSet::new(),
            distinct_productions: 0,
            start: self.start,
        };

        let mut keys = HashSet::new();
        for rule in self.rules {
            let rule = Arc::new(rule);
            keys.insert(rule.key().clone());
            grammar.non_terminals.insert(rule.lhs().clone());

            grammar
                .by_lhs
                .entry(rule.lhs().clone())
                .or_default()
                .push(Arc::clone(&rule));

            match rule.rhs() {
                Rhs::Unary(child) => grammar
                    .by_pos
                    .entry(child.clone())
                    .or_default()
                    .push(Arc::clone(&rule)),
                Rhs::Binary(left, right) => grammar
                    .by_pair
                    .entry(left.clone())
                    .or_default()
                    .entry(right.clone())
                    .or_default()
                    .push(Arc::clone(&rule)),
            }

            grammar.rules.push(rule);
        }
        grammar.distinct_productions = keys.len();

        debug!(
            rules = grammar.rules.len(),
            non_terminals = grammar.non_terminals.len(),
            start = %grammar.start,
            "grammar built"
        );
        grammar
    }
}

// =============================================================================
// Grammar
// =============================================================================

/// An immutable CNF grammar with rule indices.
///
/// Every rule sits in exactly one left-side bucket. Binary rules are also
/// indexed by their ordered right side pair, unary rules by their single
/// right side symbol.
#[derive(Debug)]
pub struct Grammar {
    rules: Bucket,
    by_lhs: HashMap<Symbol, Bucket>,
    by_pair: HashMap<Symbol, HashMap<Symbol, Bucket>>,
    by_pos: HashMap<Symbol, Bucket>,
    non_terminals: BTreeSet<Symbol>,
    distinct_productions: usize,
    start: Symbol,
}

impl Grammar {
    /// Creates a builder.
    #[must_use]
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::new()
    }

    /// Returns the rules with the given left side, in insertion order.
    #[must_use]
    pub fn rules_for_lhs(&self, lhs: &str) -> &[Arc<Rule>] {
        self.by_lhs.get(lhs).map_or(&[], Vec::as_slice)
    }

    /// Returns the binary rules whose right side is exactly `left right`.
    #[must_use]
    pub fn rules_for_rhs_pair(&self, left: &str, right: &str) -> &[Arc<Rule>] {
        self.by_pair
            .get(left)
            .and_then(|inner| inner.get(right))
            .map_or(&[], Vec::as_slice)
    }

    /// Returns the unary rules whose single right side symbol is `pos`.
    ///
    /// This includes the pre-terminal rule `pos → pos` where one exists.
    #[must_use]
    pub fn lexical_rules_for_pos(&self, pos: &str) -> &[Arc<Rule>] {
        self.by_pos.get(pos).map_or(&[], Vec::as_slice)
    }

    /// Returns true if `symbol` is the start symbol.
    #[must_use]
    pub fn is_start_symbol(&self, symbol: &str) -> bool {
        self.start == symbol
    }

    /// Returns the start symbol.
    #[must_use]
    pub fn start_symbol(&self) -> &Symbol {
        &self.start
    }

    /// Returns every left side symbol.
    #[must_use]
    pub fn non_terminals(&self) -> &BTreeSet<Symbol> {
        &self.non_terminals
    }

    /// Returns every rule in insertion order.
    #[must_use]
    pub fn rules(&self) -> &[Arc<Rule>] {
        &self.rules
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the grammar has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the number of structurally distinct rules.
    ///
    /// Rules sharing a key but carrying different payloads count once.
    #[must_use]
    pub fn distinct_productions(&self) -> usize {
        self.distinct_productions
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Grammar({} rules, {} non-terminals)",
            self.rules.len(),
            self.non_terminals.len()
        )
    }
}
