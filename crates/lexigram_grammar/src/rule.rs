//! Grammar rules in Chomsky Normal Form.
//!
//! A rule is split into its structural identity ([`RuleKey`]) and the data it
//! carries ([`RulePayload`]). Indices are built from keys; payloads ride along.

use std::collections::BTreeMap;
use std::fmt;

use lexigram_foundation::{Error, FeatureBundle, FeatureValue, Result, Symbol};

// =============================================================================
// Right-hand side
// =============================================================================

/// The right side of a CNF rule: one symbol or exactly two.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rhs {
    /// `A → B`, including pre-terminal rules such as `NP → PRP`.
    Unary(Symbol),
    /// `A → B C`
    Binary(Symbol, Symbol),
}

impl Rhs {
    /// Builds a right side from a slice of symbol names.
    ///
    /// # Errors
    /// Returns [`ErrorKind::NonCnfRule`](lexigram_foundation::ErrorKind::NonCnfRule)
    /// if `symbols` does not hold exactly one or two names.
    pub fn from_slice(lhs: &str, symbols: &[&str]) -> Result<Self> {
        match symbols {
            [only] => Ok(Self::Unary(Symbol::new(only))),
            [left, right] => Ok(Self::Binary(Symbol::new(left), Symbol::new(right))),
            _ => Err(Error::non_cnf_rule(lhs, symbols.len())),
        }
    }

    /// Returns the number of symbols (1 or 2).
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_, _) => 2,
        }
    }

    /// Returns the first symbol.
    #[must_use]
    pub const fn first(&self) -> &Symbol {
        match self {
            Self::Unary(first) | Self::Binary(first, _) => first,
        }
    }

    /// Returns both symbols of a binary right side.
    #[must_use]
    pub const fn pair(&self) -> Option<(&Symbol, &Symbol)> {
        match self {
            Self::Unary(_) => None,
            Self::Binary(left, right) => Some((left, right)),
        }
    }

    /// Iterates over the symbols in order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        let (first, second) = match self {
            Self::Unary(only) => (only, None),
            Self::Binary(left, right) => (left, Some(right)),
        };
        std::iter::once(first).chain(second)
    }
}

impl fmt::Display for Rhs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unary(only) => write!(f, "{only}"),
            Self::Binary(left, right) => write!(f, "{left} {right}"),
        }
    }
}

// =============================================================================
// Key and payload
// =============================================================================

/// The structural identity of a rule.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleKey {
    /// Left side non-terminal.
    pub lhs: Symbol,
    /// Right side symbols.
    pub rhs: Rhs,
}

/// A declared relation between a feature on the parent and its children.
///
/// Constraints are recorded for consumers; the grammar does not enforce them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Constraint {
    /// The feature must agree across the children.
    Agree,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Agree => f.write_str("agree"),
        }
    }
}

/// Data a rule carries beyond its structure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RulePayload {
    /// Features asserted on the parent constituent.
    pub features: FeatureBundle,
    /// Feature constraints between the children.
    pub constraints: BTreeMap<String, Constraint>,
}

// =============================================================================
// Rule
// =============================================================================

/// A CNF grammar rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    key: RuleKey,
    payload: RulePayload,
}

impl Rule {
    /// Creates a rule from its key and payload.
    #[must_use]
    pub fn new(key: RuleKey, payload: RulePayload) -> Self {
        Self { key, payload }
    }

    /// Creates a unary rule `lhs → child` with an empty payload.
    #[must_use]
    pub fn unary(lhs: &str, child: &str) -> Self {
        Self::new(
            RuleKey {
                lhs: Symbol::new(lhs),
                rhs: Rhs::Unary(Symbol::new(child)),
            },
            RulePayload::default(),
        )
    }

    /// Creates a binary rule `lhs → left right` with an empty payload.
    #[must_use]
    pub fn binary(lhs: &str, left: &str, right: &str) -> Self {
        Self::new(
            RuleKey {
                lhs: Symbol::new(lhs),
                rhs: Rhs::Binary(Symbol::new(left), Symbol::new(right)),
            },
            RulePayload::default(),
        )
    }

    /// Sets a feature asserted on the parent.
    #[must_use]
    pub fn with_feature(mut self, name: &str, value: impl Into<FeatureValue>) -> Self {
        self.payload.features.insert(name, value);
        self
    }

    /// Declares a constraint on a feature.
    #[must_use]
    pub fn with_constraint(mut self, name: &str, constraint: Constraint) -> Self {
        self.payload.constraints.insert(name.to_string(), constraint);
        self
    }

    /// Returns the structural key.
    #[must_use]
    pub const fn key(&self) -> &RuleKey {
        &self.key
    }

    /// Returns the payload.
    #[must_use]
    pub const fn payload(&self) -> &RulePayload {
        &self.payload
    }

    /// Returns the left side.
    #[must_use]
    pub const fn lhs(&self) -> &Symbol {
        &self.key.lhs
    }

    /// Returns the right side.
    #[must_use]
    pub const fn rhs(&self) -> &Rhs {
        &self.key.rhs
    }

    /// Returns the features asserted on the parent.
    #[must_use]
    pub const fn features(&self) -> &FeatureBundle {
        &self.payload.features
    }

    /// Returns the declared feature constraints.
    #[must_use]
    pub const fn constraints(&self) -> &BTreeMap<String, Constraint> {
        &self.payload.constraints
    }

    /// Returns true for a unary rule.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self.key.rhs, Rhs::Unary(_))
    }

    /// Returns true for a binary rule.
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        matches!(self.key.rhs, Rhs::Binary(_, _))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key.lhs)?;
        if !self.payload.features.is_empty() {
            write!(f, "[{}]", self.payload.features)?;
        }
        write!(f, " → {}", self.key.rhs)
    }
}
