//! Morphosyntactic features.
//!
//! A feature value is one of three shapes:
//!
//! - [`FeatureValue::Unconstrained`] matches any requirement (`you` has no
//!   fixed number).
//! - [`FeatureValue::Scalar`] is a single value (`number SG`).
//! - [`FeatureValue::OneOf`] is a set of admissible values (`person #{1 2}`),
//!   always tested by membership, never by scalar equality.
//!
//! [`FeatureBundle`] maps feature names to values. It is persistent: clones
//! are O(1) and [`FeatureBundle::overlay`] shares structure with its inputs.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A scalar feature value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Atom {
    /// Boolean value (`definite true`).
    Bool(bool),
    /// Integer value (`person 3`).
    Int(i64),
    /// Textual value (`number SG`, `lemma buy`).
    Text(Arc<str>),
}

impl Atom {
    /// Returns the text of a textual atom.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Atom {
    fn from(s: &str) -> Self {
        Self::Text(Arc::from(s))
    }
}

impl From<String> for Atom {
    fn from(s: String) -> Self {
        Self::Text(Arc::from(s))
    }
}

impl From<i64> for Atom {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<bool> for Atom {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// The value of one feature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FeatureValue {
    /// Matches any requirement.
    Unconstrained,
    /// A single value.
    Scalar(Atom),
    /// A set of admissible values.
    OneOf(BTreeSet<Atom>),
}

impl FeatureValue {
    /// Creates a scalar value.
    #[must_use]
    pub fn scalar(atom: impl Into<Atom>) -> Self {
        Self::Scalar(atom.into())
    }

    /// Creates a membership constraint from the given values.
    #[must_use]
    pub fn one_of<A: Into<Atom>>(atoms: impl IntoIterator<Item = A>) -> Self {
        Self::OneOf(atoms.into_iter().map(Into::into).collect())
    }

    /// Returns true if this value places no constraint.
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        matches!(self, Self::Unconstrained)
    }

    /// Returns the scalar atom, if this is a scalar.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Atom> {
        match self {
            Self::Scalar(atom) => Some(atom),
            _ => None,
        }
    }

    /// Returns true if `atom` satisfies this value.
    ///
    /// Scalars compare by equality, sets by membership, and an unconstrained
    /// value admits everything.
    #[must_use]
    pub fn admits(&self, atom: &Atom) -> bool {
        match self {
            Self::Unconstrained => true,
            Self::Scalar(own) => own == atom,
            Self::OneOf(set) => set.contains(atom),
        }
    }

    /// Returns true if some single value satisfies both `self` and `other`.
    #[must_use]
    pub fn is_compatible(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unconstrained, _) | (_, Self::Unconstrained) => true,
            (Self::Scalar(a), Self::Scalar(b)) => a == b,
            (Self::Scalar(a), Self::OneOf(set)) | (Self::OneOf(set), Self::Scalar(a)) => {
                set.contains(a)
            }
            (Self::OneOf(a), Self::OneOf(b)) => a.intersection(b).next().is_some(),
        }
    }
}

impl From<Atom> for FeatureValue {
    fn from(atom: Atom) -> Self {
        Self::Scalar(atom)
    }
}

impl From<&str> for FeatureValue {
    fn from(s: &str) -> Self {
        Self::Scalar(Atom::from(s))
    }
}

impl From<i64> for FeatureValue {
    fn from(n: i64) -> Self {
        Self::Scalar(Atom::Int(n))
    }
}

impl From<bool> for FeatureValue {
    fn from(b: bool) -> Self {
        Self::Scalar(Atom::Bool(b))
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unconstrained => f.write_str("nil"),
            Self::Scalar(atom) => write!(f, "{atom}"),
            Self::OneOf(set) => {
                f.write_str("#{")?;
                for (i, atom) in set.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{atom}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// An ordered map of feature names to values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeatureBundle(im::OrdMap<Arc<str>, FeatureValue>);

impl FeatureBundle {
    /// Creates an empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self(im::OrdMap::new())
    }

    /// Returns the number of features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the bundle has no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets a feature's value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.0.get(name)
    }

    /// Returns true if the feature is present (even if unconstrained).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Gets the text of a scalar textual feature such as `lemma`.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(FeatureValue::as_scalar)
            .and_then(Atom::as_text)
    }

    /// Sets a feature, replacing any previous value.
    pub fn insert(&mut self, name: &str, value: impl Into<FeatureValue>) {
        self.0.insert(Arc::from(name), value.into());
    }

    /// Returns a bundle with the feature set.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<FeatureValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns a bundle holding every feature of `self` and `other`.
    ///
    /// `other` wins where both define the same feature.
    #[must_use]
    pub fn overlay(&self, other: &Self) -> Self {
        Self(other.0.clone().union(self.0.clone()))
    }

    /// Returns true if `atom` satisfies the named feature.
    ///
    /// A missing feature places no constraint.
    #[must_use]
    pub fn admits(&self, name: &str, atom: &Atom) -> bool {
        self.get(name).is_none_or(|value| value.admits(atom))
    }

    /// Iterates over features in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.0.iter().map(|(k, v)| (&**k, v))
    }
}

impl<'a, V: Into<FeatureValue>> FromIterator<(&'a str, V)> for FeatureBundle {
    fn from_iter<I: IntoIterator<Item = (&'a str, V)>>(iter: I) -> Self {
        let mut bundle = Self::new();
        for (name, value) in iter {
            bundle.insert(name, value);
        }
        bundle
    }
}

impl fmt::Display for FeatureBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, ":{name} {value}")?;
        }
        f.write_str("}")
    }
}
