//! Core types shared by the lexigram grammar and lexicon.
//!
//! This crate provides:
//! - [`Symbol`] - Cheaply clonable grammar category names
//! - [`Pos`] - Penn Treebank part-of-speech tags
//! - [`Atom`], [`FeatureValue`], [`FeatureBundle`] - Morphosyntactic features
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod feature;
pub mod pos;
pub mod symbol;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use feature::{Atom, FeatureBundle, FeatureValue};
pub use pos::Pos;
pub use symbol::Symbol;
