//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Symbol, Pos, feature values and bundles, Error.

mod errors;
mod features;
