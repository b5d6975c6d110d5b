//! Integration tests for Layer 2: Grammar
//!
//! Tests for rule construction, grammar indices, and the English rules.

mod builder;
