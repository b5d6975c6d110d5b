//! Lexigram - CNF English grammar and feature-annotated lexicon
//!
//! This crate re-exports all layers of the Lexigram system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: lexigram_runtime    — Query REPL, CLI, logging setup
//! Layer 2: lexigram_grammar    — CNF rules, grammar indices, English rules
//!          lexigram_lexicon    — Layered lexicon, morphology, subcategorization
//! Layer 1: lexigram_language   — Lexer and reader for the vocabulary DSL
//! Layer 0: lexigram_foundation — Core types (Symbol, Pos, features, Error)
//! ```

pub use lexigram_foundation as foundation;
pub use lexigram_grammar as grammar;
pub use lexigram_language as language;
pub use lexigram_lexicon as lexicon;
pub use lexigram_runtime as runtime;
