//! Integration tests for Layer 1: Language
//!
//! Tests for the vocabulary DSL lexer and reader.

mod lexer;
mod reader;
