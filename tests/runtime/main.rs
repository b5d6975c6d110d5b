//! Integration tests for Layer 3: Runtime
//!
//! Tests for query commands, sessions, and the REPL.
