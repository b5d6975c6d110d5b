//! Integration tests for the lexer
//!
//! Tests tokenization of vocabulary source.

use lexigram_language::{Lexer, TokenKind};
use proptest::prelude::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize_all(source)
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

// =============================================================================
// Basic Tokens
// =============================================================================

#[test]
fn tokenize_literals() {
    assert_eq!(
        kinds("nil true false 3 -1"),
        vec![
            TokenKind::Nil,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Int(3),
            TokenKind::Int(-1),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn tokenize_table_head() {
    let tokens = kinds("(table: modals :class closed)");
    assert_eq!(tokens[0], TokenKind::LParen);
    assert_eq!(tokens[1], TokenKind::Symbol("table:".into()));
    assert_eq!(tokens[2], TokenKind::Symbol("modals".into()));
    assert_eq!(tokens[3], TokenKind::Keyword("class".into()));
    assert_eq!(tokens[4], TokenKind::Symbol("closed".into()));
    assert_eq!(tokens[5], TokenKind::RParen);
}

#[test]
fn tokenize_tag_spellings() {
    assert_eq!(kinds("PRP$")[0], TokenKind::Symbol("PRP$".into()));
    assert_eq!(kinds("NP_PP")[0], TokenKind::Symbol("NP_PP".into()));
    assert_eq!(kinds("o'clock")[0], TokenKind::Symbol("o'clock".into()));
}

#[test]
fn tokenize_collections() {
    assert_eq!(
        kinds("#{1 2} [NP]"),
        vec![
            TokenKind::HashBrace,
            TokenKind::Int(1),
            TokenKind::Int(2),
            TokenKind::RBrace,
            TokenKind::LBracket,
            TokenKind::Symbol("NP".into()),
            TokenKind::RBracket,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn commas_are_whitespace() {
    assert_eq!(kinds("#{1, 2}").len(), 5);
}

// =============================================================================
// Comments and Errors
// =============================================================================

#[test]
fn comments_run_to_end_of_line() {
    let tokens = kinds(";; header\n(a)");
    assert!(matches!(tokens[0], TokenKind::Comment(_)));
    assert_eq!(tokens[1], TokenKind::LParen);
}

#[test]
fn bad_hash_is_error_token() {
    assert!(matches!(kinds("#x")[0], TokenKind::Error(_)));
    assert!(matches!(kinds("#")[0], TokenKind::Error(_)));
}

#[test]
fn bare_colon_is_error_token() {
    assert!(matches!(kinds(": pos")[0], TokenKind::Error(_)));
}

#[test]
fn spans_track_lines() {
    let tokens = Lexer::tokenize_all("(a\n  :pos DT)");
    let keyword = &tokens[2];
    assert_eq!(keyword.kind, TokenKind::Keyword("pos".into()));
    assert_eq!(keyword.span.line, 2);
    assert_eq!(keyword.span.column, 3);
}

proptest! {
    #[test]
    fn lexer_always_terminates_with_eof(source in "\\PC{0,64}") {
        let tokens = Lexer::tokenize_all(&source);
        prop_assert_eq!(&tokens.last().unwrap().kind, &TokenKind::Eof);
        prop_assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(),
            1
        );
    }
}
