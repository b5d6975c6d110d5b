//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use lexigram_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_non_cnf_rule() {
    let err = Error::non_cnf_rule("VP", 0);
    assert!(matches!(err.kind, ErrorKind::NonCnfRule { arity: 0, .. }));
    let msg = format!("{err}");
    assert!(msg.contains("VP"));
    assert!(msg.contains("CNF"));
}

#[test]
fn error_unknown_pos() {
    let err = Error::unknown_pos("XX");
    assert!(matches!(err.kind, ErrorKind::UnknownPos(_)));
    assert!(format!("{err}").contains("XX"));
}

#[test]
fn error_unknown_subcat_frame() {
    let err = Error::unknown_subcat_frame("NP_VP");
    assert!(matches!(err.kind, ErrorKind::UnknownSubcatFrame(_)));
    assert!(format!("{err}").contains("NP_VP"));
}

#[test]
fn error_parse_position() {
    let err = Error::parse("unterminated list", 4, 7);
    assert!(matches!(
        err.kind,
        ErrorKind::ParseError {
            line: 4,
            column: 7,
            ..
        }
    ));
    assert_eq!(format!("{err}"), "parse error at 4:7: unterminated list");
}

#[test]
fn error_invalid_command() {
    let err = Error::invalid_command("unknown command parse");
    assert_eq!(format!("{err}"), "invalid command: unknown command parse");
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_display_without_position() {
    let ctx = ErrorContext::new().with_source("nouns");
    assert_eq!(ctx.to_string(), "at nouns");
}

#[test]
fn context_display_empty() {
    assert_eq!(ErrorContext::new().to_string(), "");
}

#[test]
fn context_attaches_to_error() {
    let err = Error::invalid_vocabulary("missing :pos")
        .with_context(ErrorContext::new().with_source("slang.lex").with_position(3, 2));
    let ctx = err.context.as_ref().unwrap();
    assert_eq!(ctx.line, Some(3));
    assert_eq!(ctx.column, Some(2));
    assert!(matches!(err.kind, ErrorKind::InvalidVocabulary(_)));
}
