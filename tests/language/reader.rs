//! Integration tests for the reader
//!
//! Tests reading vocabulary source into forms.

use lexigram_foundation::ErrorKind;
use lexigram_language::{Form, read};

#[test]
fn read_entry_list() {
    let forms = read("(buy :pos VB :subcat [NP NP_PP])").unwrap();
    assert_eq!(forms.len(), 1);

    let items = forms[0].as_list().unwrap();
    assert_eq!(items[0].as_symbol(), Some("buy"));
    assert_eq!(items[1].as_keyword(), Some("pos"));
    assert_eq!(items[2].as_symbol(), Some("VB"));
    assert!(matches!(&items[4], Form::Vector(frames, _) if frames.len() == 2));
}

#[test]
fn read_set_and_nil() {
    let forms = read("#{1 2} nil").unwrap();
    assert!(matches!(&forms[0], Form::Set(atoms, _) if atoms.len() == 2));
    assert!(matches!(forms[1], Form::Nil(_)));
}

#[test]
fn read_skips_comments() {
    let forms = read("; first\n(a) ; trailing\n; last").unwrap();
    assert_eq!(forms.len(), 1);
}

#[test]
fn read_nested_table() {
    let source = "(table: modals :class closed\n  (will :pos MD :tense FUT))";
    let forms = read(source).unwrap();
    let table = forms[0].as_list().unwrap();
    assert_eq!(table.len(), 5);
    assert_eq!(table[4].as_list().unwrap().len(), 5);
    assert_eq!(table[4].span().line, 2);
}

#[test]
fn unterminated_list_reports_opener() {
    let err = read("\n  (close :pos JJ").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::ParseError {
            line: 2,
            column: 3,
            ..
        }
    ));
}

#[test]
fn stray_closer_is_error() {
    let err = read("(a))").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ParseError { .. }));
    assert!(err.to_string().contains("')'"));
}

#[test]
fn mismatched_closer_is_error() {
    assert!(read("[NP)").is_err());
    assert!(read("#{1 2]").is_err());
}

#[test]
fn form_type_names() {
    let forms = read("nil 3 x :k (a) [b] #{c} true").unwrap();
    let names: Vec<&str> = forms.iter().map(Form::type_name).collect();
    assert_eq!(
        names,
        ["nil", "int", "symbol", "keyword", "list", "vector", "set", "bool"]
    );
}

#[test]
fn runaway_nesting_is_error() {
    let err = read(&"[".repeat(200_000)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ParseError { .. }));
    assert!(err.to_string().contains("nesting too deep"));
}
