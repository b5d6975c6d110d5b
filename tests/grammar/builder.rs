//! Integration tests for grammar construction and indexing

use lexigram_foundation::ErrorKind;
use lexigram_grammar::{Grammar, GrammarBuilder, Rhs, Rule};
use proptest::prelude::*;

fn toy() -> Grammar {
    let mut builder = Grammar::builder();
    builder
        .binary("S", "NP", "VP")
        .binary("NP", "DT", "NN")
        .binary("S_ALT", "NP", "VP")
        .unary("NP", "PRP")
        .unary("VP", "VB");
    builder.build()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn add_rule_rejects_non_cnf() {
    let mut builder = GrammarBuilder::new();
    assert!(builder.add_rule("S", &["NP", "VP"]).is_ok());

    let err = builder.add_rule("VP", &["V", "NP", "PP"]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NonCnfRule { arity: 3, .. }));

    let err = builder.add_rule("VP", &[]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NonCnfRule { arity: 0, .. }));

    assert_eq!(builder.len(), 1);
}

#[test]
fn empty_grammar() {
    let grammar = GrammarBuilder::new().build();
    assert!(grammar.is_empty());
    assert!(grammar.rules_for_lhs("S").is_empty());
    assert!(grammar.is_start_symbol("S"));
}

#[test]
fn custom_start_symbol() {
    let grammar = GrammarBuilder::new().with_start_symbol("ROOT").build();
    assert!(grammar.is_start_symbol("ROOT"));
    assert!(!grammar.is_start_symbol("S"));
    assert_eq!(grammar.start_symbol(), "ROOT");
}

// =============================================================================
// Indices
// =============================================================================

#[test]
fn lhs_index_keeps_insertion_order() {
    let grammar = toy();
    let rhs: Vec<String> = grammar
        .rules_for_lhs("NP")
        .iter()
        .map(|r| r.rhs().to_string())
        .collect();
    assert_eq!(rhs, ["DT NN", "PRP"]);
}

#[test]
fn pair_index_returns_every_parent() {
    let grammar = toy();
    let parents: Vec<&str> = grammar
        .rules_for_rhs_pair("NP", "VP")
        .iter()
        .map(|r| r.lhs().as_str())
        .collect();
    assert_eq!(parents, ["S", "S_ALT"]);
    assert!(grammar.rules_for_rhs_pair("VP", "NP").is_empty());
}

#[test]
fn pos_index_holds_unary_rules() {
    let grammar = toy();
    assert_eq!(grammar.lexical_rules_for_pos("PRP").len(), 1);
    assert!(grammar.lexical_rules_for_pos("DT").is_empty());
}

#[test]
fn non_terminals_are_left_sides() {
    let grammar = toy();
    let names: Vec<&str> = grammar.non_terminals().iter().map(|s| s.as_str()).collect();
    assert_eq!(names, ["NP", "S", "S_ALT", "VP"]);
}

#[test]
fn unknown_symbols_give_empty_answers() {
    let grammar = toy();
    assert!(grammar.rules_for_lhs("XYZ").is_empty());
    assert!(grammar.rules_for_rhs_pair("XYZ", "VP").is_empty());
    assert!(grammar.lexical_rules_for_pos("XYZ").is_empty());
    assert!(!grammar.is_start_symbol("XYZ"));
}

#[test]
fn duplicate_productions_with_different_payloads() {
    let mut builder = GrammarBuilder::new();
    builder
        .rule(Rule::unary("VP", "VB"))
        .rule(Rule::unary("VP", "VB").with_feature("form", "BASE"));
    let grammar = builder.build();
    assert_eq!(grammar.len(), 2);
    assert_eq!(grammar.distinct_productions(), 1);
}

proptest! {
    #[test]
    fn pair_index_agrees_with_scan(
        rules in prop::collection::vec(("[A-D]", "[A-D]", "[A-D]"), 0..24)
    ) {
        let mut builder = GrammarBuilder::new();
        for (lhs, left, right) in &rules {
            builder.binary(lhs, left, right);
        }
        let grammar = builder.build();

        for left in ["A", "B", "C", "D"] {
            for right in ["A", "B", "C", "D"] {
                let expected = rules.iter().filter(|(_, l, r)| l == left && r == right).count();
                let found = grammar.rules_for_rhs_pair(left, right);
                prop_assert_eq!(found.len(), expected);
                for rule in found {
                    prop_assert_eq!(
                        rule.rhs(),
                        &Rhs::Binary(left.into(), right.into())
                    );
                }
            }
        }
    }
}
