//! Integration tests for feature values and bundles

use lexigram_foundation::{Atom, FeatureBundle, FeatureValue};
use proptest::prelude::*;

// =============================================================================
// Feature Values
// =============================================================================

#[test]
fn unconstrained_admits_everything() {
    let value = FeatureValue::Unconstrained;
    assert!(value.admits(&Atom::from("SG")));
    assert!(value.admits(&Atom::from("PL")));
    assert!(value.admits(&Atom::Int(3)));
    assert!(value.is_unconstrained());
}

#[test]
fn one_of_tests_membership() {
    let person = FeatureValue::one_of([1i64, 2]);
    assert!(person.admits(&Atom::Int(1)));
    assert!(person.admits(&Atom::Int(2)));
    assert!(!person.admits(&Atom::Int(3)));
    assert!(person.as_scalar().is_none());
}

#[test]
fn scalar_compares_by_equality() {
    let number = FeatureValue::from("SG");
    assert!(number.admits(&Atom::from("SG")));
    assert!(!number.admits(&Atom::from("PL")));
    assert_eq!(number.as_scalar().and_then(Atom::as_text), Some("SG"));
}

#[test]
fn compatibility() {
    let non_3sg = FeatureValue::one_of([1i64, 2]);
    assert!(non_3sg.is_compatible(&FeatureValue::from(2i64)));
    assert!(!non_3sg.is_compatible(&FeatureValue::from(3i64)));
    assert!(non_3sg.is_compatible(&FeatureValue::one_of([2i64, 3])));
    assert!(FeatureValue::Unconstrained.is_compatible(&FeatureValue::from("PL")));
}

#[test]
fn value_display() {
    assert_eq!(FeatureValue::Unconstrained.to_string(), "nil");
    assert_eq!(FeatureValue::one_of([2i64, 1]).to_string(), "#{1 2}");
    assert_eq!(FeatureValue::from(true).to_string(), "true");
}

// =============================================================================
// Feature Bundles
// =============================================================================

#[test]
fn bundle_overlay_residual_wins() {
    let stored = FeatureBundle::new()
        .with("lemma", "buy")
        .with("tense", "PRES");
    let residual = FeatureBundle::new().with("tense", "PAST");

    let merged = stored.overlay(&residual);
    assert_eq!(merged.text("tense"), Some("PAST"));
    assert_eq!(merged.text("lemma"), Some("buy"));
    assert_eq!(stored.text("tense"), Some("PRES"));
}

#[test]
fn bundle_missing_feature_places_no_constraint() {
    let bundle = FeatureBundle::new().with("number", "SG");
    assert!(bundle.admits("person", &Atom::Int(3)));
    assert!(!bundle.admits("number", &Atom::from("PL")));
}

#[test]
fn bundle_unconstrained_is_present() {
    let bundle = FeatureBundle::new().with("number", FeatureValue::Unconstrained);
    assert!(bundle.contains("number"));
    assert!(bundle.text("number").is_none());
}

#[test]
fn bundle_display_is_ordered() {
    let bundle: FeatureBundle = [("tense", "PAST"), ("lemma", "buy")].into_iter().collect();
    assert_eq!(bundle.to_string(), "{:lemma buy, :tense PAST}");
}

proptest! {
    #[test]
    fn overlay_keeps_every_name(
        left in prop::collection::btree_map("[a-z]{1,6}", "[A-Z]{1,4}", 0..6),
        right in prop::collection::btree_map("[a-z]{1,6}", "[A-Z]{1,4}", 0..6),
    ) {
        let a: FeatureBundle = left.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        let b: FeatureBundle = right.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        let merged = a.overlay(&b);

        for (name, value) in &right {
            prop_assert_eq!(merged.text(name), Some(value.as_str()));
        }
        for name in left.keys() {
            prop_assert!(merged.contains(name));
        }
    }
}
