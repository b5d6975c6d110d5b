//! Integration tests for stored-reading lookup

use lexigram_foundation::{Atom, FeatureValue, Pos};
use lexigram_lexicon::{Lexicon, LexiconConfig, english_lexicon};
use proptest::prelude::*;

fn tags(lexicon: &Lexicon, word: &str) -> Vec<Pos> {
    lexicon
        .lookup(word)
        .map(|readings| readings.iter().map(|e| e.pos).collect())
        .unwrap_or_default()
}

#[test]
fn lookup_is_case_insensitive() {
    let lexicon = english_lexicon();
    assert_eq!(lexicon.lookup("The"), lexicon.lookup("the"));
    assert_eq!(lexicon.lookup("THE"), lexicon.lookup("the"));
    assert!(lexicon.lookup("the").is_some());
}

#[test]
fn lookup_folds_titlecase_letters() {
    let lexicon = Lexicon::builder()
        .source("(table: names (ǆemal :pos NNP :number SG))")
        .unwrap()
        .build();
    assert!(lexicon.has_word("ǆemal"));
    assert_eq!(lexicon.has_word("ǅemal"), lexicon.has_word("ǆemal"));
    assert_eq!(lexicon.lookup("Ǆemal"), lexicon.lookup("ǆemal"));
}

#[test]
fn close_is_adjective_and_verb() {
    let lexicon = english_lexicon();
    let readings = tags(lexicon, "close");
    assert!(readings.contains(&Pos::JJ));
    assert!(readings.iter().any(|p| p.is_verb()));
}

#[test]
fn past_form_is_both_past_and_participle() {
    let lexicon = english_lexicon();
    assert_eq!(tags(lexicon, "bought"), [Pos::VBD, Pos::VBN]);
    for entry in lexicon.lookup("bought").unwrap().iter() {
        assert_eq!(entry.lemma(), Some("buy"));
    }
}

#[test]
fn determiner_features() {
    let lexicon = english_lexicon();
    let the = lexicon.features("the", None).unwrap();
    assert_eq!(the.pos, Pos::DT);
    assert_eq!(the.features.get("number"), Some(&FeatureValue::Unconstrained));
    assert_eq!(
        the.features.get("definite"),
        Some(&FeatureValue::from(true))
    );

    let a = lexicon.features("a", None).unwrap();
    assert!(a.features.admits("number", &Atom::from("SG")));
    assert!(!a.features.admits("number", &Atom::from("PL")));
}

#[test]
fn features_filter_by_pos() {
    let lexicon = english_lexicon();
    assert_eq!(lexicon.features("her", Some(Pos::PRPS)).unwrap().pos, Pos::PRPS);
    assert_eq!(lexicon.features("her", None).unwrap().pos, Pos::PRP);
    assert!(lexicon.features("her", Some(Pos::NN)).is_none());
    assert!(lexicon.features("xyzzy", None).is_none());
}

#[test]
fn pos_tags_are_distinct() {
    let lexicon = english_lexicon();
    let tags = lexicon.pos_tags("most");
    assert_eq!(tags.len(), 3);
    assert!(tags.contains(&Pos::JJS));
    assert!(lexicon.pos_tags("xyzzy").is_empty());
}

#[test]
fn unknown_word() {
    let lexicon = english_lexicon();
    assert!(lexicon.lookup("xyzzy").is_none());
    assert!(!lexicon.has_word("xyzzy"));
    assert!(lexicon.has_word("Listen"));
}

#[test]
fn case_sensitive_keys() {
    let lexicon = Lexicon::builder()
        .source("(table: names :class open (Paris :pos NNP))")
        .unwrap()
        .config(LexiconConfig::default().with_lowercase_keys(false))
        .build();
    assert!(lexicon.has_word("Paris"));
    assert!(!lexicon.has_word("paris"));
}

#[test]
fn summary() {
    let lexicon = english_lexicon();
    assert_eq!(
        lexicon.to_string(),
        "Lexicon(535 words, 638 readings, 54 verbs)"
    );
}

proptest! {
    #[test]
    fn lookup_ignores_case(index in 0usize..535, mask in any::<u64>()) {
        let lexicon = english_lexicon();
        let mut words: Vec<&str> = lexicon.words().collect();
        words.sort_unstable();
        let word = words[index % words.len()];

        let mixed: String = word
            .chars()
            .enumerate()
            .map(|(i, c)| if (mask >> (i % 64)) & 1 == 1 { c.to_ascii_uppercase() } else { c })
            .collect();
        prop_assert_eq!(lexicon.lookup(&mixed), lexicon.lookup(word));
    }
}
