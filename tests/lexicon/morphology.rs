//! Integration tests for the morphological fallback

use lexigram_foundation::{Atom, Pos};
use lexigram_lexicon::{Analysis, Lexicon, LexiconBuilder, LexiconConfig};

/// Strips a regular `-ed` and reports past tense, irregular verbs or not.
fn past_tense(word: &str) -> Vec<Analysis> {
    word.strip_suffix("ed")
        .map(|stem| {
            vec![
                Analysis::new(stem)
                    .with_pos(Pos::VBD)
                    .with_feature("tense", "PAST"),
            ]
        })
        .unwrap_or_default()
}

/// Strips a `re-` prefix without changing the tag.
fn repeated(word: &str) -> Vec<Analysis> {
    word.strip_prefix("re")
        .map(|stem| vec![Analysis::new(stem).with_feature("repeated", true)])
        .unwrap_or_default()
}

fn english_with(analyzer: fn(&str) -> Vec<Analysis>) -> Lexicon {
    LexiconBuilder::english().unwrap().analyzer(analyzer).build()
}

#[test]
fn stored_readings_take_precedence() {
    let lexicon = english_with(past_tense);
    let tags: Vec<Pos> = lexicon
        .lookup("needed")
        .unwrap()
        .iter()
        .map(|e| e.pos)
        .collect();
    assert_eq!(tags, [Pos::VBD, Pos::VBN]);
}

#[test]
fn fallback_derives_from_every_lemma_reading() {
    let lexicon = english_with(past_tense);
    let readings = lexicon.lookup("speaked").unwrap();
    let stored = lexicon.lookup("speak").unwrap();
    assert_eq!(readings.len(), stored.len());
    assert!(readings.iter().all(|e| e.pos == Pos::VBD));
    assert!(lexicon.has_word("SPEAKED"));
}

#[test]
fn residual_features_win() {
    let lexicon = english_with(past_tense);
    // The stored non-3sg present reading says PRES; the analysis says PAST.
    for entry in lexicon.lookup("speaked").unwrap().iter() {
        assert_eq!(entry.features.text("tense"), Some("PAST"), "{entry}");
    }
}

#[test]
fn analysis_without_pos_keeps_stored_tag() {
    let lexicon = english_with(repeated);
    let readings = lexicon.lookup("rewalk").unwrap();
    let tags: Vec<Pos> = readings.iter().map(|e| e.pos).collect();
    assert_eq!(tags, [Pos::VB, Pos::VBP]);
    for entry in readings.iter() {
        assert!(entry.features.admits("repeated", &Atom::Bool(true)));
    }
    // Stored verb data rides along.
    assert!(!readings[0].subcat.is_empty());
}

#[test]
fn fallback_needs_known_lemma() {
    let lexicon = english_with(past_tense);
    assert!(lexicon.lookup("xyzzyed").is_none());
    assert!(lexicon.lookup("xyzzy").is_none());
}

#[test]
fn fallback_can_be_disabled() {
    let lexicon = LexiconBuilder::english()
        .unwrap()
        .analyzer(past_tense)
        .config(LexiconConfig::strict())
        .build();
    assert!(lexicon.lookup("speaked").is_none());
    assert!(lexicon.lookup("speak").is_some());
}

#[test]
fn no_analyzer_means_no_fallback() {
    let lexicon = Lexicon::english().unwrap();
    assert!(lexicon.lookup("speaked").is_none());
}
