//! Integration tests for verb subcategorization

use lexigram_lexicon::{LexiconBuilder, LexiconConfig, VerbSubcatFrame, english_lexicon};

#[test]
fn listen_governs_to() {
    let lexicon = english_lexicon();
    assert_eq!(
        lexicon.verb_subcat("listen"),
        [VerbSubcatFrame::PrepositionalPhrase]
    );
    assert_eq!(lexicon.governed_preposition("listen"), Some("to"));
    assert_eq!(lexicon.governed_preposition("go"), Some("to"));
}

#[test]
fn unknown_verb_gets_default_frame() {
    let lexicon = english_lexicon();
    assert_eq!(lexicon.verb_subcat("xyzzy"), [VerbSubcatFrame::NounPhrase]);
    assert!(lexicon.subcat_entry("xyzzy").is_none());
    assert!(lexicon.governed_preposition("xyzzy").is_none());
}

#[test]
fn frames_keep_declaration_order() {
    let lexicon = english_lexicon();
    assert_eq!(
        lexicon.verb_subcat("give"),
        [
            VerbSubcatFrame::NounPhrase,
            VerbSubcatFrame::DoubleNounPhrase,
            VerbSubcatFrame::NounPhrasePrepositionalPhrase,
        ]
    );
    assert_eq!(
        lexicon.verb_subcat("feel"),
        [VerbSubcatFrame::NounPhrase, VerbSubcatFrame::AdjectivePhrase]
    );
}

#[test]
fn lemma_lookup_ignores_case() {
    let lexicon = english_lexicon();
    assert_eq!(lexicon.verb_subcat("Listen"), lexicon.verb_subcat("listen"));
}

#[test]
fn inflected_forms_are_not_lemmas() {
    let lexicon = english_lexicon();
    assert!(lexicon.subcat_entry("bought").is_none());
    assert!(lexicon.subcat_entry("buy").is_some());
}

#[test]
fn every_registered_verb_has_a_base_reading() {
    let lexicon = english_lexicon();
    for verb in lexicon.verbs() {
        let readings = lexicon.lookup(verb).unwrap();
        assert!(
            readings.iter().any(|e| !e.subcat.is_empty()),
            "{verb}"
        );
    }
}

#[test]
fn configured_default_frames() {
    let lexicon = LexiconBuilder::english()
        .unwrap()
        .config(LexiconConfig::default().with_default_frames(vec![VerbSubcatFrame::None]))
        .build();
    assert_eq!(lexicon.verb_subcat("xyzzy"), [VerbSubcatFrame::None]);
    assert_eq!(
        lexicon.verb_subcat("listen"),
        [VerbSubcatFrame::PrepositionalPhrase]
    );
}

#[test]
fn later_declaration_wins() {
    let lexicon = LexiconBuilder::english()
        .unwrap()
        .source("(table: overrides (listen :pos VB :subcat [NONE PP] :form BASE))")
        .unwrap()
        .build();
    assert_eq!(
        lexicon.verb_subcat("listen"),
        [VerbSubcatFrame::None, VerbSubcatFrame::PrepositionalPhrase]
    );
    assert!(lexicon.governed_preposition("listen").is_none());
}

#[test]
fn frame_codes() {
    assert_eq!("np_pp".parse::<VerbSubcatFrame>().unwrap(), VerbSubcatFrame::NounPhrasePrepositionalPhrase);
    assert!("NP_VP".parse::<VerbSubcatFrame>().is_err());
    assert_eq!(VerbSubcatFrame::DoubleNounPhrase.to_string(), "NP_NP");
}
