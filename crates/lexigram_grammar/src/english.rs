//! The English grammar in Chomsky Normal Form.
//!
//! Covers declarative sentences, imperatives (including negated ones with
//! `do not`), yes/no questions, and wh-questions. Longer constructions are
//! binarized through intermediate categories such as `S_CORE`, `V_NP`,
//! `SUPNBAR`, and `S_YN_CORE`.
//!
//! Rule payloads carry agreement features:
//! - `number`: `SG` / `PL`
//! - `person`: `1` / `2` / `3`
//! - `tense`: `PRES` / `PAST` / `FUT`, plus `form BASE` on base verb phrases

use lexigram_foundation::{FeatureValue, Pos};

use crate::grammar::{Grammar, GrammarBuilder};
use crate::rule::{Constraint, Rule};

/// Tags that get an identity pre-terminal rule `TAG → TAG`.
pub const PRETERMINALS: [Pos; 26] = [
    Pos::DT,
    Pos::PRP,
    Pos::PRPS,
    Pos::NN,
    Pos::NNS,
    Pos::NNP,
    Pos::NNPS,
    Pos::VB,
    Pos::VBD,
    Pos::VBG,
    Pos::VBN,
    Pos::VBP,
    Pos::VBZ,
    Pos::MD,
    Pos::JJ,
    Pos::JJR,
    Pos::JJS,
    Pos::RB,
    Pos::RBR,
    Pos::RBS,
    Pos::IN,
    Pos::TO,
    Pos::CC,
    Pos::WRB,
    Pos::WP,
    Pos::WDT,
];

/// Builds the English grammar.
#[must_use]
pub fn build() -> Grammar {
    let mut builder = Grammar::builder();
    add_sentence_rules(&mut builder);
    add_noun_phrase_rules(&mut builder);
    add_verb_phrase_rules(&mut builder);
    add_prepositional_phrase_rules(&mut builder);
    add_adjective_phrase_rules(&mut builder);
    add_adverb_phrase_rules(&mut builder);
    add_question_rules(&mut builder);
    add_preterminal_rules(&mut builder);
    builder.build()
}

fn declarative(rule: Rule) -> Rule {
    rule.with_feature("type", "DECL")
}

fn agreeing(rule: Rule) -> Rule {
    rule.with_constraint("number", Constraint::Agree)
        .with_constraint("person", Constraint::Agree)
}

fn present_3sg(rule: Rule) -> Rule {
    rule.with_feature("tense", "PRES")
        .with_feature("person", 3i64)
        .with_feature("number", "SG")
}

fn present_non_3sg(rule: Rule) -> Rule {
    rule.with_feature("tense", "PRES")
        .with_feature("person", FeatureValue::one_of([1i64, 2]))
        .with_feature("number", FeatureValue::Unconstrained)
}

fn past(rule: Rule) -> Rule {
    rule.with_feature("tense", "PAST")
}

fn base_form(rule: Rule) -> Rule {
    rule.with_feature("form", "BASE")
}

fn imperative(rule: Rule) -> Rule {
    base_form(rule).with_feature("person", 2i64)
}

// =============================================================================
// Sentences
// =============================================================================

fn add_sentence_rules(b: &mut GrammarBuilder) {
    // I bought a present
    b.rule(agreeing(declarative(Rule::binary("S", "NP", "VP"))));
    // I bought a present yesterday
    b.rule(declarative(Rule::binary("S", "S_CORE", "ADVP")));
    b.rule(declarative(Rule::binary("S", "ADVP", "S_CORE")));
    b.rule(agreeing(Rule::binary("S_CORE", "NP", "VP")));

    // Listen to music
    b.rule(
        Rule::unary("S", "IMP")
            .with_feature("type", "IMP")
            .with_feature("person", 2i64),
    );
    b.unary("IMP", "VP_IMP");
    b.binary("IMP", "RB", "VP_IMP");

    // Do not listen
    b.rule(Rule::binary("S", "MD", "IMP_NEG").with_feature("type", "IMP_NEG"));
    b.binary("IMP_NEG", "RB", "VP_BASE");
}

// =============================================================================
// Noun phrases
// =============================================================================

fn add_noun_phrase_rules(b: &mut GrammarBuilder) {
    b.unary("NP", "PRP")
        .unary("NP", "NNP")
        // Bare nouns and bare plurals
        .unary("NP", "NBAR")
        .unary("NP", "ADJP_N");

    b.rule(Rule::binary("NP", "DT", "NBAR").with_constraint("number", Constraint::Agree));
    b.rule(Rule::binary("NP", "DT", "ADJP_N").with_constraint("number", Constraint::Agree));
    b.binary("NP", "PRP$", "NBAR")
        .binary("NP", "PRP$", "ADJP_N")
        .binary("NP", "NP", "PP");

    b.rule(Rule::unary("NBAR", "NN").with_feature("number", "SG"));
    b.rule(Rule::unary("NBAR", "NNS").with_feature("number", "PL"));
    // school bus
    b.rule(Rule::binary("NBAR", "NN", "NN").with_feature("number", "SG"));
    b.binary("NBAR", "NBAR", "NN");
    // culture and history
    b.rule(Rule::binary("NBAR", "NBAR", "CONJ_NBAR").with_feature("number", "PL"));
    b.binary("CONJ_NBAR", "CC", "NBAR");

    b.binary("ADJP_N", "JJ", "NBAR")
        .binary("ADJP_N", "JJ", "ADJP_N")
        .binary("ADJP_N", "ADJP", "NBAR")
        .binary("ADJP_N", "JJS", "NBAR")
        .binary("ADJP_N", "ADVJJ", "NBAR")
        .binary("ADVJJ", "RB", "JJ");

    // the most beautiful fruit
    b.binary("SUPNBAR", "JJS", "NBAR")
        .binary("NP", "DT", "SUPNBAR")
        .binary("RBJJS", "RB", "JJ")
        .binary("ADJP_N", "RBJJS", "NBAR");
}

// =============================================================================
// Verb phrases
// =============================================================================

fn add_verb_phrase_rules(b: &mut GrammarBuilder) {
    // Intransitive, transitive, and with a prepositional complement.
    for complement in [None, Some("NP"), Some("PP")] {
        let verb_rule = |tag: &str| match complement {
            None => Rule::unary("VP", tag),
            Some(c) => Rule::binary("VP", tag, c),
        };
        b.rule(present_3sg(verb_rule("VBZ")));
        b.rule(present_non_3sg(verb_rule("VBP")));
        b.rule(past(verb_rule("VBD")));
    }

    // bought a present for my friend
    b.rule(Rule::binary("VP", "V_NP", "PP").with_feature("tense", "inherit"));
    b.rule(present_3sg(Rule::binary("V_NP", "VBZ", "NP")));
    b.rule(present_non_3sg(Rule::binary("V_NP", "VBP", "NP")));
    b.rule(past(Rule::binary("V_NP", "VBD", "NP")));

    b.binary("VP", "VP", "ADVP")
        .binary("VP", "ADVP", "VP")
        .binary("VP", "VP", "PP");

    // will attend
    b.rule(Rule::binary("VP", "MD", "VP_BASE").with_feature("tense", "FUT"));
    b.rule(base_form(Rule::unary("VP_BASE", "VB")));
    b.rule(base_form(Rule::binary("VP_BASE", "VB", "NP")));
    b.rule(base_form(Rule::binary("VP_BASE", "VB", "PP")));
    b.binary("VP_BASE", "V_NP_BASE", "PP")
        .binary("V_NP_BASE", "VB", "NP")
        .binary("VP_BASE", "VP_BASE", "ADVP")
        .binary("VP_BASE", "ADVP", "VP_BASE");

    // Copula: is beautiful, was quite far
    b.rule(present_3sg(Rule::binary("VP", "VBZ", "ADJP")));
    b.rule(Rule::binary("VP", "VBP", "ADJP").with_feature("tense", "PRES"));
    b.rule(past(Rule::binary("VP", "VBD", "ADJP")));
    b.binary("RB_ADJP", "RB", "ADJP")
        .binary("VP", "VBD", "RB_ADJP")
        .binary("VP", "VBZ", "RB_ADJP")
        .binary("VP", "VBP", "RB_ADJP");

    b.rule(imperative(Rule::unary("VP_IMP", "VB")));
    b.rule(imperative(Rule::binary("VP_IMP", "VB", "NP")));
    b.rule(imperative(Rule::binary("VP_IMP", "VB", "PP")));
    b.rule(imperative(Rule::binary("VP_IMP", "V_NP_BASE", "PP")));
}

// =============================================================================
// Prepositional, adjective, and adverb phrases
// =============================================================================

fn add_prepositional_phrase_rules(b: &mut GrammarBuilder) {
    b.binary("PP", "IN", "NP").binary("PP", "TO", "NP");
}

fn add_adjective_phrase_rules(b: &mut GrammarBuilder) {
    b.unary("ADJP", "JJ")
        .binary("ADJP", "RB", "JJ")
        .unary("ADJP", "JJR")
        .unary("ADJP", "JJS")
        .binary("ADJP", "RB", "JJS")
        // far from the village
        .binary("ADJP", "ADJP", "PP");
}

fn add_adverb_phrase_rules(b: &mut GrammarBuilder) {
    b.unary("ADVP", "RB").binary("ADVP", "RB", "RB");
}

// =============================================================================
// Questions
// =============================================================================

fn add_question_rules(b: &mut GrammarBuilder) {
    // Will you attend the meeting?
    b.rule(Rule::binary("S", "MD", "S_YN").with_feature("type", "YN_Q"));
    b.binary("S_YN", "NP", "VP_BASE")
        .binary("S_YN", "S_YN_CORE", "ADVP")
        .binary("S_YN_CORE", "NP", "VP_BASE");

    // When did you come here?
    b.rule(Rule::binary("S", "WRB", "S_WH").with_feature("type", "WH_Q"));
    b.binary("S_WH", "MD", "S_YN")
        .binary("S_WH", "S_WH_CORE", "ADVP")
        .binary("S_WH_CORE", "MD", "S_YN");
}

fn add_preterminal_rules(b: &mut GrammarBuilder) {
    for pos in PRETERMINALS {
        b.unary(pos.as_str(), pos.as_str());
    }
}
