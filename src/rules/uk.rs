//! Ukrainian language pack: the feature-pattern table for tag decomposition
//! and the built-in agreement rules.
//!
//! Tags follow the Ukrainian morphological dictionary conventions, e.g.
//! `noun:anim:v_naz:s:m` or `verb:imperf:pres:s:3`.

use once_cell::sync::Lazy;

use crate::engine::InflectionParser;
use crate::rules::{DependencyRule, ExampleSentence};

static INFLECTIONS: Lazy<InflectionParser> = Lazy::new(|| {
    InflectionParser::new(features![
        "pos"     => r"(^|:)(?<pos>noun|verb|adj|adjp|adv|advp|prep|conj|part|intj|numr|noninfl|onomat)($|:)",
        "case"    => r"(^|:)(?<case>v_naz|v_rod|v_dav|v_zna|v_oru|v_mis|v_kly|nv|ns)($|:)",
        "number"  => r"(^|:)(?<number>[ps])($|:)",
        "gender"  => r"(^|:)(?<gender>[mfn])($|:)",
        "animacy" => r"(^|:)(?<animacy>anim|inanim|unanim)($|:)",
        "tense"   => r"(^|:)(?<tense>futr|past|pres)($|:)",
        "person"  => r"(^|:)(?<person>impers|1|2|3)($|:)",
        "type"    => r"(^|:)(?<type>pers|refl|pos|dem|def|int|rel|neg|ind|gen|emph|subord|coord)($|:)",
    ])
});

static RULES: Lazy<Vec<DependencyRule>> = Lazy::new(|| {
    vec![
        DependencyRule::new(
            "uk_adj_noun_agreement",
            "noun->[amod]->adj",
            "noun_case == adj_case && noun_gender == adj_gender && noun_number == adj_number",
            "adj_case = noun_case; adj_gender = noun_gender; adj_number = noun_number",
        )
        .with_name("Adjective/noun agreement")
        .with_message("Прикметник не узгоджено з іменником")
        .with_examples(vec![
            correct("зелена трава росте"),
            incorrect("зелену трава росте", "зелена"),
        ]),
        DependencyRule::new(
            "uk_subject_verb_number",
            "verb->[nsubj]->noun",
            "verb_number == noun_number",
            "verb_number = noun_number",
        )
        .with_name("Subject/verb number agreement")
        .with_message("Присудок не узгоджено з підметом у числі")
        .with_examples(vec![
            correct("кіт біжить"),
            incorrect("коти біжить", "біжать"),
        ]),
        DependencyRule::new(
            "uk_det_noun_agreement",
            "noun->[det]->det",
            "noun_case == det_case && noun_gender == det_gender && noun_number == det_number",
            "det_case = noun_case; det_gender = noun_gender; det_number = noun_number",
        )
        .with_name("Determiner/noun agreement")
        .with_message("Займенник не узгоджено з іменником"),
    ]
});

/// The inflection extractor configured for Ukrainian tags.
pub fn inflections() -> &'static InflectionParser {
    &INFLECTIONS
}

/// The built-in Ukrainian agreement rules.
pub fn rules() -> Vec<DependencyRule> {
    RULES.clone()
}

fn correct(text: &str) -> ExampleSentence {
    ExampleSentence::Correct { text: text.to_string() }
}

fn incorrect(text: &str, suggestion: &str) -> ExampleSentence {
    ExampleSentence::Incorrect { text: text.to_string(), suggestion: Some(suggestion.to_string()) }
}
