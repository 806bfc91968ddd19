use std::time::{Duration, Instant};

use crate::engine::{Correction, Matcher};
use crate::rules::DependencyRule;
use crate::synth::Synthesizer;
use crate::{InflectionParser, Sentence};

pub use crate::engine::RuleOutcome;

/// A rule checker over analyzed sentences.
///
/// Holds the rule set, the language's inflection table, and the synthesizer
/// used to realize suggested word forms. Build one checker and reuse it; all
/// per-sentence state lives inside [`check`](Checker::check).
pub struct Checker {
    rules: Vec<DependencyRule>,
    inflections: InflectionParser,
    synthesizer: Box<dyn Synthesizer>,
}

/// One rule hit on a sentence.
///
/// `start`/`end` are byte offsets of the offending token in the sentence
/// text.
#[derive(Debug, Clone)]
pub struct RuleMatch {
    /// Identifier of the rule that fired.
    pub rule_id: String,
    /// The rule's user-facing message.
    pub message: String,
    /// Start byte index of the offending token.
    pub start: usize,
    /// End byte index of the offending token (exclusive).
    pub end: usize,
    /// Tag the correction assigned to the token.
    pub new_pos_tag: String,
    /// Replacement forms, in dictionary order. Empty when the synthesizer
    /// knows no form for the corrected tag.
    pub suggestions: Vec<String>,
}

/// Result from [`Checker::check`].
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// The checked sentence text.
    pub text: String,
    /// Rule hits, ordered by position in the sentence.
    pub matches: Vec<RuleMatch>,
    /// Total elapsed time spent matching.
    pub elapsed: Duration,
}

/// Result from [`Checker::check_verbose`]: the matches plus per-rule
/// outcome counters for debugging and profiling.
#[derive(Debug, Clone)]
pub struct CheckDetails {
    pub text: String,
    pub matches: Vec<RuleMatch>,
    pub elapsed: Duration,
    /// One outcome per rule, in rule-set order.
    pub outcomes: Vec<RuleOutcome>,
}

impl Checker {
    pub fn new(rules: Vec<DependencyRule>, inflections: InflectionParser, synthesizer: Box<dyn Synthesizer>) -> Self {
        Checker { rules, inflections, synthesizer }
    }

    /// A checker with the built-in Ukrainian rules and inflection table.
    pub fn ukrainian(synthesizer: Box<dyn Synthesizer>) -> Self {
        Checker::new(crate::rules::uk::rules(), crate::rules::uk::inflections().clone(), synthesizer)
    }

    pub fn rules(&self) -> &[DependencyRule] {
        &self.rules
    }

    /// Run every rule against `sentence` and collect the matches.
    ///
    /// A rule that errors out contributes no matches; the rest of the rule
    /// set still runs.
    pub fn check(&self, sentence: &Sentence) -> CheckResult {
        let details = self.check_verbose(sentence);
        CheckResult { text: details.text, matches: details.matches, elapsed: details.elapsed }
    }

    /// Like [`check`](Checker::check), but also returns the per-rule
    /// outcome counters.
    pub fn check_verbose(&self, sentence: &Sentence) -> CheckDetails {
        let started = Instant::now();
        let matcher = Matcher::new(&self.inflections, self.synthesizer.as_ref());

        let mut matches = Vec::new();
        let mut outcomes = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let (corrections, outcome) = matcher.match_rule(rule, sentence);
            matches.extend(corrections.into_iter().map(|c| to_match(rule, sentence, c)));
            outcomes.push(outcome);
        }
        matches.sort_by_key(|m| (m.start, m.end));

        CheckDetails {
            text: sentence.text.clone(),
            matches,
            elapsed: started.elapsed(),
            outcomes,
        }
    }
}

fn to_match(rule: &DependencyRule, sentence: &Sentence, correction: Correction) -> RuleMatch {
    let token = sentence.token(correction.token);
    RuleMatch {
        rule_id: rule.id.clone(),
        message: rule.message.clone(),
        start: token.start,
        end: token.end,
        new_pos_tag: correction.new_pos_tag,
        suggestions: correction.suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::DictionarySynthesizer;
    use crate::AnalyzedToken;

    fn dictionary() -> DictionarySynthesizer {
        DictionarySynthesizer::new()
            .add_form("зелений", "adj:v_naz:s:f", "зелена")
            .add_form("зелений", "adj:v_zna:s:f", "зелену")
    }

    fn disagreeing_sentence() -> Sentence {
        let mut sentence = Sentence::new(vec![
            AnalyzedToken::new("зелену", Some("adj:v_zna:s:f"))
                .with_dependency("amod", 0, 1)
                .with_lemma("зелений"),
            AnalyzedToken::new("трава", Some("noun:inanim:v_naz:s:f")).with_dependency("nsubj", 1, 2),
            AnalyzedToken::new("росте", Some("verb:imperf:pres:s:3")).with_dependency("ROOT", 2, 2),
        ]);
        sentence.assign_offsets();
        sentence
    }

    #[test]
    fn check_reports_match_with_offsets_and_suggestions() {
        let checker = Checker::ukrainian(Box::new(dictionary()));
        let result = checker.check(&disagreeing_sentence());

        assert_eq!(result.text, "зелену трава росте");
        assert_eq!(result.matches.len(), 1);

        let hit = &result.matches[0];
        assert_eq!(hit.rule_id, "uk_adj_noun_agreement");
        assert_eq!(hit.start, 0);
        assert_eq!(hit.end, "зелену".len());
        assert_eq!(hit.new_pos_tag, "adj:v_naz:s:f");
        assert_eq!(hit.suggestions, vec!["зелена"]);
        assert!(!hit.message.is_empty());
    }

    #[test]
    fn check_is_silent_on_agreeing_sentences() {
        let mut sentence = Sentence::new(vec![
            AnalyzedToken::new("зелена", Some("adj:v_naz:s:f"))
                .with_dependency("amod", 0, 1)
                .with_lemma("зелений"),
            AnalyzedToken::new("трава", Some("noun:inanim:v_naz:s:f")).with_dependency("nsubj", 1, 2),
            AnalyzedToken::new("росте", Some("verb:imperf:pres:s:3")).with_dependency("ROOT", 2, 2),
        ]);
        sentence.assign_offsets();

        let checker = Checker::ukrainian(Box::new(dictionary()));
        let result = checker.check(&sentence);
        assert!(result.matches.is_empty());
    }

    #[test]
    fn check_verbose_returns_one_outcome_per_rule() {
        let checker = Checker::ukrainian(Box::new(dictionary()));
        let details = checker.check_verbose(&disagreeing_sentence());

        assert_eq!(details.outcomes.len(), checker.rules().len());
        assert!(details.outcomes.iter().all(|o| o.succeeded()));
        let fired = details.outcomes.iter().find(|o| o.rule_id == "uk_adj_noun_agreement").unwrap();
        assert_eq!(fired.corrections, 1);
    }

    #[test]
    fn broken_rule_does_not_poison_the_run() {
        let mut rules = crate::rules::uk::rules();
        rules.insert(0, DependencyRule::new("broken", "noun->amod", "true", ""));

        let checker = Checker::new(rules, crate::rules::uk::inflections().clone(), Box::new(dictionary()));
        let details = checker.check_verbose(&disagreeing_sentence());

        assert!(!details.outcomes[0].succeeded());
        assert_eq!(details.matches.len(), 1);
        assert_eq!(details.matches[0].rule_id, "uk_adj_noun_agreement");
    }
}
