//! Rule-against-sentence matching.
//!
//! The matcher wires the other engine pieces together for one rule and one
//! sentence: build the tree, run the path query, seed an evaluation context
//! per candidate path, validate, correct, rewrite tags, synthesize forms.
//!
//! Matching one rule is hermetic. Any error (malformed query, unparsable
//! expression, broken parse data) degrades that rule to zero corrections for
//! this sentence and is reported through the rule's outcome, never
//! propagated to the caller.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::time::Instant;

use super::debug_enabled;
use super::inflection::{Inflection, InflectionParser};
use super::metrics::RuleOutcome;
use super::rewrite::update_pos_tag;
use super::tree::DependencyTree;
use crate::expr::{EvalContext, Program};
use crate::rules::DependencyRule;
use crate::synth::Synthesizer;
use crate::{MatchError, Sentence, TokenId};

/// A parsed path query: `"noun->[amod]->adj"` becomes aliases
/// `["noun", "adj"]` and labels `["amod"]`.
///
/// Aliases name path positions inside rule expressions, so they must not
/// contain `_` (the alias/feature separator in variable names).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QueryPath {
    aliases: Vec<String>,
    labels: Vec<String>,
}

impl QueryPath {
    pub fn parse(query: &str) -> Result<QueryPath, MatchError> {
        let malformed = |reason: &str| MatchError::MalformedQuery {
            query: query.to_string(),
            reason: reason.to_string(),
        };

        let mut aliases = Vec::new();
        let mut labels = Vec::new();
        for (position, segment) in query.split("->").enumerate() {
            let segment = segment.trim();
            let is_label = position % 2 == 1;
            if is_label {
                let label = segment
                    .strip_prefix('[')
                    .and_then(|s| s.strip_suffix(']'))
                    .ok_or_else(|| malformed("expected a [label] segment"))?
                    .trim();
                if label.is_empty() {
                    return Err(malformed("empty dependency label"));
                }
                labels.push(label.to_string());
            } else {
                if segment.is_empty() || segment.starts_with('[') {
                    return Err(malformed("expected an alias segment"));
                }
                if segment.contains('_') {
                    return Err(malformed("aliases must not contain '_'"));
                }
                aliases.push(segment.to_string());
            }
        }

        if aliases.len() != labels.len() + 1 {
            return Err(malformed("query must end with an alias"));
        }
        Ok(QueryPath { aliases, labels })
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// One tag rewrite for one token, with the synthesized surface forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Correction {
    pub token: TokenId,
    pub new_pos_tag: String,
    pub suggestions: Vec<String>,
}

pub(crate) struct Matcher<'a> {
    inflections: &'a InflectionParser,
    synthesizer: &'a dyn Synthesizer,
}

impl<'a> Matcher<'a> {
    pub fn new(inflections: &'a InflectionParser, synthesizer: &'a dyn Synthesizer) -> Self {
        Matcher { inflections, synthesizer }
    }

    /// Evaluate `rule` against `sentence`.
    ///
    /// Never fails: errors are absorbed into the outcome and yield an empty
    /// correction list.
    pub fn match_rule(&self, rule: &DependencyRule, sentence: &Sentence) -> (Vec<Correction>, RuleOutcome) {
        let started = Instant::now();
        let mut outcome = RuleOutcome::new(&rule.id);

        let corrections = match self.match_rule_checked(rule, sentence, &mut outcome) {
            Ok(corrections) => corrections,
            Err(err) => {
                if debug_enabled() {
                    eprintln!("[concord] rule {}: swallowed error: {err}", rule.id);
                }
                outcome.error = Some(err.to_string());
                Vec::new()
            }
        };

        outcome.corrections = corrections.len();
        outcome.duration = started.elapsed();
        (corrections, outcome)
    }

    fn match_rule_checked(
        &self,
        rule: &DependencyRule,
        sentence: &Sentence,
        outcome: &mut RuleOutcome,
    ) -> Result<Vec<Correction>, MatchError> {
        let tree = DependencyTree::build(sentence)?;
        outcome.tree_nodes = tree.node_count();

        let query = QueryPath::parse(&rule.query)?;
        let validation = Program::parse(&rule.validation)?;
        let correction = Program::parse(&rule.correction)?;

        // One inflection per tagged token, shared across every path the
        // token appears in. Untagged tokens simply contribute no bindings.
        let mut inflections: HashMap<TokenId, Inflection> = HashMap::new();
        for (id, token) in sentence.iter() {
            if let Some(tag) = token.pos_tag.as_deref() {
                inflections.insert(id, self.inflections.extract(tag));
            }
        }

        let paths = tree.query(query.labels());
        outcome.paths = paths.len();

        let mut corrections = Vec::new();
        let mut corrected: HashSet<TokenId> = HashSet::new();

        for path in &paths {
            let mut ctx = seed_context(&query, path, &inflections);
            if validation.eval(&mut ctx).is_truthy() {
                continue;
            }
            outcome.invalid_paths += 1;
            if debug_enabled() {
                let words: Vec<&str> = path.iter().map(|&id| sentence.token(id).text.as_str()).collect();
                eprintln!("[concord] rule {}: invalid path {words:?}", rule.id);
            }

            // The validation pass may have assigned scratch variables; the
            // correction runs in a fresh context so only its own writes
            // count as touched.
            let mut ctx = seed_context(&query, path, &inflections);
            correction.eval(&mut ctx);

            for (alias, features) in group_touched(&ctx) {
                let Some(position) = query.aliases().iter().position(|a| a == alias) else {
                    // Assignment to a variable that names no path alias:
                    // scratch state, not a correction.
                    continue;
                };
                let token = path[position];
                if !corrected.insert(token) {
                    continue;
                }
                let Some(current_tag) = sentence.token(token).pos_tag.as_deref() else {
                    continue;
                };

                let inflection = &inflections[&token];
                let new_tag = features.iter().fold(current_tag.to_string(), |tag, feature| {
                    update_pos_tag(
                        &tag,
                        feature,
                        inflection.get(feature),
                        ctx.lookup(&format!("{alias}_{feature}")),
                    )
                });
                if new_tag == current_tag {
                    continue;
                }
                if debug_enabled() {
                    eprintln!(
                        "[concord] rule {}: {} rewritten {current_tag} -> {new_tag}",
                        rule.id,
                        sentence.token(token).text
                    );
                }

                let suggestions = self.synthesizer.synthesize(sentence.token(token), &new_tag);
                corrections.push(Correction { token, new_pos_tag: new_tag, suggestions });
            }
        }

        Ok(corrections)
    }
}

/// Seed `{alias}_{feature}` bindings for every tagged token on the path.
fn seed_context(query: &QueryPath, path: &[TokenId], inflections: &HashMap<TokenId, Inflection>) -> EvalContext {
    let mut ctx = EvalContext::new();
    for (alias, token) in query.aliases().iter().zip(path) {
        if let Some(inflection) = inflections.get(token) {
            for (feature, value) in inflection.iter() {
                ctx.set_untracked(format!("{alias}_{feature}"), value.clone());
            }
        }
    }
    ctx
}

/// Group the touched variable names by alias, features sorted for a
/// deterministic rewrite order. Names without an `_` are scratch state.
fn group_touched(ctx: &EvalContext) -> BTreeMap<&str, Vec<&str>> {
    let mut grouped: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for name in ctx.touched() {
        if let Some((alias, feature)) = name.split_once('_') {
            if !feature.is_empty() {
                grouped.entry(alias).or_default().push(feature);
            }
        }
    }
    for features in grouped.values_mut() {
        features.sort_unstable();
    }
    grouped
}
