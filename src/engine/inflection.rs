//! Morphological feature extraction from part-of-speech tag strings.
//!
//! A tag like `"noun:anim:v_naz:s:m"` packs several independent features
//! into one colon-delimited string. The extractor decomposes it in two
//! phases, driven by a small per-language pattern table:
//!
//! 1. Each named feature rule repeatedly matches its pattern against its own
//!    working copy of the tag, recording the named capture as
//!    `feature -> value` and stripping the captured text before rescanning.
//!    Features scan independently, so one feature's capture never hides
//!    another feature's component.
//! 2. Every tag component no rule captured becomes a boolean flag
//!    (`component -> true`).
//!
//! The result is an [`Inflection`]: named, independently comparable
//! attributes for one token, built once and read-only afterwards.

use std::collections::HashMap;

use regex::Regex;

use crate::expr::Value;
use crate::{AnalyzedToken, MatchError, TAG_SEPARATOR};

/// One named feature-capture rule. The pattern must contain a capture group
/// named after the feature, e.g. `case` => `(^|:)(?<case>v_naz|v_rod)($|:)`.
#[derive(Debug, Clone)]
pub struct FeatureRule {
    name: String,
    pattern: Regex,
}

impl FeatureRule {
    pub fn new(name: impl Into<String>, pattern: Regex) -> Self {
        FeatureRule { name: name.into(), pattern }
    }
}

/// The decomposed features of one token's tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inflection {
    values: HashMap<String, Value>,
}

impl Inflection {
    pub fn get(&self, feature: &str) -> Option<&Value> {
        self.values.get(feature)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn insert(&mut self, feature: impl Into<String>, value: Value) {
        self.values.insert(feature.into(), value);
    }
}

/// Extractor configured with an ordered per-language feature table.
#[derive(Debug, Clone)]
pub struct InflectionParser {
    rules: Vec<FeatureRule>,
}

impl InflectionParser {
    pub fn new(rules: Vec<FeatureRule>) -> Self {
        InflectionParser { rules }
    }

    /// Extract the inflection of `token`, failing with `MissingTag` when the
    /// token carries no part-of-speech tag.
    pub fn create(&self, token: &AnalyzedToken) -> Result<Inflection, MatchError> {
        let tag = token.pos_tag.as_deref().ok_or_else(|| MatchError::MissingTag(token.text.clone()))?;
        Ok(self.extract(tag))
    }

    /// Decompose `tag` into named features and residual boolean flags.
    pub fn extract(&self, tag: &str) -> Inflection {
        let mut inflection = Inflection::default();
        let mut captured: Vec<String> = Vec::new();

        for rule in &self.rules {
            let mut working = tag.to_string();
            while let Some(captures) = rule.pattern.captures(&working) {
                let Some(value) = captures.name(&rule.name) else { break };
                let value = value.as_str().to_string();
                if value.is_empty() {
                    break;
                }
                working = working.replace(&value, "");
                captured.push(value.clone());
                inflection.insert(rule.name.clone(), Value::Str(value));
            }
        }

        // Residual components: everything no rule captured. Captures are
        // anchored on separators, so they always cover whole components and
        // equality is the right test.
        for component in tag.split(TAG_SEPARATOR) {
            if !component.is_empty() && !captured.iter().any(|value| value == component) {
                inflection.insert(component, Value::Bool(true));
            }
        }

        inflection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnalyzedToken;

    fn parser() -> InflectionParser {
        InflectionParser::new(features![
            "case"   => r"(^|:)(?<case>v_naz|v_rod|v_dav|v_zna|v_oru|v_mis|v_kly)($|:)",
            "number" => r"(^|:)(?<number>[ps])($|:)",
        ])
    }

    #[test]
    fn extracts_named_features_and_residual_flags() {
        let inflection = parser().extract("noun:v_naz:s:m");

        assert_eq!(inflection.get("case"), Some(&Value::from("v_naz")));
        assert_eq!(inflection.get("number"), Some(&Value::from("s")));
        assert_eq!(inflection.get("noun"), Some(&Value::Bool(true)));
        assert_eq!(inflection.get("m"), Some(&Value::Bool(true)));
        assert_eq!(inflection.len(), 4);
    }

    #[test]
    fn component_count_is_preserved() {
        // N named features + M unmatched components in, N values + M flags out.
        let tag = "adj:v_zna:s:long";
        let inflection = parser().extract(tag);

        let named = ["case", "number"].iter().filter(|f| inflection.get(f).is_some()).count();
        let flags = inflection.iter().filter(|(_, v)| **v == Value::Bool(true)).count();
        assert_eq!(named + flags, tag.split(':').count());

        // Re-concatenating everything extracted recovers a permutation of
        // the original components.
        let mut extracted: Vec<String> = inflection
            .iter()
            .map(|(feature, value)| match value {
                Value::Str(s) => s.clone(),
                Value::Bool(_) => feature.to_string(),
            })
            .collect();
        let mut original: Vec<String> = tag.split(':').map(str::to_string).collect();
        extracted.sort();
        original.sort();
        assert_eq!(extracted, original);
    }

    #[test]
    fn single_char_features_are_claimed_at_component_boundaries_only() {
        // The "s" inside "subst" is not a number component: only the
        // standalone ":s" is captured, and "subst" survives as a flag.
        let inflection = parser().extract("verb:subst:s");
        assert_eq!(inflection.get("number"), Some(&Value::from("s")));
        assert_eq!(inflection.get("verb"), Some(&Value::Bool(true)));
        assert_eq!(inflection.get("subst"), Some(&Value::Bool(true)));
    }

    #[test]
    fn untagged_token_is_a_missing_tag_error() {
        let token = AnalyzedToken::new("кіт", None);
        assert!(matches!(parser().create(&token), Err(MatchError::MissingTag(t)) if t == "кіт"));
    }

    #[test]
    fn tag_with_only_flags_extracts_only_flags() {
        let inflection = parser().extract("punct");
        assert_eq!(inflection.len(), 1);
        assert_eq!(inflection.get("punct"), Some(&Value::Bool(true)));
    }
}
