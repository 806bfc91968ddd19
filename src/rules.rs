//! Rule definitions.
//!
//! A dependency rule is pure data: a path query over the dependency tree
//! plus two expressions in the small rule language (see [`crate::expr`]).
//! Rules are either built in (see [`uk`]) or loaded from JSON rule files
//! (see [`loader`]).

use serde::{Deserialize, Serialize};

pub mod loader;
pub mod uk;

/// One agreement rule over dependency-parse paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyRule {
    /// Stable identifier, unique within a rule set.
    pub id: String,
    /// Human-readable rule name.
    pub name: String,
    /// Message shown for each match.
    pub message: String,
    /// Path query, e.g. `"noun->[amod]->adj"`: aliases joined by bracketed
    /// dependency labels. The first alias names the path's anchor token.
    pub query: String,
    /// Validation expression. A truthy result means the path agrees and the
    /// rule does not fire for it.
    pub validation: String,
    /// Correction expression, evaluated only for invalid paths. Assignments
    /// to `{alias}_{feature}` variables describe the intended tag changes.
    pub correction: String,
    /// Documentation sentences used by the rule-set self-test.
    #[serde(default)]
    pub examples: Vec<ExampleSentence>,
}

impl DependencyRule {
    pub fn new(
        id: impl Into<String>,
        query: impl Into<String>,
        validation: impl Into<String>,
        correction: impl Into<String>,
    ) -> Self {
        let id = id.into();
        DependencyRule {
            name: id.clone(),
            message: String::new(),
            id,
            query: query.into(),
            validation: validation.into(),
            correction: correction.into(),
            examples: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_examples(mut self, examples: Vec<ExampleSentence>) -> Self {
        self.examples = examples;
        self
    }
}

/// A documentation sentence attached to a rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExampleSentence {
    /// The rule must not fire on this text.
    Correct { text: String },
    /// The rule must fire, optionally with an expected suggestion.
    Incorrect {
        text: String,
        #[serde(default)]
        suggestion: Option<String>,
    },
    /// Known false positive: the rule currently fires here although the
    /// text is fine. Kept in the rule file until the rule is tightened.
    TriggersError { text: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_name_to_id() {
        let rule = DependencyRule::new("uk_adj_noun_case", "noun->[amod]->adj", "true", "");
        assert_eq!(rule.name, "uk_adj_noun_case");
        assert!(rule.examples.is_empty());
    }

    #[test]
    fn example_sentences_deserialize_by_kind() {
        let json = r#"[
            {"kind": "correct", "text": "зелена трава росте"},
            {"kind": "incorrect", "text": "зелену трава росте", "suggestion": "зелена"},
            {"kind": "triggers_error", "text": "сіно коси"}
        ]"#;
        let examples: Vec<ExampleSentence> = serde_json::from_str(json).unwrap();
        assert!(matches!(&examples[0], ExampleSentence::Correct { .. }));
        assert!(matches!(
            &examples[1],
            ExampleSentence::Incorrect { suggestion: Some(s), .. } if s == "зелена"
        ));
        assert!(matches!(&examples[2], ExampleSentence::TriggersError { .. }));
    }
}
