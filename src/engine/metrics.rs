//! Per-rule outcome counters.
//!
//! Collected unconditionally during matching (the counters are a handful of
//! integers) but only surfaced through the verbose checking entry point and
//! the CLI debug report.

use std::time::Duration;

/// What happened when one rule was evaluated against one sentence.
#[derive(Debug, Clone)]
pub struct RuleOutcome {
    pub rule_id: String,
    /// Wall-clock time spent matching this rule.
    pub duration: Duration,
    /// Nodes in the dependency tree (0 when the build failed).
    pub tree_nodes: usize,
    /// Candidate paths the query produced.
    pub paths: usize,
    /// Paths whose validation failed, i.e. candidates for correction.
    pub invalid_paths: usize,
    /// Corrections actually emitted after first-wins merging.
    pub corrections: usize,
    /// Swallowed rule-level error, when matching degraded to zero results.
    pub error: Option<String>,
}

impl RuleOutcome {
    pub(crate) fn new(rule_id: &str) -> Self {
        RuleOutcome {
            rule_id: rule_id.to_string(),
            duration: Duration::ZERO,
            tree_nodes: 0,
            paths: 0,
            invalid_paths: 0,
            corrections: 0,
            error: None,
        }
    }

    /// True when the rule ran to completion, matched or not.
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}
