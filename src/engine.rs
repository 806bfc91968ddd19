//! The agreement-matching engine.
//!
//! This module is the public entry point for the match pipeline. The engine
//! evaluates one rule against one analyzed sentence at a time:
//!
//! ```text
//! sentence tokens ──▶ DependencyTree::build            (tree.rs)
//!                          │
//! rule.query ──parse──▶ tree.query(labels)             (tree.rs)
//!                          │  candidate token paths
//!                          ▼
//!            seed {alias}_{feature} bindings            (inflection.rs)
//!                          │
//!            rule.validation ──eval──▶ verdict          (../expr)
//!                          │  invalid paths only
//!                          ▼
//!            rule.correction ──eval──▶ touched vars     (../expr)
//!                          │  group by alias
//!                          ▼
//!            fold update_pos_tag over features          (rewrite.rs)
//!                          │  rewritten tag
//!                          ▼
//!            synthesizer ──▶ suggested surface forms
//! ```
//!
//! ## Responsibilities by module
//!
//! - `tree.rs`: builds the rooted dependency tree from parser output and
//!   answers path queries (a chain of dependency labels anchored at any
//!   node).
//! - `inflection.rs`: decomposes a part-of-speech tag string into named
//!   morphological features plus boolean flags, driven by an ordered
//!   per-language pattern table.
//! - `rewrite.rs`: applies a single feature change to a tag string
//!   (append / remove / substitute a component).
//! - `matcher.rs`: the orchestrator; owns rule-level error isolation: any
//!   failure while matching one rule degrades to zero corrections for that
//!   rule and sentence, never aborting the surrounding check run.
//! - `metrics.rs`: per-rule outcome counters consumed by `check_verbose`
//!   and the CLI debug report.
//!
//! ## Concurrency
//!
//! Every structure here is built fresh per rule-per-sentence call and never
//! shared; callers may fan rule evaluations out across threads freely.
//!
//! ## Debugging
//!
//! Set `CONCORD_DEBUG_RULES=1` to print per-rule trace information (invalid
//! paths, rewritten tags, swallowed errors).

#[path = "engine/inflection.rs"]
mod inflection;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/rewrite.rs"]
mod rewrite;
#[path = "engine/tree.rs"]
mod tree;

pub use inflection::{FeatureRule, Inflection, InflectionParser};
pub(crate) use matcher::{Correction, Matcher, QueryPath};
pub use metrics::RuleOutcome;

/// Trace gate shared by the engine modules.
pub(crate) fn debug_enabled() -> bool {
    std::env::var_os("CONCORD_DEBUG_RULES").is_some()
}
