//! Error taxonomy.
//!
//! Match-time errors (`MatchError`) are absorbed at the rule boundary: a rule
//! that fails on a sentence simply produces no matches for it, and the other
//! rules keep running. The one exception is `TokenCountMismatch`, which is
//! raised while attaching parser output to a sentence, before any rule runs,
//! and is surfaced to the caller so a misaligned parse is never applied.

use thiserror::Error;

use crate::expr::ExprError;

#[derive(Debug, Error)]
pub enum MatchError {
    /// The dependency parse contains no `ROOT`-labeled token.
    #[error("no ROOT node found in dependency parse")]
    NoRootFound,

    /// The dependency parse contains more than one `ROOT`-labeled token.
    /// Declared fatal rather than silently picking one, for determinism.
    #[error("found {0} ROOT nodes in dependency parse, expected exactly one")]
    MultipleRoots(usize),

    /// A node's `parentIndex` points at no surviving node. Malformed parser
    /// output; the tree is not built.
    #[error("token at parser index {index} references missing parent {parent_index}")]
    MissingParent { index: i32, parent_index: i32 },

    /// A token reached feature extraction without a part-of-speech tag.
    #[error("token \"{0}\" has no part-of-speech tag")]
    MissingTag(String),

    /// The external parser returned a different token count than the
    /// sentence holds; applying it would misalign every index.
    #[error("dependency parser returned {got} tokens for a sentence of {expected}")]
    TokenCountMismatch { expected: usize, got: usize },

    /// A rule query does not alternate aliases and `[label]` segments.
    #[error("malformed query {query:?}: {reason}")]
    MalformedQuery { query: String, reason: String },

    #[error(transparent)]
    Expr(#[from] ExprError),
}

/// Errors while loading rule or dictionary files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
