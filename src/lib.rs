extern crate self as concord;

use serde::{Deserialize, Serialize};

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod expr;
mod rules;
mod synth;

pub use api::{CheckDetails, CheckResult, Checker, RuleMatch, RuleOutcome};
pub use engine::{FeatureRule, Inflection, InflectionParser};
pub use error::{LoadError, MatchError};
pub use expr::{EvalContext, Value};
pub use rules::loader::{load_rules, load_rules_file};
pub use rules::uk;
pub use rules::{DependencyRule, ExampleSentence};
pub use synth::{DictionarySynthesizer, Synthesizer};

/// Separator between components of a part-of-speech tag (`noun:v_naz:s:m`).
pub(crate) const TAG_SEPARATOR: char = ':';

// --- Sentence model ----------------------------------------------------------

/// Handle to a token inside its owning [`Sentence`].
///
/// Tokens are referenced by index everywhere (tree nodes, inflection maps,
/// corrections) so that two tokens with identical text stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(pub usize);

/// Dependency-parse attachment for one token, as produced by the external
/// syntactic parser.
///
/// `index` and `parent_index` use whatever numbering the parser assigned;
/// they are opaque keys, not positions in the token vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyInfo {
    /// Grammatical relation linking this token to its parent (`"nsubj"`,
    /// `"amod"`, ...). The single root carries `"ROOT"`.
    pub dependency: String,
    pub index: i32,
    pub parent_index: i32,
}

/// One analyzed token: surface text plus the morphological tag and the
/// dependency attachment assigned by upstream analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedToken {
    /// Surface form as it appears in the sentence.
    #[serde(rename = "value")]
    pub text: String,
    /// Base form used for synthesizer lookups.
    #[serde(default)]
    pub lemma: Option<String>,
    /// Part-of-speech tag string, e.g. `"noun:anim:v_naz:s:m"`. Absent for
    /// punctuation and unknown words.
    #[serde(default)]
    pub pos_tag: Option<String>,
    /// Start byte offset in the sentence text.
    #[serde(default)]
    pub start: usize,
    /// End byte offset in the sentence text (exclusive).
    #[serde(default)]
    pub end: usize,
    #[serde(flatten)]
    pub dependency: Option<DependencyInfo>,
}

impl AnalyzedToken {
    /// Create a token with text and tag only; offsets default to `0..0` and
    /// can be filled in by [`Sentence::assign_offsets`].
    pub fn new(text: impl Into<String>, pos_tag: Option<&str>) -> Self {
        let text = text.into();
        AnalyzedToken {
            lemma: Some(text.clone()),
            text,
            pos_tag: pos_tag.map(str::to_string),
            start: 0,
            end: 0,
            dependency: None,
        }
    }

    pub fn with_dependency(mut self, dependency: &str, index: i32, parent_index: i32) -> Self {
        self.dependency = Some(DependencyInfo { dependency: dependency.to_string(), index, parent_index });
        self
    }

    pub fn with_lemma(mut self, lemma: &str) -> Self {
        self.lemma = Some(lemma.to_string());
        self
    }
}

/// A sentence: the token arena that owns every [`AnalyzedToken`].
///
/// All engine structures (the dependency tree, inflection maps, correction
/// lists) borrow the sentence and address tokens through [`TokenId`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sentence {
    #[serde(default)]
    pub text: String,
    pub tokens: Vec<AnalyzedToken>,
}

impl Sentence {
    pub fn new(tokens: Vec<AnalyzedToken>) -> Self {
        Sentence { text: String::new(), tokens }
    }

    pub fn token(&self, id: TokenId) -> &AnalyzedToken {
        &self.tokens[id.0]
    }

    /// Iterate `(TokenId, &AnalyzedToken)` pairs in sentence order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &AnalyzedToken)> {
        self.tokens.iter().enumerate().map(|(i, t)| (TokenId(i), t))
    }

    /// Attach dependency-parse results to the tokens of this sentence.
    ///
    /// The parse must cover every token: a count disagreement means the
    /// external parser saw a different tokenization, and applying it would
    /// misalign every index, so nothing is applied.
    pub fn attach_dependencies(&mut self, infos: Vec<DependencyInfo>) -> Result<(), MatchError> {
        if infos.len() != self.tokens.len() {
            return Err(MatchError::TokenCountMismatch { expected: self.tokens.len(), got: infos.len() });
        }
        for (token, info) in self.tokens.iter_mut().zip(infos) {
            token.dependency = Some(info);
        }
        Ok(())
    }

    /// Fill in `start`/`end` offsets by laying tokens out left to right with
    /// single spaces, and rebuild `text` to match. Convenient for sentences
    /// constructed in code rather than deserialized with real offsets.
    pub fn assign_offsets(&mut self) {
        let mut text = String::new();
        for token in &mut self.tokens {
            if !text.is_empty() {
                text.push(' ');
            }
            token.start = text.len();
            text.push_str(&token.text);
            token.end = text.len();
        }
        self.text = text;
    }
}
