//! Surface-form synthesis.
//!
//! After a correction rewrites a token's tag, something must turn the
//! `(lemma, tag)` pair back into words. That step is dictionary territory,
//! not engine territory, so it sits behind a trait.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{AnalyzedToken, LoadError};

/// Produces the surface forms of a token's lemma under a target tag.
///
/// Implementations return every known form, in dictionary order; an unknown
/// lemma or tag yields an empty list, never an error.
pub trait Synthesizer {
    fn synthesize(&self, token: &AnalyzedToken, pos_tag: &str) -> Vec<String>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DictionaryForm {
    tag: String,
    form: String,
}

/// Lemma-keyed form table, loadable from a JSON dictionary file.
///
/// The file maps each lemma to its inflected forms:
///
/// ```json
/// { "зелений": [ {"tag": "adj:v_naz:s:f", "form": "зелена"} ] }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DictionarySynthesizer {
    entries: HashMap<String, Vec<DictionaryForm>>,
}

impl DictionarySynthesizer {
    pub fn new() -> Self {
        DictionarySynthesizer::default()
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, LoadError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Register one `(lemma, tag) -> form` entry. Used by tests and by
    /// callers assembling a dictionary in code.
    pub fn add_form(mut self, lemma: &str, tag: &str, form: &str) -> Self {
        self.entries
            .entry(lemma.to_string())
            .or_default()
            .push(DictionaryForm { tag: tag.to_string(), form: form.to_string() });
        self
    }
}

impl Synthesizer for DictionarySynthesizer {
    fn synthesize(&self, token: &AnalyzedToken, pos_tag: &str) -> Vec<String> {
        let lemma = token.lemma.as_deref().unwrap_or(&token.text);
        let Some(forms) = self.entries.get(lemma) else {
            return Vec::new();
        };
        forms
            .iter()
            .filter(|entry| entry.tag == pos_tag)
            .map(|entry| entry.form.clone())
            .collect()
    }
}
