//! JSON rule-file loading.
//!
//! A rule file groups rules under named categories:
//!
//! ```json
//! {
//!   "categories": [
//!     {
//!       "name": "Agreement",
//!       "rules": [
//!         {
//!           "id": "uk_adj_noun_case",
//!           "name": "Adjective/noun case agreement",
//!           "message": "Прикметник не узгоджено з іменником",
//!           "query": "noun->[amod]->adj",
//!           "validation": "noun_case == adj_case",
//!           "correction": "adj_case = noun_case"
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Categories are a file-organization device; loading flattens them into one
//! rule list in file order.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::LoadError;
use crate::rules::DependencyRule;

#[derive(Debug, Deserialize)]
struct RuleFile {
    #[serde(default)]
    categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct Category {
    #[allow(dead_code)]
    name: String,
    #[serde(default)]
    rules: Vec<DependencyRule>,
}

/// Load rules from a JSON rule file.
pub fn load_rules(reader: impl Read) -> Result<Vec<DependencyRule>, LoadError> {
    let file: RuleFile = serde_json::from_reader(reader)?;
    Ok(file.categories.into_iter().flat_map(|category| category.rules).collect())
}

/// Load rules from a JSON rule file on disk.
pub fn load_rules_file(path: impl AsRef<Path>) -> Result<Vec<DependencyRule>, LoadError> {
    load_rules(BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_and_flattens_categories() {
        let json = r#"{
            "categories": [
                {
                    "name": "Agreement",
                    "rules": [
                        {
                            "id": "uk_adj_noun_case",
                            "name": "Adjective/noun case agreement",
                            "message": "Прикметник не узгоджено з іменником",
                            "query": "noun->[amod]->adj",
                            "validation": "noun_case == adj_case",
                            "correction": "adj_case = noun_case",
                            "examples": [
                                {"kind": "correct", "text": "зелена трава росте"}
                            ]
                        }
                    ]
                },
                {
                    "name": "Government",
                    "rules": [
                        {
                            "id": "uk_verb_obj_case",
                            "name": "Verb object case",
                            "message": "Додаток у неправильному відмінку",
                            "query": "verb->[obj]->noun",
                            "validation": "noun_case == 'v_zna'",
                            "correction": "noun_case = 'v_zna'"
                        }
                    ]
                }
            ]
        }"#;

        let rules = load_rules(json.as_bytes()).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].id, "uk_adj_noun_case");
        assert_eq!(rules[0].examples.len(), 1);
        assert_eq!(rules[1].query, "verb->[obj]->noun");
    }

    #[test]
    fn empty_file_loads_zero_rules() {
        assert!(load_rules("{}".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_a_load_error() {
        assert!(matches!(load_rules("{".as_bytes()), Err(LoadError::Json(_))));
    }
}
