//! Variable store for expression evaluation.

use std::collections::{HashMap, HashSet};

/// A value in the expression language: every inflection feature is either a
/// string (`case -> "v_naz"`) or a boolean flag (`anim -> true`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Str(String),
}

impl Value {
    /// Truthiness used by `&&`, `||`, `!` and the validation verdict:
    /// `Bool(true)` and non-empty strings are truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Str(s) => !s.is_empty(),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

/// Variable bindings for one validation or correction pass.
///
/// The store distinguishes two write paths:
///
/// - [`set_untracked`](EvalContext::set_untracked) seeds read-only bindings
///   (the `{alias}_{feature}` values of the matched path) before evaluation.
/// - [`set`](EvalContext::set) is what assignment statements call; it records
///   the name in the *touched* set. After a correction pass, the touched set
///   is the authoritative list of what the rule changed; a seeded binding
///   that merely differs from a token's current inflection is not a
///   correction.
///
/// A context lives for one path of one rule evaluation and is then dropped.
#[derive(Debug, Default)]
pub struct EvalContext {
    vars: HashMap<String, Value>,
    touched: HashSet<String>,
}

impl EvalContext {
    pub fn new() -> Self {
        EvalContext::default()
    }

    /// Read a variable. Unset names read as `Bool(false)`; the expression
    /// language never observes "undefined".
    pub fn get(&self, name: &str) -> Value {
        self.vars.get(name).cloned().unwrap_or(Value::Bool(false))
    }

    /// Read a variable without the `false` default.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Seed a binding without marking it touched.
    pub fn set_untracked(&mut self, name: impl Into<String>, value: Value) {
        self.vars.insert(name.into(), value);
    }

    /// Write a binding and record it as touched. This is the only write the
    /// expression evaluator performs.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        self.touched.insert(name.clone());
        self.vars.insert(name, value);
    }

    /// Names written through [`set`](EvalContext::set) during evaluation.
    pub fn touched(&self) -> &HashSet<String> {
        &self.touched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variables_read_as_false() {
        let ctx = EvalContext::new();
        assert_eq!(ctx.get("missing"), Value::Bool(false));
        assert_eq!(ctx.lookup("missing"), None);
    }

    #[test]
    fn untracked_writes_do_not_touch() {
        let mut ctx = EvalContext::new();
        ctx.set_untracked("noun_case", Value::from("v_naz"));
        assert!(ctx.touched().is_empty());
        assert_eq!(ctx.get("noun_case"), Value::from("v_naz"));
    }

    #[test]
    fn tracked_writes_touch_even_when_overwriting_seeds() {
        let mut ctx = EvalContext::new();
        ctx.set_untracked("adj_case", Value::from("v_rod"));
        ctx.set("adj_case", Value::from("v_naz"));
        assert!(ctx.touched().contains("adj_case"));
        assert_eq!(ctx.get("adj_case"), Value::from("v_naz"));
    }

    #[test]
    fn truthiness_of_values() {
        assert!(Value::Bool(true).is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::from("v_naz").is_truthy());
        assert!(!Value::Str(String::new()).is_truthy());
    }
}
