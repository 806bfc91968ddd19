//! The rule expression language.
//!
//! Validation and correction expressions are written by rule authors against
//! `{alias}_{feature}` variables, e.g.:
//!
//! ```text
//! validation:  noun_case == adj_case && noun_number == adj_number
//! correction:  adj_case = noun_case; adj_number = noun_number
//! ```
//!
//! The language is deliberately small and closed: boolean logic, string
//! equality, variable read/write, nothing else. It compiles to a tagged
//! `Expr` AST and is evaluated directly against an [`EvalContext`]:
//!
//! ```text
//! source ── Lexer ──▶ tokens ── Parser ──▶ Program (Vec<Expr>)
//!                                              │
//!                              eval(&mut EvalContext) ──▶ Value
//! ```
//!
//! ## Semantics
//!
//! - Reading an unset variable yields `Bool(false)`, never an error, so
//!   boolean logic over missing features short-circuits safely.
//! - `==`/`!=` compare values structurally; comparing a string against a
//!   boolean is simply unequal, not a type error.
//! - `&&`/`||` short-circuit on truthiness: `Bool(true)` and non-empty
//!   strings are truthy.
//! - `name = expr` writes the variable and records it in the context's
//!   touched set; this is the only way rule logic can mark a correction.
//! - Statements are separated by `;`; a program evaluates to its last
//!   statement's value.

#[path = "expr/context.rs"]
mod context;
#[path = "expr/eval.rs"]
mod eval;
#[path = "expr/lexer.rs"]
mod lexer;
#[path = "expr/parser.rs"]
mod parser;

pub use context::{EvalContext, Value};
pub(crate) use parser::Program;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExprError {
    #[error("unexpected character {0:?} in expression")]
    UnexpectedChar(char),

    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("unexpected token {0} in expression")]
    UnexpectedToken(String),

    #[error("unexpected end of expression")]
    UnexpectedEnd,
}
