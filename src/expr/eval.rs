//! Direct AST evaluation.
//!
//! Evaluation cannot fail: unset reads default to `false`, and comparing
//! values of different shapes is ordinary inequality. This laxity is by
//! contract (rule-author ergonomics over strictness); anything that *can*
//! go wrong in an expression is caught at parse time.

use super::context::{EvalContext, Value};
use super::parser::{BinaryOp, Expr, Program};

impl Expr {
    pub(crate) fn eval(&self, ctx: &mut EvalContext) -> Value {
        match self {
            Expr::Literal(value) => value.clone(),
            Expr::Var(name) => ctx.get(name),
            Expr::Not(inner) => Value::Bool(!inner.eval(ctx).is_truthy()),
            Expr::Binary { op, lhs, rhs } => match op {
                BinaryOp::Eq => Value::Bool(lhs.eval(ctx) == rhs.eval(ctx)),
                BinaryOp::Ne => Value::Bool(lhs.eval(ctx) != rhs.eval(ctx)),
                BinaryOp::And => {
                    if !lhs.eval(ctx).is_truthy() {
                        return Value::Bool(false);
                    }
                    Value::Bool(rhs.eval(ctx).is_truthy())
                }
                BinaryOp::Or => {
                    if lhs.eval(ctx).is_truthy() {
                        return Value::Bool(true);
                    }
                    Value::Bool(rhs.eval(ctx).is_truthy())
                }
            },
            Expr::Assign { name, value } => {
                let value = value.eval(ctx);
                ctx.set(name.clone(), value.clone());
                value
            }
        }
    }
}

impl Program {
    /// Evaluate every statement in order; the program's value is the last
    /// statement's value (`false` for an empty program).
    pub(crate) fn eval(&self, ctx: &mut EvalContext) -> Value {
        let mut result = Value::Bool(false);
        for statement in &self.statements {
            result = statement.eval(ctx);
        }
        result
    }
}
