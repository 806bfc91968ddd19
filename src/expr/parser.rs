//! Recursive-descent parser producing the closed `Expr` AST.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! program  := statement (';' statement)* ';'?
//! statement:= IDENT '=' or | or
//! or       := and ('||' and)*
//! and      := equality ('&&' equality)*
//! equality := unary (('==' | '!=') unary)*
//! unary    := '!' unary | primary
//! primary  := STRING | BOOL | IDENT | '(' or ')'
//! ```

use super::ExprError;
use super::context::Value;
use super::lexer::{Token, tokenize};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expr {
    Literal(Value),
    Var(String),
    Not(Box<Expr>),
    Binary { op: BinaryOp, lhs: Box<Expr>, rhs: Box<Expr> },
    Assign { name: String, value: Box<Expr> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Eq,
    Ne,
    And,
    Or,
}

/// A parsed expression program: one or more `;`-separated statements.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Program {
    pub statements: Vec<Expr>,
}

impl Program {
    pub fn parse(source: &str) -> Result<Program, ExprError> {
        let tokens = tokenize(source)?;
        Parser { tokens, pos: 0 }.program()
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Result<Token, ExprError> {
        let token = self.tokens.get(self.pos).cloned().ok_or(ExprError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(token)
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn program(&mut self) -> Result<Program, ExprError> {
        let mut statements = Vec::new();
        loop {
            // Tolerate empty statements so trailing semicolons parse.
            while self.eat(&Token::Semi) {}
            if self.peek().is_none() {
                break;
            }
            statements.push(self.statement()?);
            if self.peek().is_some() && !self.eat(&Token::Semi) {
                return Err(ExprError::UnexpectedToken(self.tokens[self.pos].to_string()));
            }
        }
        Ok(Program { statements })
    }

    fn statement(&mut self) -> Result<Expr, ExprError> {
        // Two-token lookahead: IDENT '=' starts an assignment, anything else
        // is a plain expression ('==' was already fused by the lexer).
        if let (Some(Token::Ident(name)), Some(Token::Assign)) =
            (self.tokens.get(self.pos), self.tokens.get(self.pos + 1))
        {
            let name = name.clone();
            self.pos += 2;
            let value = self.or()?;
            return Ok(Expr::Assign { name, value: Box::new(value) });
        }
        self.or()
    }

    fn or(&mut self) -> Result<Expr, ExprError> {
        let mut lhs = self.and()?;
        while self.eat(&Token::Or) {
            let rhs = self.and()?;
            lhs = Expr::Binary { op: BinaryOp::Or, lhs: Box::new(lhs), rhs: Box::new(rhs) };
        }
        Ok(lhs)
    }

    fn and(&mut self) -> Result<Expr, ExprError> {
        let mut lhs = self.equality()?;
        while self.eat(&Token::And) {
            let rhs = self.equality()?;
            lhs = Expr::Binary { op: BinaryOp::And, lhs: Box::new(lhs), rhs: Box::new(rhs) };
        }
        Ok(lhs)
    }

    fn equality(&mut self) -> Result<Expr, ExprError> {
        let mut lhs = self.unary()?;
        loop {
            let op = if self.eat(&Token::Eq) {
                BinaryOp::Eq
            } else if self.eat(&Token::Ne) {
                BinaryOp::Ne
            } else {
                break;
            };
            let rhs = self.unary()?;
            lhs = Expr::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) };
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expr, ExprError> {
        if self.eat(&Token::Not) {
            return Ok(Expr::Not(Box::new(self.unary()?)));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr, ExprError> {
        match self.next()? {
            Token::Str(s) => Ok(Expr::Literal(Value::Str(s))),
            Token::Bool(b) => Ok(Expr::Literal(Value::Bool(b))),
            Token::Ident(name) => Ok(Expr::Var(name)),
            Token::LParen => {
                let inner = self.or()?;
                if !self.eat(&Token::RParen) {
                    return match self.peek() {
                        Some(token) => Err(ExprError::UnexpectedToken(token.to_string())),
                        None => Err(ExprError::UnexpectedEnd),
                    };
                }
                Ok(inner)
            }
            token => Err(ExprError::UnexpectedToken(token.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_precedence_or_over_and_over_equality() {
        let program = Program::parse("a == b && c || d").unwrap();
        assert_eq!(program.statements.len(), 1);

        match &program.statements[0] {
            Expr::Binary { op: BinaryOp::Or, lhs, .. } => match lhs.as_ref() {
                Expr::Binary { op: BinaryOp::And, lhs, .. } => {
                    assert!(matches!(lhs.as_ref(), Expr::Binary { op: BinaryOp::Eq, .. }));
                }
                other => panic!("expected And below Or, got {other:?}"),
            },
            other => panic!("expected Or at top, got {other:?}"),
        }
    }

    #[test]
    fn parses_assignment_statements() {
        let program = Program::parse("adj_case = noun_case; adj_anim = true;").unwrap();
        assert_eq!(program.statements.len(), 2);
        assert!(matches!(&program.statements[0], Expr::Assign { name, .. } if name == "adj_case"));
        assert!(
            matches!(&program.statements[1], Expr::Assign { value, .. }
                if **value == Expr::Literal(Value::Bool(true)))
        );
    }

    #[test]
    fn parses_parenthesized_negation() {
        let program = Program::parse("!(a_case == 'v_naz')").unwrap();
        assert!(matches!(&program.statements[0], Expr::Not(_)));
    }

    #[test]
    fn rejects_dangling_operator() {
        assert_eq!(Program::parse("a ==").unwrap_err(), ExprError::UnexpectedEnd);
        assert!(matches!(Program::parse("a b"), Err(ExprError::UnexpectedToken(_))));
    }

    #[test]
    fn empty_program_is_valid() {
        assert!(Program::parse("").unwrap().statements.is_empty());
        assert!(Program::parse(" ; ; ").unwrap().statements.is_empty());
    }
}
