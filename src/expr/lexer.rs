//! Tokenizer for the rule expression language.

use super::ExprError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Ident(String),
    Str(String),
    Bool(bool),
    Eq,     // ==
    Ne,     // !=
    And,    // &&
    Or,     // ||
    Not,    // !
    Assign, // =
    Semi,   // ;
    LParen,
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Ident(name) => write!(f, "identifier {name:?}"),
            Token::Str(s) => write!(f, "string {s:?}"),
            Token::Bool(b) => write!(f, "{b}"),
            Token::Eq => write!(f, "'=='"),
            Token::Ne => write!(f, "'!='"),
            Token::And => write!(f, "'&&'"),
            Token::Or => write!(f, "'||'"),
            Token::Not => write!(f, "'!'"),
            Token::Assign => write!(f, "'='"),
            Token::Semi => write!(f, "';'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Tokenize `source` into a flat token list.
///
/// Strings accept either quote style (`'v_naz'` or `"v_naz"`) with no escape
/// sequences; tag components never contain quotes.
pub(crate) fn tokenize(source: &str) -> Result<Vec<Token>, ExprError> {
    let mut tokens = Vec::new();
    let mut chars = source.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            _ if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            ';' => {
                chars.next();
                tokens.push(Token::Semi);
            }
            '=' => {
                chars.next();
                if chars.peek() == Some(&'=') {
                    chars.next();
                    tokens.push(Token::Eq);
                } else {
                    tokens.push(Token::Assign);
                }
            }
            '!' => {
                chars.next();
                if chars.peek() == Some(&'=') {
                    chars.next();
                    tokens.push(Token::Ne);
                } else {
                    tokens.push(Token::Not);
                }
            }
            '&' => {
                chars.next();
                if chars.peek() == Some(&'&') {
                    chars.next();
                    tokens.push(Token::And);
                } else {
                    return Err(ExprError::UnexpectedChar('&'));
                }
            }
            '|' => {
                chars.next();
                if chars.peek() == Some(&'|') {
                    chars.next();
                    tokens.push(Token::Or);
                } else {
                    return Err(ExprError::UnexpectedChar('|'));
                }
            }
            '\'' | '"' => {
                let quote = c;
                chars.next();
                let mut value = String::new();
                loop {
                    match chars.next() {
                        Some(ch) if ch == quote => break,
                        Some(ch) => value.push(ch),
                        None => return Err(ExprError::UnterminatedString),
                    }
                }
                tokens.push(Token::Str(value));
            }
            _ if is_ident_start(c) => {
                let mut name = String::new();
                while let Some(&ch) = chars.peek() {
                    if !is_ident_continue(ch) {
                        break;
                    }
                    name.push(ch);
                    chars.next();
                }
                match name.as_str() {
                    "true" => tokens.push(Token::Bool(true)),
                    "false" => tokens.push(Token::Bool(false)),
                    _ => tokens.push(Token::Ident(name)),
                }
            }
            _ => return Err(ExprError::UnexpectedChar(c)),
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_operators_and_literals() {
        let tokens = tokenize("a_case == 'v_naz' && !b || c != false").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("a_case".to_string()),
                Token::Eq,
                Token::Str("v_naz".to_string()),
                Token::And,
                Token::Not,
                Token::Ident("b".to_string()),
                Token::Or,
                Token::Ident("c".to_string()),
                Token::Ne,
                Token::Bool(false),
            ]
        );
    }

    #[test]
    fn distinguishes_assignment_from_equality() {
        let tokens = tokenize("x = y; x == y").unwrap();
        assert_eq!(tokens[1], Token::Assign);
        assert_eq!(tokens[3], Token::Semi);
        assert_eq!(tokens[5], Token::Eq);
    }

    #[test]
    fn rejects_bare_ampersand_and_open_string() {
        assert_eq!(tokenize("a & b").unwrap_err(), ExprError::UnexpectedChar('&'));
        assert_eq!(tokenize("'open").unwrap_err(), ExprError::UnterminatedString);
    }

    #[test]
    fn accepts_double_quoted_strings() {
        let tokens = tokenize(r#"tag == "v_zna""#).unwrap();
        assert_eq!(tokens[2], Token::Str("v_zna".to_string()));
    }
}
