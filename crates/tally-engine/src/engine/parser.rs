//! Formula parser.
//!
//! A recursive descent parser over [`Token`]s with the usual precedence:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-')? primary
//! primary := NUMBER | REF | '(' expr ')'
//! ```
//!
//! Each binary level is parsed into a flat [`Expr::Chain`] that the evaluator
//! folds left to right, so long operator runs never nest. Only parentheses
//! nest, and their depth is capped by the caller. An operand carries at most
//! one sign, so `2--3` parses but `--3` does not.

use super::lexer::Token;
use crate::error::{EvalError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Parsed formula expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Number(i64),
    Ref(String),
    Neg(Box<Expr>),
    /// A parenthesized sub-expression.
    Group(Box<Expr>),
    /// `first op operand op operand ...` at one precedence level.
    Chain {
        first: Box<Expr>,
        rest: Vec<(BinaryOp, Expr)>,
    },
}

/// Parse a token stream, allowing at most `max_nesting` levels of
/// parentheses. An empty stream is a blank formula and yields `None`.
pub fn parse(tokens: &[Token], max_nesting: usize) -> Result<Option<Expr>> {
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        nesting: 0,
        max_nesting,
    };
    let expr = parser.expr()?;

    if let Some(token) = parser.peek() {
        return Err(EvalError::Syntax(format!("unexpected '{}'", token)));
    }

    Ok(Some(expr))
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    nesting: usize,
    max_nesting: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    fn expr(&mut self) -> Result<Expr> {
        let first = self.term()?;
        let mut rest = Vec::new();
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => break,
            };
            self.pos += 1;
            rest.push((op, self.term()?));
        }
        Ok(chain(first, rest))
    }

    fn term(&mut self) -> Result<Expr> {
        let first = self.unary()?;
        let mut rest = Vec::new();
        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinaryOp::Mul,
                Some(Token::Slash) => BinaryOp::Div,
                _ => break,
            };
            self.pos += 1;
            rest.push((op, self.unary()?));
        }
        Ok(chain(first, rest))
    }

    fn unary(&mut self) -> Result<Expr> {
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(Expr::Neg(Box::new(self.primary()?)))
            }
            Some(Token::Plus) => {
                self.pos += 1;
                self.primary()
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Expr> {
        match self.next() {
            Some(Token::Number(n)) => Ok(Expr::Number(*n)),
            Some(Token::Ref(id)) => Ok(Expr::Ref(id.clone())),
            Some(Token::LeftParen) => {
                if let Some(Token::RightParen) = self.peek() {
                    return Err(EvalError::Syntax("empty parentheses".into()));
                }
                if self.nesting >= self.max_nesting {
                    return Err(EvalError::Syntax(format!(
                        "parentheses nested deeper than {}",
                        self.max_nesting
                    )));
                }
                self.nesting += 1;
                let inner = self.expr()?;
                self.nesting -= 1;
                match self.next() {
                    Some(Token::RightParen) => Ok(Expr::Group(Box::new(inner))),
                    Some(token) => Err(EvalError::Syntax(format!(
                        "expected ')' but found '{}'",
                        token
                    ))),
                    None => Err(EvalError::Syntax("unclosed '('".into())),
                }
            }
            Some(token) => Err(EvalError::Syntax(format!("unexpected '{}'", token))),
            None => Err(EvalError::UnexpectedEnd),
        }
    }
}

fn chain(first: Expr, rest: Vec<(BinaryOp, Expr)>) -> Expr {
    if rest.is_empty() {
        first
    } else {
        Expr::Chain {
            first: Box::new(first),
            rest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::lexer::tokenize;
    use pretty_assertions::assert_eq;

    fn parse_str(body: &str) -> Result<Option<Expr>> {
        parse(&tokenize(body)?, 64)
    }

    fn num(n: i64) -> Expr {
        Expr::Number(n)
    }

    #[test]
    fn test_blank_formula_parses_to_none() {
        assert_eq!(parse_str("").unwrap(), None);
        assert_eq!(parse_str("  ").unwrap(), None);
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        assert_eq!(
            parse_str("2+3*4").unwrap(),
            Some(Expr::Chain {
                first: Box::new(num(2)),
                rest: vec![(
                    BinaryOp::Add,
                    Expr::Chain {
                        first: Box::new(num(3)),
                        rest: vec![(BinaryOp::Mul, num(4))],
                    }
                )],
            })
        );
    }

    #[test]
    fn test_operator_runs_stay_flat() {
        assert_eq!(
            parse_str("8-4-2").unwrap(),
            Some(Expr::Chain {
                first: Box::new(num(8)),
                rest: vec![(BinaryOp::Sub, num(4)), (BinaryOp::Sub, num(2))],
            })
        );

        let body = vec!["1"; 50_000].join("+");
        let Some(Expr::Chain { rest, .. }) = parse_str(&body).unwrap() else {
            panic!("expected a chain");
        };
        assert_eq!(rest.len(), 49_999);
    }

    #[test]
    fn test_single_sign_per_operand() {
        assert_eq!(
            parse_str("-A1").unwrap(),
            Some(Expr::Neg(Box::new(Expr::Ref("A1".into()))))
        );
        assert!(parse_str("2--3").is_ok());
        assert!(parse_str("2*-3").is_ok());
        assert!(matches!(parse_str("--3"), Err(EvalError::Syntax(_))));
    }

    #[test]
    fn test_parenthesis_errors() {
        assert!(matches!(parse_str("(1+2"), Err(EvalError::Syntax(_))));
        assert!(matches!(parse_str("1+2)"), Err(EvalError::Syntax(_))));
        assert!(matches!(parse_str("()"), Err(EvalError::Syntax(_))));
        assert!(matches!(parse_str("(1)(2)"), Err(EvalError::Syntax(_))));
        assert!(matches!(parse_str(")("), Err(EvalError::Syntax(_))));
    }

    #[test]
    fn test_dangling_operator() {
        assert_eq!(parse_str("1+"), Err(EvalError::UnexpectedEnd));
        assert_eq!(parse_str("-"), Err(EvalError::UnexpectedEnd));
        assert!(matches!(parse_str("*2"), Err(EvalError::Syntax(_))));
    }

    #[test]
    fn test_nested_parentheses() {
        assert_eq!(
            parse_str("((7))").unwrap(),
            Some(Expr::Group(Box::new(Expr::Group(Box::new(num(7))))))
        );
    }

    #[test]
    fn test_nesting_limit() {
        let within = format!("{}1{}", "(".repeat(64), ")".repeat(64));
        assert!(parse_str(&within).is_ok());

        let beyond = format!("{}1{}", "(".repeat(65), ")".repeat(65));
        assert!(matches!(parse_str(&beyond), Err(EvalError::Syntax(_))));

        let runaway = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
        assert!(matches!(parse_str(&runaway), Err(EvalError::Syntax(_))));
    }
}
