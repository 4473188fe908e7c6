//! Formula tokenizer.
//!
//! Whitespace is not significant anywhere in a formula and is dropped here,
//! so `A1 + 2` and `A1+2` produce the same tokens.

use std::fmt;

use super::cell::parse_integer;
use super::cell_ref::{is_integer_word, word_re};
use crate::error::{EvalError, Result};

/// A formula token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Number(i64),
    Ref(String),
    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Ref(id) => write!(f, "{}", id),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Star => f.write_str("*"),
            Token::Slash => f.write_str("/"),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
        }
    }
}

/// Split a formula body into tokens.
pub fn tokenize(body: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(c) = body[pos..].chars().next() {
        if c.is_whitespace() {
            pos += c.len_utf8();
            continue;
        }

        let single = match c {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Minus),
            '*' => Some(Token::Star),
            '/' => Some(Token::Slash),
            '(' => Some(Token::LeftParen),
            ')' => Some(Token::RightParen),
            _ => None,
        };
        if let Some(token) = single {
            tokens.push(token);
            pos += 1;
            continue;
        }

        let Some(word) = word_re().find(&body[pos..]) else {
            return Err(EvalError::Syntax(format!(
                "unexpected character '{}' at offset {}",
                c, pos
            )));
        };
        let word = word.as_str();
        if is_integer_word(word) {
            tokens.push(Token::Number(parse_integer(word)?));
        } else {
            tokens.push(Token::Ref(word.to_string()));
        }
        pos += word.len();
    }

    Ok(tokens)
}
