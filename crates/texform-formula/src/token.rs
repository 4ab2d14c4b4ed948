//! Lexical tokens

use crate::ast::{FunctionName, Operator};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Token types
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Token {
    /// A run of literal text that is not a single letter.
    /// The parser decides whether it really is a numeral.
    Number(String),
    /// Single ASCII letter
    Identifier(char),
    /// `ln` or `log`
    Function(FunctionName),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl Token {
    /// Classify a pending run of literal text
    pub(crate) fn from_run(text: String) -> Self {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Token::Identifier(c),
            _ => Token::Number(text),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => f.write_str(text),
            Token::Identifier(c) => write!(f, "{}", c),
            Token::Function(name) => write!(f, "{}", name),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
        }
    }
}
