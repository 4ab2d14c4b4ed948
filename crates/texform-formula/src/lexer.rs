//! Formula tokenizer
//!
//! Splits formula text into [`Token`]s in a single left-to-right pass.
//! Lexing never fails: characters that fit nowhere else collect into a
//! pending literal run, and the parser rejects runs that are not numerals.

use crate::ast::{FunctionName, Operator};
use crate::token::Token;

/// Tokenize a formula string
///
/// # Example
/// ```rust
/// use texform_formula::{tokenize, Token};
///
/// let tokens = tokenize("ln(x)");
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[1], Token::LeftParen);
/// ```
pub fn tokenize(formula: &str) -> Vec<Token> {
    let tokens = Lexer::new(formula).run();
    log::trace!("tokenized {:?} into {} tokens", formula, tokens.len());
    tokens
}

struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    pending: String,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            pending: String::new(),
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Token> {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.flush();
                self.advance();
                continue;
            }

            if let Some(op) = Operator::from_char(c) {
                self.emit(Token::Operator(op));
                self.advance();
                continue;
            }

            match c {
                '(' => {
                    self.emit(Token::LeftParen);
                    self.advance();
                    continue;
                }
                ')' => {
                    self.emit(Token::RightParen);
                    self.advance();
                    continue;
                }
                _ => {}
            }

            // Function names win over a one-letter variable `l`
            if c == 'l' {
                if let Some(name) = FunctionName::prefix_of(&self.input[self.pos..]) {
                    self.emit(Token::Function(name));
                    self.pos += name.as_str().len();
                    continue;
                }
            }

            self.pending.push(c);
            self.advance();
        }

        self.flush();
        self.tokens
    }

    // === Helper methods ===

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    /// Push `token` after whatever literal text is pending
    fn emit(&mut self, token: Token) {
        self.flush();
        self.tokens.push(token);
    }

    fn flush(&mut self) {
        if !self.pending.is_empty() {
            let text = std::mem::take(&mut self.pending);
            self.tokens.push(Token::from_run(text));
        }
    }
}
