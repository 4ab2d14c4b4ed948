//! Formula error types

use crate::ast::FunctionName;
use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Malformed formula syntax
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A function name not followed by `(`
    #[error("Missing opening parenthesis after {0}")]
    MissingOpenParen(FunctionName),

    /// A function argument not closed by `)`
    #[error("Missing closing parenthesis after {0} argument")]
    MissingFunctionCloseParen(FunctionName),

    /// A parenthesized group not closed by `)`
    #[error("Missing closing parenthesis")]
    MissingCloseParen,

    /// Literal text that is neither a numeral nor a single letter
    #[error("Invalid token '{0}'")]
    InvalidToken(String),

    /// Token in a position where an operand was expected
    #[error("Unexpected token '{0}'")]
    UnexpectedToken(String),

    /// Input ended where an operand was expected
    #[error("Unexpected end of formula")]
    UnexpectedEnd,

    /// Tokens left over after a complete expression
    #[error("Unexpected token '{0}' after expression")]
    TrailingInput(String),

    /// Numeral too long to represent as a finite value
    #[error("Number too large: '{0}'")]
    NumberTooLarge(String),

    /// Parentheses, function calls or operator chains nested past
    /// [`MAX_DEPTH`](crate::parser::MAX_DEPTH)
    #[error("Formula is nested too deeply")]
    TooDeep,
}

/// Domain or magnitude violation while evaluating a well-formed formula
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("Division by zero")]
    DivisionByZero,

    /// Logarithm of a non-positive value
    #[error("Cannot compute logarithm of {0}")]
    LogarithmDomain(f64),

    #[error("Maximum value reached: Exponent too large")]
    ExponentTooLarge,

    #[error("Maximum value reached: Base value too large for exponentiation")]
    BaseTooLarge,

    /// Infinite or NaN result
    #[error("Maximum value reached: Result is too large")]
    NotFinite,

    /// Finite result beyond the configured magnitude limit
    #[error("Maximum value reached: Result exceeds safe calculation limit")]
    OutOfRange,
}

/// Errors that can occur during formula parsing or evaluation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl FormulaError {
    pub fn is_parse(&self) -> bool {
        matches!(self, FormulaError::Parse(_))
    }
}
