//! # texform-formula
//!
//! Formula engine for texform.
//!
//! This crate provides:
//! - Tokenizing (text → tokens)
//! - Formula parsing (tokens → AST)
//! - Formula evaluation (AST + variables → number)
//! - LaTeX rendering (AST → markup)
//!
//! ## Example
//!
//! ```rust
//! use texform_formula::{evaluate, parse, render, tokenize, VariableEnvironment};
//!
//! let ast = parse(&tokenize("x^2/2"))?;
//! let env: VariableEnvironment = [('x', 3.0)].into_iter().collect();
//!
//! assert_eq!(evaluate(&ast, &env)?, 4.5);
//! assert_eq!(render(&ast), r"\frac{x^{2}}{2}");
//! # Ok::<(), texform_formula::FormulaError>(())
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod token;
pub mod variables;

pub use ast::{FormulaExpr, FunctionName, Operator};
pub use error::{EvalError, FormulaError, FormulaResult, ParseError};
pub use evaluator::{evaluate, evaluate_with_limits, EvaluationLimits};
pub use lexer::tokenize;
pub use parser::{parse, parse_formula, MAX_DEPTH};
pub use render::{render, render_formula};
pub use token::Token;
pub use variables::{parse_value, variable_names, VariableEnvironment};
