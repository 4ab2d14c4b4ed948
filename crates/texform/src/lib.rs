//! # texform
//!
//! Evaluate formulas over single-letter variables and render them as LaTeX.
//!
//! ## Features
//!
//! - Tokenizer and recursive descent parser for `+ - * / ^`, parentheses, `ln` and `log`
//! - Evaluation with overflow guards and descriptive errors
//! - LaTeX rendering of the parsed formula
//! - A calculator session that tracks variables across edits
//! - A saved formula library persisted as JSON
//!
//! ## Example
//!
//! ```rust
//! use texform::prelude::*;
//!
//! let ast = parse_formula("(a+b)^2").unwrap();
//! let env: VariableEnvironment = [('a', 1.0), ('b', 2.0)].into_iter().collect();
//!
//! assert_eq!(evaluate(&ast, &env).unwrap(), 9.0);
//! assert_eq!(render(&ast), r"\left(a + b\right)^{2}");
//! ```

pub mod display;
pub mod library;
pub mod prelude;
pub mod session;

pub use display::{format_outcome, format_result};
pub use library::{FormulaLibrary, LibraryError};
pub use session::{Calculator, Outcome};

// Re-export the formula engine
pub use texform_formula::{
    evaluate, evaluate_with_limits, parse, parse_formula, parse_value, render, render_formula,
    tokenize, variable_names, EvalError, EvaluationLimits, FormulaError, FormulaExpr,
    FormulaResult, FunctionName, Operator, ParseError, Token, VariableEnvironment,
};
