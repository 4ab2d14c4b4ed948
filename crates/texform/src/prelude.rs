//! Prelude module - common imports for texform users
//!
//! ```rust
//! use texform::prelude::*;
//! ```

pub use crate::{
    // Engine functions
    evaluate,
    parse,
    parse_formula,
    render,
    tokenize,

    // Session types
    Calculator,
    Outcome,

    // Error types
    EvalError,
    FormulaError,
    ParseError,

    // AST and values
    FormulaExpr,
    FormulaLibrary,
    Token,
    VariableEnvironment,
};
