//! Interactive calculator session
//!
//! Holds the state an editor keeps between keystrokes: the formula text,
//! the variable values and the outcome of the last evaluation. Each edit
//! re-runs the whole pipeline; nothing is cached between edits.
//!
//! # Example
//!
//! ```rust
//! use texform::session::{Calculator, Outcome};
//!
//! let mut calc = Calculator::new();
//! calc.set_formula("x*y");
//! calc.set_variable('x', "3");
//! calc.set_variable('y', "4");
//! assert_eq!(calc.outcome(), &Outcome::Value(12.0));
//!
//! // Values survive edits that keep the variable
//! calc.set_formula("x+1");
//! assert_eq!(calc.outcome(), &Outcome::Value(4.0));
//! ```

use crate::{
    evaluate_with_limits, parse_formula, render, EvaluationLimits, FormulaError, FormulaExpr,
    VariableEnvironment,
};

/// Result of the most recent evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The formula is blank
    Empty,
    Value(f64),
    Error(FormulaError),
}

impl Outcome {
    pub fn value(&self) -> Option<f64> {
        match self {
            Outcome::Value(v) => Some(*v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FormulaError> {
        match self {
            Outcome::Error(e) => Some(e),
            _ => None,
        }
    }
}

/// Calculator state for one formula being edited
#[derive(Debug, Clone)]
pub struct Calculator {
    limits: EvaluationLimits,
    formula: String,
    variables: VariableEnvironment,
    ast: Option<FormulaExpr>,
    latex: String,
    outcome: Outcome,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::with_limits(EvaluationLimits::default())
    }
}

impl Calculator {
    /// Create an empty calculator
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty calculator with custom evaluation limits
    pub fn with_limits(limits: EvaluationLimits) -> Self {
        Self {
            limits,
            formula: String::new(),
            variables: VariableEnvironment::new(),
            ast: None,
            latex: String::new(),
            outcome: Outcome::Empty,
        }
    }

    /// Replace the formula text
    ///
    /// Re-derives the variable set (keeping values of surviving names),
    /// re-renders the preview and re-evaluates.
    pub fn set_formula(&mut self, formula: &str) {
        self.formula = formula.to_string();
        self.variables = VariableEnvironment::for_formula(formula, &self.variables);

        if formula.trim().is_empty() {
            self.ast = None;
            self.latex.clear();
            self.outcome = Outcome::Empty;
            return;
        }

        match parse_formula(formula) {
            Ok(ast) => {
                self.latex = render(&ast);
                self.ast = Some(ast);
                self.reevaluate();
            }
            Err(err) => {
                log::debug!("formula {:?} does not parse: {}", formula, err);
                // Preview shows the raw text until it parses
                self.latex = formula.to_string();
                self.ast = None;
                self.outcome = Outcome::Error(err.into());
            }
        }
    }

    /// Set one variable from user-entered text and re-evaluate
    ///
    /// Text that is not a number counts as 0. Letters the current formula
    /// does not use are ignored.
    pub fn set_variable(&mut self, name: char, text: &str) {
        if !self.variables.contains(name) {
            log::debug!("ignoring value for unused variable '{}'", name);
            return;
        }
        self.variables.set_text(name, text);
        self.reevaluate();
    }

    fn reevaluate(&mut self) {
        if let Some(ast) = &self.ast {
            self.outcome = match evaluate_with_limits(ast, &self.variables, &self.limits) {
                Ok(value) => Outcome::Value(value),
                Err(err) => Outcome::Error(err.into()),
            };
        }
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn variables(&self) -> &VariableEnvironment {
        &self.variables
    }

    /// The parsed formula, if it parses
    pub fn ast(&self) -> Option<&FormulaExpr> {
        self.ast.as_ref()
    }

    /// LaTeX preview of the formula (raw text when it does not parse)
    pub fn latex(&self) -> &str {
        &self.latex
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}
