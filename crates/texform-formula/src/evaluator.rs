//! Formula evaluator
//!
//! Evaluates formula ASTs to numbers. Every literal, variable lookup and
//! intermediate result passes through a bounds check so that overflow is
//! reported as an [`EvalError`] instead of surfacing as infinity or NaN.

use crate::ast::{FormulaExpr, FunctionName, Operator};
use crate::error::EvalError;
use crate::variables::VariableEnvironment;

/// Numeric limits applied during evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationLimits {
    /// Largest exponent accepted by `^` (default: 1000)
    pub max_exponent: f64,
    /// Largest base magnitude accepted by `^` when the exponent is above 2 (default: 1e154)
    pub max_power_base: f64,
    /// Largest magnitude any value may reach (default: 1e308)
    pub max_magnitude: f64,
}

impl Default for EvaluationLimits {
    fn default() -> Self {
        Self {
            max_exponent: 1000.0,
            max_power_base: 1e154,
            max_magnitude: 1e308,
        }
    }
}

/// Evaluate a formula expression with the default limits
///
/// # Example
/// ```rust
/// use texform_formula::{evaluate, parse_formula, VariableEnvironment};
///
/// let ast = parse_formula("x+y").unwrap();
/// let env: VariableEnvironment = [('x', 3.0), ('y', 4.0)].into_iter().collect();
/// assert_eq!(evaluate(&ast, &env).unwrap(), 7.0);
/// ```
pub fn evaluate(expr: &FormulaExpr, env: &VariableEnvironment) -> Result<f64, EvalError> {
    evaluate_with_limits(expr, env, &EvaluationLimits::default())
}

/// Evaluate a formula expression with custom limits
pub fn evaluate_with_limits(
    expr: &FormulaExpr,
    env: &VariableEnvironment,
    limits: &EvaluationLimits,
) -> Result<f64, EvalError> {
    let result = Evaluator { env, limits }.eval(expr);
    if let Err(err) = &result {
        log::debug!("evaluation failed: {}", err);
    }
    result
}

struct Evaluator<'a> {
    env: &'a VariableEnvironment,
    limits: &'a EvaluationLimits,
}

impl Evaluator<'_> {
    fn eval(&self, expr: &FormulaExpr) -> Result<f64, EvalError> {
        match expr {
            FormulaExpr::Number(n) => self.check(*n),

            FormulaExpr::Variable(name) => self.check(self.env.get(*name)),

            FormulaExpr::Function { name, argument } => {
                let arg = self.eval(argument)?;
                self.check(evaluate_function(*name, arg)?)
            }

            FormulaExpr::BinaryOp { op, left, right } => {
                let l = self.eval(left)?;
                let r = self.eval(right)?;
                self.check(self.evaluate_binary_op(*op, l, r)?)
            }
        }
    }

    fn evaluate_binary_op(&self, op: Operator, l: f64, r: f64) -> Result<f64, EvalError> {
        match op {
            Operator::Add => Ok(l + r),
            Operator::Subtract => Ok(l - r),
            Operator::Multiply => Ok(l * r),
            Operator::Divide => {
                if r == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(l / r)
                }
            }
            Operator::Power => {
                // Guard before calling powf so the caller gets a precise reason
                if r > self.limits.max_exponent {
                    return Err(EvalError::ExponentTooLarge);
                }
                if l.abs() > self.limits.max_power_base && r > 2.0 {
                    return Err(EvalError::BaseTooLarge);
                }
                Ok(l.powf(r))
            }
        }
    }

    /// Bounds check applied to every value
    fn check(&self, value: f64) -> Result<f64, EvalError> {
        if !value.is_finite() {
            return Err(EvalError::NotFinite);
        }
        if value.abs() > self.limits.max_magnitude {
            return Err(EvalError::OutOfRange);
        }
        Ok(value)
    }
}

fn evaluate_function(name: FunctionName, arg: f64) -> Result<f64, EvalError> {
    if arg <= 0.0 {
        return Err(EvalError::LogarithmDomain(arg));
    }
    Ok(match name {
        FunctionName::Ln => arg.ln(),
        FunctionName::Log => arg.log10(),
    })
}
