//! LaTeX rendering of formula ASTs
//!
//! Rendering is purely structural: variable values are never consulted and
//! every tree the parser can produce renders without error.

use crate::ast::{FormulaExpr, FunctionName, Operator};
use crate::parser::parse_formula;
use std::fmt::{self, Write};

/// Render an AST as LaTeX markup (without math delimiters)
///
/// # Example
/// ```rust
/// use texform_formula::{parse_formula, render};
///
/// let ast = parse_formula("(a+b)^2").unwrap();
/// assert_eq!(render(&ast), r"\left(a + b\right)^{2}");
/// ```
pub fn render(expr: &FormulaExpr) -> String {
    expr.to_string()
}

/// Render formula text, falling back to the text itself when it does not parse
pub fn render_formula(formula: &str) -> String {
    match parse_formula(formula) {
        Ok(expr) => render(&expr),
        Err(err) => {
            log::debug!("showing raw text for {:?}: {}", formula, err);
            formula.to_string()
        }
    }
}

impl fmt::Display for FormulaExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_latex(self, f)
    }
}

fn write_latex<W: Write>(expr: &FormulaExpr, out: &mut W) -> fmt::Result {
    match expr {
        FormulaExpr::Number(n) => write!(out, "{}", n),
        FormulaExpr::Variable(name) => out.write_char(*name),

        FormulaExpr::Function { name, argument } => {
            out.write_str(match name {
                FunctionName::Ln => r"\ln(",
                FunctionName::Log => r"\log_{10}(",
            })?;
            write_latex(argument, out)?;
            out.write_char(')')
        }

        FormulaExpr::BinaryOp { op, left, right } => match op {
            Operator::Add | Operator::Subtract => {
                write_latex(left, out)?;
                write!(out, " {} ", op)?;
                write_latex(right, out)
            }
            Operator::Multiply => {
                write_latex(left, out)?;
                out.write_str(r" \cdot ")?;
                write_latex(right, out)
            }
            Operator::Divide => {
                out.write_str(r"\frac{")?;
                write_latex(left, out)?;
                out.write_str("}{")?;
                write_latex(right, out)?;
                out.write_char('}')
            }
            Operator::Power => {
                // Only an operator node on the left is ambiguous without parentheses
                if left.is_binary_op() {
                    out.write_str(r"\left(")?;
                    write_latex(left, out)?;
                    out.write_str(r"\right)")?;
                } else {
                    write_latex(left, out)?;
                }
                out.write_str("^{")?;
                write_latex(right, out)?;
                out.write_char('}')
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn latex(formula: &str) -> String {
        render(&parse_formula(formula).unwrap())
    }

    #[test]
    fn test_render_leaves() {
        assert_eq!(latex("42"), "42");
        assert_eq!(latex("2.50"), "2.5");
        assert_eq!(latex(".5"), "0.5");
        assert_eq!(latex("x"), "x");
    }

    #[test]
    fn test_render_operators() {
        assert_eq!(latex("a+b"), "a + b");
        assert_eq!(latex("a-b"), "a - b");
        assert_eq!(latex("a*b"), r"a \cdot b");
        assert_eq!(latex("a/b"), r"\frac{a}{b}");
        assert_eq!(latex("a^b"), "a^{b}");
    }

    #[test]
    fn test_render_functions() {
        assert_eq!(latex("ln(x)"), r"\ln(x)");
        assert_eq!(latex("log(x+1)"), r"\log_{10}(x + 1)");
    }

    #[test]
    fn test_render_power_parentheses() {
        assert_eq!(latex("(a+b)^2"), r"\left(a + b\right)^{2}");
        assert_eq!(latex("a+b^2"), "a + b^{2}");
        assert_eq!(latex("(a^b)^c"), r"\left(a^{b}\right)^{c}");
        assert_eq!(latex("a^b^c"), "a^{b^{c}}");
        assert_eq!(latex("ln(x)^2"), r"\ln(x)^{2}");
    }

    #[test]
    fn test_render_nested() {
        assert_eq!(
            latex("(x+1)/(y*2)^3"),
            r"\frac{x + 1}{\left(y \cdot 2\right)^{3}}"
        );
    }

    #[test]
    fn test_render_formula_fallback() {
        assert_eq!(render_formula("a/b"), r"\frac{a}{b}");
        assert_eq!(render_formula("ln(x"), "ln(x");
        assert_eq!(render_formula(""), "");
    }
}
