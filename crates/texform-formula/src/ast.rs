//! Formula Abstract Syntax Tree types

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Formula expression AST
///
/// Every node owns its children; a tree is built once per formula text and
/// shared read-only by the evaluator and the renderer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormulaExpr {
    /// Numeric literal
    Number(f64),
    /// Single-letter variable reference
    Variable(char),

    /// Logarithm call with exactly one argument
    Function {
        name: FunctionName,
        argument: Box<FormulaExpr>,
    },

    /// Binary operation
    BinaryOp {
        op: Operator,
        left: Box<FormulaExpr>,
        right: Box<FormulaExpr>,
    },
}

impl FormulaExpr {
    /// Build a binary node, boxing both operands
    pub fn binary(op: Operator, left: FormulaExpr, right: FormulaExpr) -> Self {
        FormulaExpr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Build a function node
    pub fn function(name: FunctionName, argument: FormulaExpr) -> Self {
        FormulaExpr::Function {
            name,
            argument: Box::new(argument),
        }
    }

    pub fn is_binary_op(&self) -> bool {
        matches!(self, FormulaExpr::BinaryOp { .. })
    }

    /// Distinct variable names in the order they first appear (left to right)
    pub fn variables(&self) -> Vec<char> {
        let mut names = Vec::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables(&self, names: &mut Vec<char>) {
        match self {
            FormulaExpr::Number(_) => {}
            FormulaExpr::Variable(name) => {
                if !names.contains(name) {
                    names.push(*name);
                }
            }
            FormulaExpr::Function { argument, .. } => argument.collect_variables(names),
            FormulaExpr::BinaryOp { left, right, .. } => {
                left.collect_variables(names);
                right.collect_variables(names);
            }
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// Map a source character to its operator
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '^' => Some(Operator::Power),
            _ => None,
        }
    }

    /// The character this operator is written with
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Built-in functions. Both take a single argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FunctionName {
    /// Natural logarithm, written `ln`
    Ln,
    /// Base-10 logarithm, written `log`
    Log,
}

impl FunctionName {
    /// Every reserved function name, longest first
    pub const ALL: [FunctionName; 2] = [FunctionName::Log, FunctionName::Ln];

    pub fn as_str(self) -> &'static str {
        match self {
            FunctionName::Ln => "ln",
            FunctionName::Log => "log",
        }
    }

    /// Match a function name at the start of `input`
    pub fn prefix_of(input: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|name| input.starts_with(name.as_str()))
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variables_in_order() {
        // (y + x) * ln(x)
        let expr = FormulaExpr::binary(
            Operator::Multiply,
            FormulaExpr::binary(
                Operator::Add,
                FormulaExpr::Variable('y'),
                FormulaExpr::Variable('x'),
            ),
            FormulaExpr::function(FunctionName::Ln, FormulaExpr::Variable('x')),
        );
        assert_eq!(expr.variables(), vec!['y', 'x']);
    }

    #[test]
    fn test_function_prefix() {
        assert_eq!(FunctionName::prefix_of("log(x)"), Some(FunctionName::Log));
        assert_eq!(FunctionName::prefix_of("ln(x)"), Some(FunctionName::Ln));
        assert_eq!(FunctionName::prefix_of("lx"), None);
        assert_eq!(FunctionName::prefix_of("l"), None);
    }

    #[test]
    fn test_operator_symbols() {
        for c in ['+', '-', '*', '/', '^'] {
            let op = Operator::from_char(c).unwrap();
            assert_eq!(op.symbol(), c);
        }
        assert_eq!(Operator::from_char('%'), None);
    }
}
