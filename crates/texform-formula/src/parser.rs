//! Formula parser
//!
//! A recursive descent parser over the token stream with proper operator precedence.

use crate::ast::{FormulaExpr, Operator};
use crate::error::ParseError;
use crate::lexer::tokenize;
use crate::token::Token;
use lazy_regex::regex_is_match;

/// Parse a token sequence into an AST
///
/// Every token must be consumed; anything left after a complete
/// expression is reported as [`ParseError::TrailingInput`].
///
/// # Example
/// ```rust
/// use texform_formula::{parse, tokenize};
///
/// let ast = parse(&tokenize("2+3*4")).unwrap();
/// let ast = parse(&tokenize("ln(x)^2")).unwrap();
/// assert!(parse(&tokenize("ln(x")).is_err());
/// ```
pub fn parse(tokens: &[Token]) -> Result<FormulaExpr, ParseError> {
    let mut parser = FormulaParser::new(tokens);
    let Parsed { expr, height } = parser.parse_expression()?;

    // Make sure we consumed all input
    if let Some(token) = parser.current_token() {
        return Err(ParseError::TrailingInput(token.to_string()));
    }

    log::trace!("parsed {} tokens into a tree of height {}", tokens.len(), height);
    Ok(expr)
}

/// Tokenize and parse a formula string
pub fn parse_formula(formula: &str) -> Result<FormulaExpr, ParseError> {
    parse(&tokenize(formula))
}

/// Deepest nesting the parser accepts
///
/// Bounds both parser recursion (parentheses, function calls, `^` chains)
/// and the height of the resulting tree, which the evaluator, the renderer
/// and `Drop` walk recursively.
pub const MAX_DEPTH: usize = 256;

/// A parsed subtree together with its height
struct Parsed {
    expr: FormulaExpr,
    height: usize,
}

impl Parsed {
    fn leaf(expr: FormulaExpr) -> Self {
        Self { expr, height: 1 }
    }
}

/// Formula parser
struct FormulaParser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> FormulaParser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    // === Helper methods ===

    fn current_token(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn consume(&mut self) {
        self.pos += 1;
    }

    /// Consume the current token if it is the given operator
    fn eat_operator(&mut self, allowed: &[Operator]) -> Option<Operator> {
        match self.current_token() {
            Some(Token::Operator(op)) if allowed.contains(op) => {
                let op = *op;
                self.consume();
                Some(op)
            }
            _ => None,
        }
    }

    /// Consume a `)` or fail with `err`
    fn expect_close(&mut self, err: ParseError) -> Result<(), ParseError> {
        if matches!(self.current_token(), Some(Token::RightParen)) {
            self.consume();
            Ok(())
        } else {
            Err(err)
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ParseError::TooDeep);
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn binary(op: Operator, left: Parsed, right: Parsed) -> Result<Parsed, ParseError> {
        let height = 1 + left.height.max(right.height);
        if height > MAX_DEPTH {
            return Err(ParseError::TooDeep);
        }
        Ok(Parsed {
            expr: FormulaExpr::binary(op, left.expr, right.expr),
            height,
        })
    }

    // === Expression parsing with precedence ===
    // Precedence (lowest to highest):
    // 1. Addition/Subtraction: +, -
    // 2. Multiplication/Division: *, /
    // 3. Exponentiation: ^ (right associative)
    // 4. Primary: numbers, variables, function calls, parentheses

    fn parse_expression(&mut self) -> Result<Parsed, ParseError> {
        self.parse_additive()
    }

    fn parse_additive(&mut self) -> Result<Parsed, ParseError> {
        let mut left = self.parse_multiplicative()?;

        while let Some(op) = self.eat_operator(&[Operator::Add, Operator::Subtract]) {
            let right = self.parse_multiplicative()?;
            left = Self::binary(op, left, right)?;
        }

        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Parsed, ParseError> {
        let mut left = self.parse_exponent()?;

        while let Some(op) = self.eat_operator(&[Operator::Multiply, Operator::Divide]) {
            let right = self.parse_exponent()?;
            left = Self::binary(op, left, right)?;
        }

        Ok(left)
    }

    fn parse_exponent(&mut self) -> Result<Parsed, ParseError> {
        let left = self.parse_primary()?;

        if self.eat_operator(&[Operator::Power]).is_some() {
            self.enter()?;
            let right = self.parse_exponent()?; // Right associative
            self.leave();
            return Self::binary(Operator::Power, left, right);
        }

        Ok(left)
    }

    fn parse_primary(&mut self) -> Result<Parsed, ParseError> {
        let token = self.current_token().ok_or(ParseError::UnexpectedEnd)?;

        match token {
            Token::LeftParen => {
                self.consume();
                self.enter()?;
                let inner = self.parse_expression()?;
                self.leave();
                self.expect_close(ParseError::MissingCloseParen)?;
                Ok(inner)
            }

            Token::Function(name) => {
                self.consume();
                if !matches!(self.current_token(), Some(Token::LeftParen)) {
                    return Err(ParseError::MissingOpenParen(*name));
                }
                self.consume();
                self.enter()?;
                let argument = self.parse_expression()?;
                self.leave();
                self.expect_close(ParseError::MissingFunctionCloseParen(*name))?;

                let height = argument.height + 1;
                if height > MAX_DEPTH {
                    return Err(ParseError::TooDeep);
                }
                Ok(Parsed {
                    expr: FormulaExpr::function(*name, argument.expr),
                    height,
                })
            }

            Token::Number(text) => {
                let value = parse_number(text)?;
                self.consume();
                Ok(Parsed::leaf(FormulaExpr::Number(value)))
            }

            Token::Identifier(name) => {
                self.consume();
                Ok(Parsed::leaf(FormulaExpr::Variable(*name)))
            }

            Token::Operator(_) | Token::RightParen => {
                Err(ParseError::UnexpectedToken(token.to_string()))
            }
        }
    }
}

/// Validate and convert a numeral such as `42`, `3.14`, `5.` or `.5`
fn parse_number(text: &str) -> Result<f64, ParseError> {
    if !regex_is_match!(r"^(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$", text) {
        return Err(ParseError::InvalidToken(text.to_string()));
    }
    let value: f64 = text
        .parse()
        .map_err(|_| ParseError::InvalidToken(text.to_string()))?;
    // Digit runs long enough to overflow parse as infinity
    if !value.is_finite() {
        return Err(ParseError::NumberTooLarge(text.to_string()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::FunctionName;
    use pretty_assertions::assert_eq;

    fn var(c: char) -> FormulaExpr {
        FormulaExpr::Variable(c)
    }

    fn num(n: f64) -> FormulaExpr {
        FormulaExpr::Number(n)
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_formula("42").unwrap(), num(42.0));
        assert_eq!(parse_formula("3.14").unwrap(), num(3.14));
        assert_eq!(parse_formula(".5").unwrap(), num(0.5));
        assert_eq!(parse_formula("5.").unwrap(), num(5.0));
    }

    #[test]
    fn test_parse_invalid_numbers() {
        for text in ["1.2.3", "2x", "inf", "NaN", "1e5", "3$", "."] {
            assert_eq!(
                parse_formula(text),
                Err(ParseError::InvalidToken(text.to_string())),
                "{text}"
            );
        }
    }

    #[test]
    fn test_parse_multi_letter_identifier_is_rejected() {
        assert_eq!(
            parse_formula("xy+1"),
            Err(ParseError::InvalidToken("xy".into()))
        );
    }

    #[test]
    fn test_parse_precedence() {
        // 1+(2*3)
        assert_eq!(
            parse_formula("1+2*3").unwrap(),
            FormulaExpr::binary(
                Operator::Add,
                num(1.0),
                FormulaExpr::binary(Operator::Multiply, num(2.0), num(3.0))
            )
        );
        // (a*b)^c binds before *: a*(b^c)
        assert_eq!(
            parse_formula("a*b^c").unwrap(),
            FormulaExpr::binary(
                Operator::Multiply,
                var('a'),
                FormulaExpr::binary(Operator::Power, var('b'), var('c'))
            )
        );
    }

    #[test]
    fn test_parse_left_associative() {
        assert_eq!(
            parse_formula("a-b-c").unwrap(),
            FormulaExpr::binary(
                Operator::Subtract,
                FormulaExpr::binary(Operator::Subtract, var('a'), var('b')),
                var('c')
            )
        );
        assert_eq!(
            parse_formula("a/b*c").unwrap(),
            FormulaExpr::binary(
                Operator::Multiply,
                FormulaExpr::binary(Operator::Divide, var('a'), var('b')),
                var('c')
            )
        );
    }

    #[test]
    fn test_parse_power_right_associative() {
        assert_eq!(
            parse_formula("2^3^2").unwrap(),
            FormulaExpr::binary(
                Operator::Power,
                num(2.0),
                FormulaExpr::binary(Operator::Power, num(3.0), num(2.0))
            )
        );
    }

    #[test]
    fn test_parse_parentheses() {
        assert_eq!(
            parse_formula("(1+2)*3").unwrap(),
            FormulaExpr::binary(
                Operator::Multiply,
                FormulaExpr::binary(Operator::Add, num(1.0), num(2.0)),
                num(3.0)
            )
        );
        assert_eq!(parse_formula("((x))").unwrap(), var('x'));
    }

    #[test]
    fn test_parse_function() {
        assert_eq!(
            parse_formula("log(x+1)").unwrap(),
            FormulaExpr::function(
                FunctionName::Log,
                FormulaExpr::binary(Operator::Add, var('x'), num(1.0))
            )
        );
        assert_eq!(
            parse_formula("ln(ln(e))").unwrap(),
            FormulaExpr::function(
                FunctionName::Ln,
                FormulaExpr::function(FunctionName::Ln, var('e'))
            )
        );
    }

    #[test]
    fn test_parse_function_errors() {
        assert_eq!(
            parse_formula("ln x"),
            Err(ParseError::MissingOpenParen(FunctionName::Ln))
        );
        assert_eq!(
            parse_formula("ln(x"),
            Err(ParseError::MissingFunctionCloseParen(FunctionName::Ln))
        );
        assert_eq!(
            parse_formula("log"),
            Err(ParseError::MissingOpenParen(FunctionName::Log))
        );
    }

    #[test]
    fn test_parse_paren_errors() {
        assert_eq!(parse_formula("(1+2"), Err(ParseError::MissingCloseParen));
        assert_eq!(parse_formula("()"), Err(ParseError::UnexpectedToken(")".into())));
    }

    #[test]
    fn test_parse_missing_operand() {
        assert_eq!(parse_formula(""), Err(ParseError::UnexpectedEnd));
        assert_eq!(parse_formula("1+"), Err(ParseError::UnexpectedEnd));
        assert_eq!(parse_formula("*2"), Err(ParseError::UnexpectedToken("*".into())));
        // No unary minus
        assert_eq!(parse_formula("-x"), Err(ParseError::UnexpectedToken("-".into())));
    }

    #[test]
    fn test_parse_trailing_tokens() {
        assert_eq!(
            parse_formula("2+3)"),
            Err(ParseError::TrailingInput(")".into()))
        );
        assert_eq!(
            parse_formula("2 3"),
            Err(ParseError::TrailingInput("3".into()))
        );
        assert_eq!(
            parse_formula("x(1)"),
            Err(ParseError::TrailingInput("(".into()))
        );
    }

    #[test]
    fn test_parse_overlong_numeral() {
        let digits = "1".repeat(400);
        assert_eq!(
            parse_formula(&digits),
            Err(ParseError::NumberTooLarge(digits.clone()))
        );
        assert_eq!(
            parse_formula(&format!("2*{}", digits)),
            Err(ParseError::NumberTooLarge(digits))
        );
        // Long but representable
        assert!(parse_formula(&"9".repeat(300)).is_ok());
    }

    #[test]
    fn test_parse_deep_parentheses() {
        let deep = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
        assert_eq!(parse_formula(&deep), Err(ParseError::TooDeep));

        // Unbalanced input fails the same way before running out of stack
        assert_eq!(parse_formula(&"(".repeat(10_000)), Err(ParseError::TooDeep));

        let fine = format!("{}x{}", "(".repeat(100), ")".repeat(100));
        assert_eq!(parse_formula(&fine).unwrap(), var('x'));
    }

    #[test]
    fn test_parse_deep_functions() {
        let deep = format!("{}x{}", "ln(".repeat(10_000), ")".repeat(10_000));
        assert_eq!(parse_formula(&deep), Err(ParseError::TooDeep));

        let fine = format!("{}x{}", "ln(".repeat(100), ")".repeat(100));
        assert!(parse_formula(&fine).is_ok());
    }

    #[test]
    fn test_parse_long_power_chain() {
        let chain = vec!["2"; 10_000].join("^");
        assert_eq!(parse_formula(&chain), Err(ParseError::TooDeep));

        let short = vec!["2"; 50].join("^");
        assert!(parse_formula(&short).is_ok());
    }

    #[test]
    fn test_parse_long_left_chain() {
        // Loops in the parser, but the tree would still be 10 000 levels tall
        let sum = vec!["1"; 10_000].join("+");
        assert_eq!(parse_formula(&sum), Err(ParseError::TooDeep));
        let product = vec!["x"; 10_000].join("*");
        assert_eq!(parse_formula(&product), Err(ParseError::TooDeep));

        let ok = vec!["1"; MAX_DEPTH].join("+");
        assert!(parse_formula(&ok).is_ok());
    }
}
