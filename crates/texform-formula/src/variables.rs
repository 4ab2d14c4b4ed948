//! Variable environment

use crate::lexer::tokenize;
use crate::token::Token;
use lazy_regex::regex_find;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Values for the single-letter variables of a formula
///
/// Looked up, never mutated, during evaluation. Names absent from the
/// environment evaluate to 0.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VariableEnvironment {
    values: BTreeMap<char, f64>,
}

impl VariableEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the environment for `formula`
    ///
    /// The keys are exactly the single-letter identifiers of the formula.
    /// Names already present in `previous` keep their value; new names start at 0.
    pub fn for_formula(formula: &str, previous: &VariableEnvironment) -> Self {
        variable_names(formula)
            .into_iter()
            .map(|name| (name, previous.values.get(&name).copied().unwrap_or(0.0)))
            .collect()
    }

    /// Value of `name`, 0 when unset
    pub fn get(&self, name: char) -> f64 {
        self.values.get(&name).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, name: char) -> bool {
        self.values.contains_key(&name)
    }

    pub fn set(&mut self, name: char, value: f64) {
        self.values.insert(name, value);
    }

    /// Set `name` from user-entered text; text that is not a number counts as 0
    pub fn set_text(&mut self, name: char, text: &str) {
        self.set(name, parse_value(text));
    }

    pub fn names(&self) -> impl Iterator<Item = char> + '_ {
        self.values.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.values.iter().map(|(name, value)| (*name, *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(char, f64)> for VariableEnvironment {
    fn from_iter<I: IntoIterator<Item = (char, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Distinct variable names of a formula, in order of first appearance
///
/// Works on the token stream, so it also succeeds for formulas that do not parse.
pub fn variable_names(formula: &str) -> Vec<char> {
    let mut names = Vec::new();
    for token in tokenize(formula) {
        if let Token::Identifier(name) = token {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

/// Parse a user-entered variable value
///
/// Leading numeric text is used when present (`"2.5kg"` is 2.5);
/// anything without a numeric prefix, or non-finite, is 0.
pub fn parse_value(text: &str) -> f64 {
    let text = text.trim();
    regex_find!(
        r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?",
        text
    )
    .and_then(|p| p.parse::<f64>().ok())
    .filter(|v| v.is_finite())
    .unwrap_or(0.0)
}
