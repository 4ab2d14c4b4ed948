//! Saved formula library
//!
//! An ordered list of distinct formula strings, persisted as a JSON array.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading or storing a library
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid library file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Saved formulas, in the order they were saved
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormulaLibrary {
    formulas: Vec<String>,
}

impl FormulaLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a library file; a missing file is an empty library
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LibraryError> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no library at {}, starting empty", path.display());
                return Ok(Self::new());
            }
            Err(e) => return Err(e.into()),
        };
        let library: Self = serde_json::from_str(&text)?;
        log::debug!("loaded {} formulas from {}", library.len(), path.display());
        Ok(library)
    }

    /// Write the library as a JSON array of strings
    pub fn store(&self, path: impl AsRef<Path>) -> Result<(), LibraryError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Add a formula; blank or already saved formulas are ignored
    ///
    /// Returns whether the formula was added.
    pub fn save(&mut self, formula: &str) -> bool {
        if formula.trim().is_empty() || self.contains(formula) {
            return false;
        }
        self.formulas.push(formula.to_string());
        true
    }

    /// Remove a formula; returns whether it was present
    pub fn remove(&mut self, formula: &str) -> bool {
        let before = self.formulas.len();
        self.formulas.retain(|f| f != formula);
        self.formulas.len() != before
    }

    pub fn contains(&self, formula: &str) -> bool {
        self.formulas.iter().any(|f| f == formula)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.formulas.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }
}
