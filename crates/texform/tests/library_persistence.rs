//! Saved formula library round trips through the file system

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use texform::{FormulaLibrary, LibraryError};

#[test]
fn test_missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let library = FormulaLibrary::load(dir.path().join("absent.json")).unwrap();
    assert!(library.is_empty());
}

#[test]
fn test_store_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.json");

    let mut library = FormulaLibrary::new();
    library.save("x^2+y");
    library.save("ln(a)/log(b)");
    library.store(&path).unwrap();

    let loaded = FormulaLibrary::load(&path).unwrap();
    assert_eq!(loaded, library);
    let formulas: Vec<&str> = loaded.iter().collect();
    assert_eq!(formulas, vec!["x^2+y", "ln(a)/log(b)"]);
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = FormulaLibrary::load(&path).unwrap_err();
    assert!(matches!(err, LibraryError::Json(_)));
}
