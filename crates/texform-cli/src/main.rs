//! texform CLI - formula calculator with LaTeX output

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use texform::prelude::*;
use texform::{evaluate_with_limits, format_result, render_formula, EvaluationLimits};

#[derive(Parser)]
#[command(name = "texform")]
#[command(author, version, about = "Evaluate formulas and render them as LaTeX")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a formula
    #[command(alias = "calc")]
    Eval {
        /// Formula text, e.g. "x^2+ln(y)"
        formula: String,

        /// Variable assignment NAME=VALUE (repeatable; unset variables are 0)
        #[arg(short, long = "var", value_parser = parse_assignment)]
        vars: Vec<(char, f64)>,

        /// Largest exponent accepted by ^
        #[arg(long, default_value = "1000")]
        max_exponent: f64,

        /// Largest magnitude any intermediate value may reach
        #[arg(long, default_value = "1e308")]
        max_magnitude: f64,

        /// Print the full-precision value instead of the display format
        #[arg(short, long)]
        raw: bool,
    },

    /// Render a formula as LaTeX
    Latex {
        /// Formula text
        formula: String,

        /// Wrap the markup in $...$
        #[arg(short, long)]
        delimit: bool,
    },

    /// Print the tokens of a formula, one per line
    Tokens {
        /// Formula text
        formula: String,
    },

    /// List the variables a formula uses
    Vars {
        /// Formula text
        formula: String,
    },

    /// Manage the saved formula library
    Saved {
        /// Library file
        #[arg(short, long, default_value = "saved_formulas.json")]
        library: PathBuf,

        #[command(subcommand)]
        action: SavedCommands,
    },
}

#[derive(Subcommand)]
enum SavedCommands {
    /// List saved formulas
    List,
    /// Save a formula
    Add { formula: String },
    /// Delete a saved formula
    Remove { formula: String },
    /// Show saved formulas with their LaTeX rendering
    Show,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Eval {
            formula,
            vars,
            max_exponent,
            max_magnitude,
            raw,
        } => {
            let limits = EvaluationLimits {
                max_exponent,
                max_magnitude,
                ..Default::default()
            };
            eval_formula(&formula, &vars, &limits, raw)
        }
        Commands::Latex { formula, delimit } => show_latex(&formula, delimit),
        Commands::Tokens { formula } => show_tokens(&formula),
        Commands::Vars { formula } => show_vars(&formula),
        Commands::Saved { library, action } => saved(&library, action),
    }
}

/// Parse a `NAME=VALUE` assignment
fn parse_assignment(text: &str) -> std::result::Result<(char, f64), String> {
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", text))?;

    let mut chars = name.trim().chars();
    let name = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => c,
        _ => return Err(format!("variable names are single letters, got '{}'", name)),
    };

    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid number '{}' for {}", value, name))?;
    Ok((name, value))
}

fn eval_formula(
    formula: &str,
    assignments: &[(char, f64)],
    limits: &EvaluationLimits,
    raw: bool,
) -> Result<()> {
    let ast = parse_formula(formula).context("Failed to parse formula")?;

    let mut env = VariableEnvironment::for_formula(formula, &VariableEnvironment::new());
    for &(name, value) in assignments {
        if !env.contains(name) {
            log::warn!("variable '{}' does not appear in the formula", name);
        }
        env.set(name, value);
    }

    let value = evaluate_with_limits(&ast, &env, limits).context("Failed to evaluate formula")?;

    if raw {
        println!("{}", value);
    } else {
        println!("{}", format_result(value));
    }
    Ok(())
}

fn show_latex(formula: &str, delimit: bool) -> Result<()> {
    let ast = parse_formula(formula).context("Failed to parse formula")?;
    let markup = render(&ast);
    if delimit {
        println!("${}$", markup);
    } else {
        println!("{}", markup);
    }
    Ok(())
}

fn show_tokens(formula: &str) -> Result<()> {
    for token in tokenize(formula) {
        println!("{:?}", token);
    }
    Ok(())
}

fn show_vars(formula: &str) -> Result<()> {
    for name in texform::variable_names(formula) {
        println!("{}", name);
    }
    Ok(())
}

fn saved(path: &Path, action: SavedCommands) -> Result<()> {
    let mut library = FormulaLibrary::load(path)
        .with_context(|| format!("Failed to load '{}'", path.display()))?;

    match action {
        SavedCommands::List => {
            for formula in library.iter() {
                println!("{}", formula);
            }
        }
        SavedCommands::Show => {
            if library.is_empty() {
                eprintln!("No saved formulas");
            }
            for (i, formula) in library.iter().enumerate() {
                println!("{}\t{}\t${}$", i, formula, render_formula(formula));
            }
        }
        SavedCommands::Add { formula } => {
            if formula.trim().is_empty() {
                bail!("Refusing to save an empty formula");
            }
            if !library.save(&formula) {
                eprintln!("Already saved: {}", formula);
                return Ok(());
            }
            library
                .store(path)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            eprintln!("Saved {} formulas to '{}'", library.len(), path.display());
        }
        SavedCommands::Remove { formula } => {
            if !library.remove(&formula) {
                bail!("Formula not found: {}", formula);
            }
            library
                .store(path)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(parse_assignment("x=3"), Ok(('x', 3.0)));
        assert_eq!(parse_assignment(" y = -2.5 "), Ok(('y', -2.5)));
        assert!(parse_assignment("x").is_err());
        assert!(parse_assignment("xy=1").is_err());
        assert!(parse_assignment("x=abc").is_err());
        assert!(parse_assignment("1=2").is_err());
    }

    #[test]
    fn test_eval_args() {
        let cli = Cli::try_parse_from(["texform", "eval", "x+y", "-v", "x=1", "--var", "y=2"])
            .unwrap();
        match cli.command {
            Commands::Eval { formula, vars, .. } => {
                assert_eq!(formula, "x+y");
                assert_eq!(vars, vec![('x', 1.0), ('y', 2.0)]);
            }
            _ => panic!("Expected Eval"),
        }
    }
}
