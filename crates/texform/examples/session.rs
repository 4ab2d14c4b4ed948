//! Example: Edit a formula and its variables the way an editor would

use texform::prelude::*;
use texform::format_outcome;

fn main() {
    let mut calc = Calculator::new();

    // Each keystroke replaces the formula text
    for text in ["x", "x^", "x^2", "x^2/", "x^2/(y+1)"] {
        calc.set_formula(text);
        println!("{:<12} ${}$  = {}", text, calc.latex(), format_outcome(calc.outcome()));
    }

    calc.set_variable('x', "3");
    calc.set_variable('y', "2");
    println!("x=3, y=2     = {}", format_outcome(calc.outcome()));

    calc.set_variable('y', "-1");
    println!("x=3, y=-1    = {}", format_outcome(calc.outcome()));
}
