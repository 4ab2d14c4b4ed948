//! Result formatting for display

use crate::session::Outcome;

/// Format a computed value the way the result panel shows it
///
/// Values with magnitude in `[1e-6, 999999]` get six decimals; anything
/// smaller or larger uses scientific notation with six fractional digits.
///
/// ```rust
/// use texform::display::format_result;
///
/// assert_eq!(format_result(1.5), "1.500000");
/// assert_eq!(format_result(1234567.891), "1.234568e+6");
/// assert_eq!(format_result(0.0), "0.000000e+0");
/// ```
pub fn format_result(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude < 0.000001 || magnitude > 999999.0 {
        format_exponential(value)
    } else {
        format!("{:.6}", value)
    }
}

/// Scientific notation with an explicitly signed exponent (`e+6`, `e-7`)
fn format_exponential(value: f64) -> String {
    let text = format!("{:.6e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}

/// Text for the result panel: `-` when empty, the message for errors
pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Empty => "-".to_string(),
        Outcome::Value(v) => format_result(*v),
        Outcome::Error(e) => e.to_string(),
    }
}
