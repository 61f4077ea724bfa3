/// Text shown on the display when an evaluation fails, whatever the reason.
pub const ERROR_MARKER: &str = "Error";

/// Largest magnitude below which integral values are printed with a single
/// trailing decimal instead of their shortest representation.
const MAX_PLAIN_INTEGRAL: f64 = 1e15;

/// Formats a value for the calculator display.
///
/// Integral values below 1e15 keep one decimal place so a result reads as a
/// decimal number. Everything else uses the shortest representation that
/// round-trips, written out in positional notation without an exponent.
///
/// ## Example
/// ```
/// use sciculate::util::format::format_value;
///
/// assert_eq!(format_value(11.0), "11.0");
/// assert_eq!(format_value(0.25), "0.25");
/// assert_eq!(format_value(-3.0), "-3.0");
/// assert_eq!(format_value(1e15), "1000000000000000");
/// assert_eq!(format_value(1e-7), "0.0000001");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < MAX_PLAIN_INTEGRAL {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Formats the outcome of an evaluation, collapsing every error into
/// [`ERROR_MARKER`].
///
/// ## Example
/// ```
/// use sciculate::{error::EvalError, util::format::format_outcome};
///
/// assert_eq!(format_outcome::<EvalError>(&Ok(2.5)), "2.5");
/// assert_eq!(format_outcome(&Err(EvalError::IncompleteExpression)), "Error");
/// ```
#[must_use]
pub fn format_outcome<E>(outcome: &Result<f64, E>) -> String {
    match outcome {
        Ok(value) => format_value(*value),
        Err(_) => ERROR_MARKER.to_string(),
    }
}
