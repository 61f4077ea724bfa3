/// Evaluation errors.
///
/// Defines every way an expression can fail to produce a number: malformed
/// literals, characters outside the vocabulary, unbalanced parentheses,
/// division by zero, domain errors in the scientific functions, and
/// expressions whose operators and operands do not pair up.
pub mod eval_error;
/// Keypad errors.
///
/// Raised when the keypad is driven by a label that is not one of its
/// buttons.
pub mod key_error;

pub use eval_error::EvalError;
pub use key_error::KeyError;
