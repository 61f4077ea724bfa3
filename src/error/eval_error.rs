use thiserror::Error;

use crate::evaluator::function::Function;

/// Represents all errors that can occur while evaluating an expression.
///
/// Positions are character offsets into the evaluated expression, counted
/// from zero.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A numeric run held more than one decimal point, could not be parsed,
    /// or was missing where a function expected its argument.
    #[error("{} at position {position}.", describe_number(.literal))]
    MalformedNumber {
        /// The offending run of digits and points. Empty when no number was
        /// found at all.
        literal:  String,
        /// Where the run starts.
        position: usize,
    },
    /// A `)` without a matching `(`, or a `(` that was never closed.
    #[error("Unbalanced parentheses at position {position}.")]
    UnbalancedParentheses {
        /// Position of the unmatched parenthesis.
        position: usize,
    },
    /// The divisor of a `/` evaluated to exactly zero.
    #[error("Division by zero at position {position}.")]
    DivisionByZero {
        /// Position of the `/` operator.
        position: usize,
    },
    /// A character outside the calculator vocabulary.
    #[error("Invalid character '{character}' at position {position}.")]
    InvalidCharacter {
        /// The rejected character.
        character: char,
        /// Where it appeared.
        position:  usize,
    },
    /// Operators and operands did not pair up into exactly one result.
    #[error("Incomplete expression.")]
    IncompleteExpression,
    /// A function was applied outside of its domain, e.g. `log0`.
    #[error("{function} is undefined for {argument} (position {position}).")]
    DomainError {
        /// The function that rejected its argument.
        function: Function,
        /// The rejected argument.
        argument: f64,
        /// Position of the function keyword.
        position: usize,
    },
    /// An intermediate value overflowed to infinity or became NaN.
    #[error("Result is not a finite number (position {position}).")]
    NonFiniteResult {
        /// Position of the operator or function that produced the value.
        position: usize,
    },
}

impl EvalError {
    /// Rewrites the position carried by the error, if any.
    #[must_use]
    pub(crate) fn map_position(self, f: impl FnOnce(usize) -> usize) -> Self {
        match self {
            Self::MalformedNumber { literal, position } => {
                Self::MalformedNumber { literal,
                                        position: f(position) }
            },
            Self::UnbalancedParentheses { position } => {
                Self::UnbalancedParentheses { position: f(position) }
            },
            Self::DivisionByZero { position } => Self::DivisionByZero { position: f(position) },
            Self::InvalidCharacter { character, position } => {
                Self::InvalidCharacter { character,
                                         position: f(position) }
            },
            Self::IncompleteExpression => Self::IncompleteExpression,
            Self::DomainError { function,
                                argument,
                                position, } => Self::DomainError { function,
                                                                   argument,
                                                                   position: f(position) },
            Self::NonFiniteResult { position } => Self::NonFiniteResult { position: f(position) },
        }
    }
}

fn describe_number(literal: &str) -> String {
    if literal.is_empty() {
        "Expected a number".to_string()
    } else {
        format!("Malformed number '{literal}'")
    }
}
