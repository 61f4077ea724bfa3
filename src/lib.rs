//! # sciculate
//!
//! sciculate is the core of a scientific calculator written in Rust.
//! It evaluates flat infix expressions built from numbers, `+ - * /`,
//! parentheses and the functions `sin cos tan log √` with a two-stack
//! shunting-yard engine, and models the calculator keypad that feeds it.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{error::EvalError, evaluator::core::Engine};

/// Provides the error types for evaluation and keypad input.
///
/// Every failure carries the position where it was detected so it can be
/// logged or tested precisely, while user-facing output collapses all of
/// them into a single marker.
///
/// # Responsibilities
/// - Defines one variant per way an expression can fail.
/// - Implements `Display` and `std::error::Error` through `thiserror`.
pub mod error;
/// Evaluates expressions.
///
/// This module ties together the lexer, the operators, the scientific
/// functions and the two-stack engine that reduces them.
///
/// # Responsibilities
/// - Tokenizes the input and rejects characters outside the vocabulary.
/// - Reduces operators by precedence and parenthesis nesting.
/// - Applies functions to the literal that follows them.
pub mod evaluator;
/// Models the calculator keypad.
///
/// The keypad accumulates button labels into a display, clears it, and
/// evaluates it on `=`, replacing the text with the result or `Error`.
pub mod keypad;
/// General helpers shared by the keypad and the command line front end.
pub mod util;

/// Evaluates an expression and returns its value.
///
/// Whitespace between tokens is ignored. Functions take the numeric literal
/// written right after them and trigonometric functions work in degrees.
/// Every call starts from fresh stacks; the function is pure.
///
/// # Errors
/// Returns an [`EvalError`] describing the first problem found. No partial
/// result is ever returned.
///
/// # Examples
/// ```
/// use sciculate::{error::EvalError, evaluate};
///
/// assert_eq!(evaluate("3+4*2").unwrap(), 11.0);
/// assert_eq!(evaluate("(3+4)*2").unwrap(), 14.0);
/// assert_eq!(evaluate("sqrt9").unwrap(), 3.0);
///
/// assert_eq!(evaluate("5/0"), Err(EvalError::DivisionByZero { position: 1 }));
/// assert_eq!(evaluate("+"), Err(EvalError::IncompleteExpression));
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let result = Engine::new(expression).run();
    debug!(expression, ?result, "evaluated");
    result
}
