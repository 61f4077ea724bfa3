use logos::Logos;

use crate::evaluator::{function::Function, operator::BinaryOperator};

/// Reasons the lexer can refuse a slice of input.
///
/// The lexer only knows the offending slice; the engine turns these into
/// positioned [`EvalError`](crate::error::EvalError)s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    /// The slice is not part of the calculator vocabulary.
    #[default]
    InvalidCharacter,
    /// A run of digits and points that is not a valid number.
    MalformedNumber,
}

/// Represents a lexical token of a calculator expression.
///
/// Whitespace between tokens is skipped. Function keywords must be spelled
/// out in full; `√` is accepted as a one character spelling of `sqrt`.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// A maximal run of digits and decimal points, such as `42`, `3.5` or
    /// `.5`.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// `+`, `-`, `*` or `/`
    #[token("+", |_| BinaryOperator::Add)]
    #[token("-", |_| BinaryOperator::Sub)]
    #[token("*", |_| BinaryOperator::Mul)]
    #[token("/", |_| BinaryOperator::Div)]
    Operator(BinaryOperator),
    /// `sin`, `cos`, `tan`, `log`, `sqrt` or `√`
    #[token("sin", |_| Function::Sin)]
    #[token("cos", |_| Function::Cos)]
    #[token("tan", |_| Function::Tan)]
    #[token("log", |_| Function::Log)]
    #[token("sqrt", |_| Function::Sqrt)]
    #[token("√", |_| Function::Sqrt)]
    Function(Function),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Parses a run of digits and points from the current token slice.
///
/// # Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(LexError::MalformedNumber)`: If the run holds more than one
///   decimal point, is a lone `.`, or is too large to be finite.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    let slice = lex.slice();
    if slice.matches('.').count() > 1 {
        return Err(LexError::MalformedNumber);
    }

    match slice.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LexError::MalformedNumber),
    }
}
