use std::fmt;

use crate::{error::EvalError, evaluator::core::EvalResult};

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Returns the binding strength of the operator.
    ///
    /// `*` and `/` bind tighter than `+` and `-`. Operators of equal
    /// precedence are reduced left to right.
    #[must_use]
    pub const fn precedence(self) -> i8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Returns the symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Computes `left <op> right`.
    ///
    /// Division by an exact zero is rejected instead of producing an
    /// infinity, and any other non-finite outcome is reported as well.
    ///
    /// # Parameters
    /// - `left`: The operand that was pushed first.
    /// - `right`: The operand that was pushed last.
    /// - `position`: Position of the operator, for error reporting.
    ///
    /// # Example
    /// ```
    /// use sciculate::{error::EvalError, evaluator::operator::BinaryOperator};
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(10.0, 4.0, 2).unwrap(), 6.0);
    /// assert_eq!(BinaryOperator::Div.apply(1.0, 0.0, 1),
    ///            Err(EvalError::DivisionByZero { position: 1 }));
    /// ```
    pub fn apply(self, left: f64, right: f64, position: usize) -> EvalResult<f64> {
        let value = match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero { position });
                }
                left / right
            },
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NonFiniteResult { position })
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
