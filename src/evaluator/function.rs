use std::fmt;

use crate::{error::EvalError, evaluator::core::EvalResult};

/// The unary scientific functions of the calculator.
///
/// A function always applies to the numeric literal written directly after
/// it, so `sin30+1` is `sin(30) + 1` and never `sin(31)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Function {
    /// Sine of an angle in degrees.
    Sin,
    /// Cosine of an angle in degrees.
    Cos,
    /// Tangent of an angle in degrees.
    Tan,
    /// Base 10 logarithm.
    Log,
    /// Non-negative square root.
    Sqrt,
}

impl Function {
    /// Returns the keyword that names the function.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
        }
    }

    /// Applies the function to its argument.
    ///
    /// The trigonometric functions interpret the argument as degrees. `log`
    /// rejects non-positive arguments and `sqrt` rejects negative ones with
    /// [`EvalError::DomainError`].
    ///
    /// # Parameters
    /// - `argument`: The literal following the function keyword.
    /// - `position`: Position of the keyword, for error reporting.
    ///
    /// # Example
    /// ```
    /// use sciculate::evaluator::function::Function;
    ///
    /// assert_eq!(Function::Sqrt.apply(9.0, 0).unwrap(), 3.0);
    /// assert_eq!(Function::Log.apply(1000.0, 0).unwrap(), 3.0);
    /// assert!(Function::Log.apply(0.0, 0).is_err());
    /// ```
    pub fn apply(self, argument: f64, position: usize) -> EvalResult<f64> {
        // tan of an odd multiple of 90 is large but finite, since the radian
        // conversion never lands exactly on a pole.
        let value = match self {
            Self::Sin => argument.to_radians().sin(),
            Self::Cos => argument.to_radians().cos(),
            Self::Tan => argument.to_radians().tan(),
            Self::Log => {
                if argument <= 0.0 {
                    return Err(self.domain_error(argument, position));
                }
                argument.log10()
            },
            Self::Sqrt => {
                if argument < 0.0 {
                    return Err(self.domain_error(argument, position));
                }
                argument.sqrt()
            },
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NonFiniteResult { position })
        }
    }

    const fn domain_error(self, argument: f64, position: usize) -> EvalError {
        EvalError::DomainError { function: self,
                                 argument,
                                 position }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
