use std::str::FromStr;

use tracing::debug;

use crate::{
    error::{EvalError, KeyError},
    evaluate,
    evaluator::{function::Function, operator::BinaryOperator},
    util::format::format_outcome,
};

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A decimal digit, `0` to `9`.
///
/// ## Example
/// ```
/// use sciculate::keypad::Digit;
///
/// assert_eq!(Digit::new(7).map(Digit::value), Some(7));
/// assert_eq!(Digit::new(12), None);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    /// Returns the digit, or `None` if `value` is greater than 9.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 { Some(Self(value)) } else { None }
    }

    /// Returns the numeric value of the digit.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    const fn label(self) -> &'static str {
        DIGIT_LABELS[self.0 as usize]
    }
}

/// A single button of the calculator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    /// `0` to `9`
    Digit(Digit),
    /// `.`
    Point,
    /// `+`, `-`, `*` or `/`
    Operator(BinaryOperator),
    /// `sin`, `cos`, `tan`, `log` or `√`
    Function(Function),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `=`
    Equals,
    /// `C`
    Clear,
}

impl Key {
    /// Returns the text printed on the button.
    ///
    /// For every key except `=` and `C`, this is also the text appended to
    /// the display when the key is pressed. The square root button shows `√`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Digit(digit) => digit.label(),
            Self::Point => ".",
            Self::Operator(op) => op.symbol(),
            Self::Function(Function::Sqrt) => "√",
            Self::Function(function) => function.name(),
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Equals => "=",
            Self::Clear => "C",
        }
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let key = match label {
            "." => Self::Point,
            "+" => Self::Operator(BinaryOperator::Add),
            "-" => Self::Operator(BinaryOperator::Sub),
            "*" => Self::Operator(BinaryOperator::Mul),
            "/" => Self::Operator(BinaryOperator::Div),
            "sin" => Self::Function(Function::Sin),
            "cos" => Self::Function(Function::Cos),
            "tan" => Self::Function(Function::Tan),
            "log" => Self::Function(Function::Log),
            "√" | "sqrt" => Self::Function(Function::Sqrt),
            "(" => Self::LeftParen,
            ")" => Self::RightParen,
            "=" => Self::Equals,
            "C" => Self::Clear,
            _ => {
                let digit = DIGIT_LABELS.iter().position(|&d| d == label);
                match digit.and_then(|d| u8::try_from(d).ok()).and_then(Digit::new) {
                    Some(digit) => Self::Digit(digit),
                    None => {
                        return Err(KeyError::UnknownLabel { label: label.to_string() });
                    },
                }
            },
        };
        Ok(key)
    }
}

/// The calculator display and the buttons that edit it.
///
/// Pressing a key appends its label to the display, `C` clears it, and `=`
/// evaluates the display and replaces it with the result, or with
/// [`ERROR_MARKER`](crate::util::format::ERROR_MARKER) when evaluation fails.
/// A result stays on the display, so further keys continue from it.
///
/// ## Example
/// ```
/// use sciculate::keypad::Keypad;
///
/// let mut keypad = Keypad::new();
/// for label in ["3", "+", "4", "*", "2", "="] {
///     keypad.press_label(label).unwrap();
/// }
/// assert_eq!(keypad.display(), "11.0");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keypad {
    display: String,
}

impl Keypad {
    /// Button labels in the order they are laid out, six rows of four.
    pub const LAYOUT: [[&'static str; 4]; 6] = [["7", "8", "9", "/"],
                                                ["4", "5", "6", "*"],
                                                ["1", "2", "3", "-"],
                                                ["0", ".", "=", "+"],
                                                ["sin", "cos", "tan", "log"],
                                                ["(", ")", "C", "√"]];

    /// Creates a keypad with an empty display.
    #[must_use]
    pub const fn new() -> Self {
        Self { display: String::new() }
    }

    /// Returns the current display text.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Presses a key.
    ///
    /// # Returns
    /// The outcome of the evaluation when `key` is `=`, `None` otherwise.
    pub fn press(&mut self, key: Key) -> Option<Result<f64, EvalError>> {
        match key {
            Key::Clear => {
                self.display.clear();
                None
            },
            Key::Equals => {
                let outcome = evaluate(&self.display);
                if let Err(e) = &outcome {
                    debug!(expression = %self.display, error = %e, "evaluation failed");
                }
                self.display = format_outcome(&outcome);
                Some(outcome)
            },
            key => {
                self.display.push_str(key.label());
                None
            },
        }
    }

    /// Parses `label` into a [`Key`] and presses it.
    ///
    /// # Errors
    /// Returns [`KeyError::UnknownLabel`] if no button carries `label`. The
    /// display is left untouched in that case.
    pub fn press_label(&mut self, label: &str) -> Result<Option<Result<f64, EvalError>>, KeyError> {
        let key = label.parse::<Key>()?;
        Ok(self.press(key))
    }

    /// Iterates over every key of the keypad in layout order.
    pub fn keys() -> impl Iterator<Item = Key> {
        Self::LAYOUT.into_iter()
                    .flatten()
                    .filter_map(|label| label.parse().ok())
    }
}
