use thiserror::Error;

/// Errors raised by the keypad when it is driven by button labels.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The label does not name any button on the keypad.
    #[error("Unknown key '{label}'.")]
    UnknownLabel {
        /// The label that was pressed.
        label: String,
    },
}
