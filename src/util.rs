/// Display formatting for results.
///
/// Renders evaluated values the way the calculator display shows them, and
/// holds the marker shown in place of any failed evaluation.
pub mod format;
