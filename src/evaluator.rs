/// The two-stack engine that evaluates expressions.
///
/// Holds the operand and operator stacks for a single evaluation, performs
/// reductions according to precedence and parenthesis nesting, and applies
/// scientific functions to the literals that follow them.
///
/// # Responsibilities
/// - Drives the lexer over the input in a single left to right pass.
/// - Reduces operators in precedence order, preserving operand order.
/// - Reports unbalanced parentheses and incomplete expressions.
pub mod core;
/// The scientific functions `sin`, `cos`, `tan`, `log` and `sqrt`.
///
/// Trigonometric functions take degrees; `log` is base 10.
pub mod function;
/// The lexer module tokenizes calculator input.
///
/// The lexer reads the raw expression and produces numbers, operators,
/// function keywords and parentheses. Whitespace is skipped. Anything outside
/// this vocabulary is reported as a lexical error.
pub mod lexer;
/// The binary operators `+`, `-`, `*` and `/`, their precedence and their
/// arithmetic.
pub mod operator;
