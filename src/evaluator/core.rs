use logos::{Lexer, Logos, Span};
use tracing::trace;

use crate::{
    error::EvalError,
    evaluator::{
        lexer::{LexError, Token},
        operator::BinaryOperator,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// An entry of the operator stack, tagged with its byte offset in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Operator(BinaryOperator, usize),
    LParen(usize),
}

/// The two-stack shunting-yard engine.
///
/// An `Engine` is built for a single expression, consumes it in one left to
/// right pass, and is discarded afterwards. Nothing survives between calls,
/// so independent engines may run concurrently.
///
/// ## Usage
/// ```
/// use sciculate::evaluator::core::Engine;
///
/// assert_eq!(Engine::new("(3+4)*2").run().unwrap(), 14.0);
/// ```
pub struct Engine<'src> {
    source:    &'src str,
    /// Intermediate values, most recent last.
    operands:  Vec<f64>,
    /// Deferred operators and open parentheses, most recent last.
    operators: Vec<Pending>,
}

impl<'src> Engine<'src> {
    /// Creates an engine with empty stacks for `source`.
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self { source,
               operands: Vec::new(),
               operators: Vec::new() }
    }

    /// Evaluates the whole expression.
    ///
    /// Numbers are pushed as operands. Operators first reduce every pending
    /// operator of greater or equal precedence, then wait on the operator
    /// stack. A `)` reduces back to its `(`. Functions are applied to the
    /// literal that follows them and never enter the operator stack. Once the
    /// input is exhausted the remaining operators are drained and exactly one
    /// operand must be left.
    ///
    /// # Errors
    /// Fails on the first malformed token, unbalanced parenthesis, division
    /// by zero, domain error, or operator without two operands.
    pub fn run(self) -> EvalResult<f64> {
        let source = self.source;
        self.scan()
            .map_err(|e| e.map_position(|byte| source[..byte].chars().count()))
    }

    /// Runs the shunting-yard pass. Positions stay byte offsets until the
    /// error leaves the engine.
    fn scan(mut self) -> EvalResult<f64> {
        let mut lexer = Token::lexer(self.source);

        while let Some(token) = lexer.next() {
            let position = lexer.span().start;
            let token = token.map_err(|kind| self.lex_error(kind, lexer.span()))?;

            match token {
                Token::Number(value) => self.operands.push(value),
                Token::Operator(op) => self.push_operator(op, position)?,
                Token::LParen => self.operators.push(Pending::LParen(position)),
                Token::RParen => self.close_paren(position)?,
                Token::Function(function) => {
                    let argument = self.function_argument(&mut lexer)?;
                    let value = function.apply(argument, position)?;
                    trace!(%function, argument, value, "applied function");
                    self.operands.push(value);
                },
            }
        }

        self.finish()
    }

    /// Reduces pending operators that bind at least as tightly as `op`, then
    /// defers `op`.
    fn push_operator(&mut self, op: BinaryOperator, position: usize) -> EvalResult<()> {
        while let Some(&Pending::Operator(top, top_position)) = self.operators.last()
              && top.precedence() >= op.precedence()
        {
            self.operators.pop();
            self.reduce(top, top_position)?;
        }
        self.operators.push(Pending::Operator(op, position));
        Ok(())
    }

    /// Reduces back to the innermost `(` and discards it.
    fn close_paren(&mut self, position: usize) -> EvalResult<()> {
        loop {
            match self.operators.pop() {
                Some(Pending::LParen(_)) => return Ok(()),
                Some(Pending::Operator(op, op_position)) => self.reduce(op, op_position)?,
                None => return Err(EvalError::UnbalancedParentheses { position }),
            }
        }
    }

    /// Drains the operator stack and returns the single remaining operand.
    fn finish(mut self) -> EvalResult<f64> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator(op, position) => self.reduce(op, position)?,
                Pending::LParen(position) => {
                    return Err(EvalError::UnbalancedParentheses { position });
                },
            }
        }

        match self.operands.as_slice() {
            [value] => Ok(*value),
            _ => Err(EvalError::IncompleteExpression),
        }
    }

    /// Pops `b` then `a` and pushes `a <op> b`.
    fn reduce(&mut self, op: BinaryOperator, position: usize) -> EvalResult<()> {
        let (Some(right), Some(left)) = (self.operands.pop(), self.operands.pop()) else {
            return Err(EvalError::IncompleteExpression);
        };

        let value = op.apply(left, right, position)?;
        trace!(%op, left, right, value, "reduced");
        self.operands.push(value);
        Ok(())
    }

    /// Reads the literal a function applies to.
    ///
    /// The literal must be the very next token; anything else, including the
    /// end of input, counts as an empty number.
    fn function_argument(&self, lexer: &mut Lexer<'src, Token>) -> EvalResult<f64> {
        let Some(token) = lexer.next() else {
            return Err(EvalError::MalformedNumber { literal:  String::new(),
                                                    position: self.source.len(), });
        };

        let position = lexer.span().start;
        match token {
            Ok(Token::Number(value)) => Ok(value),
            Ok(_) => Err(EvalError::MalformedNumber { literal: String::new(),
                                                      position }),
            Err(kind) => Err(self.lex_error(kind, lexer.span())),
        }
    }

    /// Converts a lexer failure into a positioned evaluation error.
    fn lex_error(&self, kind: LexError, span: Span) -> EvalError {
        let position = span.start;
        match kind {
            LexError::MalformedNumber => {
                EvalError::MalformedNumber { literal: self.source.get(span).unwrap_or_default().to_string(),
                                             position }
            },
            LexError::InvalidCharacter => {
                EvalError::InvalidCharacter { character: self.source[span.start..].chars()
                                                                                   .next()
                                                                                   .unwrap_or_default(),
                                              position }
            },
        }
    }
}
