//! The calculator engine - incremental expression building and evaluation
//!
//! The engine is a pure in-memory state machine. Keys arrive one at a time:
//! digits and the decimal point grow an in-progress number buffer, an
//! operator commits the buffer onto the expression, and evaluate folds the
//! whole expression down to a number. Invalid keys are silently ignored
//! rather than rejected; the only failure the engine ever signals is a
//! failed evaluation, and that failure wipes the engine clean.

use crate::display::format_number;
use crate::postfix::{eval_postfix, to_postfix};
use crate::token::{Op, Token};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Malformed expression: {0}")]
    Malformed(String),
}

/// The expression engine. One instance per calculator surface; instances
/// share nothing.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    /// The number currently being typed (possibly partial, like "3.")
    input: String,
    /// Tokens already committed to the expression
    tokens: Vec<Token>,
    /// Result of the last successful evaluation
    last_result: Option<f64>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a digit to the in-progress number. Anything outside '0'-'9'
    /// is ignored. A lone "0" buffer swallows further zeros and is
    /// replaced outright by a nonzero digit, so "00" and "05" cannot be
    /// typed.
    pub fn push_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        if self.input == "0" {
            if digit != '0' {
                self.input = digit.to_string();
            }
            return;
        }
        self.input.push(digit);
    }

    /// Append a decimal point. At most one per number: a buffer that
    /// already has one is left alone. An empty buffer becomes "0.".
    pub fn push_decimal(&mut self) {
        if self.input.contains('.') {
            return;
        }
        if self.input.is_empty() {
            self.input.push('0');
        }
        self.input.push('.');
    }

    /// Commit the pending number (if any) and record an operator. Pressing
    /// a second operator with no number in between replaces the first, so
    /// the user can change their mind. A leading operator is accepted as
    /// typed; it only fails later, at evaluation. Unknown symbols are
    /// ignored.
    pub fn set_operator(&mut self, symbol: char) {
        let Some(op) = Op::from_char(symbol) else {
            return;
        };
        if !self.input.is_empty() {
            self.tokens.push(Token::Number(std::mem::take(&mut self.input)));
        }
        if self.tokens.last().is_some_and(Token::is_operator) {
            self.tokens.pop();
        }
        self.tokens.push(Token::Operator(op));
    }

    /// Reset buffer, expression, and stored result unconditionally.
    pub fn clear(&mut self) {
        self.input.clear();
        self.tokens.clear();
        self.last_result = None;
    }

    /// Evaluate the committed expression plus any in-progress number.
    ///
    /// With nothing to evaluate this returns the stored result (or zero)
    /// and mutates nothing, so a repeated evaluate is a no-op. A failed
    /// evaluation (division by zero, or a malformed stream such as a
    /// leading operator) resets the engine entirely before the error is
    /// returned; no partial state survives. On success the result is
    /// stored for display and the expression is cleared, ready for a
    /// fresh entry.
    pub fn evaluate(&mut self) -> Result<f64, EvalError> {
        let mut tokens = self.tokens.clone();
        if !self.input.is_empty() {
            tokens.push(Token::Number(self.input.clone()));
        }
        if tokens.is_empty() {
            return Ok(self.last_result.unwrap_or(0.0));
        }

        match eval_postfix(&to_postfix(&tokens)) {
            Ok(result) => {
                self.input.clear();
                self.tokens.clear();
                self.last_result = Some(result);
                Ok(result)
            }
            Err(err) => {
                self.clear();
                Err(err)
            }
        }
    }

    /// The text a display should show: the number being typed takes
    /// priority, then the last result, then "0".
    pub fn display_value(&self) -> String {
        if !self.input.is_empty() {
            return self.input.clone();
        }
        match self.last_result {
            Some(n) => format_number(n),
            None => "0".to_string(),
        }
    }
}
