//! tapcalc - a keypad-driven arithmetic calculator engine
//!
//! # Overview
//!
//! tapcalc models a pocket calculator: input arrives one key at a time
//! (digits, a decimal point, the four binary operators, evaluate, clear)
//! and the engine incrementally builds an infix expression from them.
//! Evaluation converts the expression to postfix order with the
//! shunting-yard algorithm and folds it over a value stack, so `*` and `/`
//! bind before `+` and `-` and equal precedence resolves left to right.
//!
//! # Core Concepts
//!
//! ## Incremental entry
//!
//! ```text
//! # Digit keys grow the in-progress number
//! 1 2          # buffer: "12"
//!
//! # An operator commits the number and records itself
//! +            # expression: [12, +]
//!
//! # Pressing a second operator replaces the pending one
//! + *          # expression: [12, *]
//! ```
//!
//! ## Evaluation
//!
//! ```text
//! 2 + 3 * 4 =  # 14, not 20: multiplication binds first
//! 10 - 2 - 3 = # 5: left-associative
//! 5 / 0 =      # error; the engine resets itself entirely
//! ```
//!
//! # Example
//!
//! ```rust
//! use tapcalc::{lex, Keypad};
//!
//! let mut pad = Keypad::new();
//! let display = pad.press_all(lex("2+3*4="));
//! assert_eq!(display, "14");
//! ```

pub mod display;
pub mod engine;
pub mod keypad;
pub mod lexer;
pub mod postfix;
pub mod token;

// Re-export commonly used items
pub use display::format_number;
pub use engine::{Engine, EvalError};
pub use keypad::{Key, Keypad, ERROR_DISPLAY};
pub use lexer::lex;
pub use token::{Op, Token};

/// Convenience function to evaluate a line of calculator keys
pub fn eval(input: &str) -> Result<f64, EvalError> {
    let mut engine = Engine::new();
    for key in lex(input) {
        match key {
            Key::Digit(c) => engine.push_digit(c),
            Key::Decimal => engine.push_decimal(),
            Key::Operator(c) => engine.set_operator(c),
            Key::Clear => engine.clear(),
            Key::Evaluate => {
                engine.evaluate()?;
            }
        }
    }
    engine.evaluate()
}
