//! Common test utilities for tapcalc integration tests

pub use tapcalc::{lex, EvalError, Keypad};

/// Press a line of keys on a fresh keypad and return the final display
pub fn press(input: &str) -> String {
    let mut pad = Keypad::new();
    pad.press_all(lex(input))
}

/// Evaluate a line of keys to a number
#[allow(dead_code)]
pub fn eval(input: &str) -> Result<f64, EvalError> {
    tapcalc::eval(input)
}
