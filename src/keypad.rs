//! Keypad adapter between input events and the engine
//!
//! A `Keypad` owns one `Engine` and presses keys against it, handing back
//! the text the display should show after every key. One event, one engine
//! call, one display refresh. A failed evaluation shows the literal
//! `"Error"` instead of the engine's display value; the engine has already
//! wiped itself by then, so the next key starts from scratch.

use crate::engine::Engine;

/// A single key event, as a physical keypad or a key lexer produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A digit key; the engine ignores anything outside '0'-'9'
    Digit(char),
    /// The decimal point key
    Decimal,
    /// An operator key; the engine ignores unknown symbols
    Operator(char),
    /// The '=' / Enter key
    Evaluate,
    /// The clear key
    Clear,
}

/// The text shown after a failed evaluation.
pub const ERROR_DISPLAY: &str = "Error";

#[derive(Debug, Default)]
pub struct Keypad {
    engine: Engine,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Press one key and return the refreshed display text.
    pub fn press(&mut self, key: Key) -> String {
        match key {
            Key::Digit(c) => self.engine.push_digit(c),
            Key::Decimal => self.engine.push_decimal(),
            Key::Operator(c) => self.engine.set_operator(c),
            Key::Clear => self.engine.clear(),
            Key::Evaluate => {
                if self.engine.evaluate().is_err() {
                    return ERROR_DISPLAY.to_string();
                }
            }
        }
        self.engine.display_value()
    }

    /// Press a sequence of keys, returning the display after the last one.
    pub fn press_all(&mut self, keys: impl IntoIterator<Item = Key>) -> String {
        let mut display = self.engine.display_value();
        for key in keys {
            display = self.press(key);
        }
        display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    #[test]
    fn press_updates_display_per_key() {
        let mut pad = Keypad::new();
        assert_eq!(pad.press(Key::Digit('4')), "4");
        assert_eq!(pad.press(Key::Operator('+')), "0");
        assert_eq!(pad.press(Key::Digit('2')), "2");
        assert_eq!(pad.press(Key::Evaluate), "6");
    }

    #[test]
    fn error_display_on_division_by_zero() {
        let mut pad = Keypad::new();
        let display = pad.press_all(lex("5/0="));
        assert_eq!(display, ERROR_DISPLAY);
        // The engine is already reset; a clear shows "0" again.
        assert_eq!(pad.press(Key::Clear), "0");
    }

    #[test]
    fn entry_continues_after_error() {
        let mut pad = Keypad::new();
        pad.press_all(lex("5/0="));
        assert_eq!(pad.press_all(lex("2+2=")), "4");
    }

    #[test]
    fn press_all_on_nothing_shows_default() {
        let mut pad = Keypad::new();
        assert_eq!(pad.press_all(lex("")), "0");
    }
}
