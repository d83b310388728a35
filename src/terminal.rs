use tapcalc::{lex, Key, Keypad};

/// Execute a single line of calculator keys
///
/// The line is lexed into key events and pressed in order; submitting the
/// line acts as the evaluate key unless the line already ended with one.
/// Returns `None` when the line contained no keys at all.
pub(crate) fn execute_line(pad: &mut Keypad, input: &str) -> Option<String> {
    let keys = lex(input);
    if keys.is_empty() {
        return None;
    }

    let ends_with_evaluate = keys.last() == Some(&Key::Evaluate);
    let display = pad.press_all(keys);
    if ends_with_evaluate {
        Some(display)
    } else {
        Some(pad.press(Key::Evaluate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_submit_evaluates() {
        let mut pad = Keypad::new();
        assert_eq!(execute_line(&mut pad, "2+3"), Some("5".to_string()));
    }

    #[test]
    fn explicit_equals_does_not_double_evaluate() {
        let mut pad = Keypad::new();
        assert_eq!(execute_line(&mut pad, "5/0="), Some("Error".to_string()));
    }

    #[test]
    fn blank_line_is_no_keys() {
        let mut pad = Keypad::new();
        assert_eq!(execute_line(&mut pad, "   "), None);
    }
}
