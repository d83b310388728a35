//! Key lexing for tapcalc
//!
//! Turns a typed line into the key events a physical keypad would have
//! produced, one character per key. Both '.' and ',' act as the decimal
//! key. Characters that map to no key (including whitespace) are dropped
//! without complaint; the engine is equally permissive about what it
//! receives, so a stray character can never fail a line.

use nom::{
    branch::alt,
    character::complete::{anychar, char, multispace0, one_of},
    combinator::{map, value},
    multi::many0,
    sequence::preceded,
    IResult,
};

use crate::keypad::Key;

/// Parse a digit key
fn digit_key(input: &str) -> IResult<&str, Option<Key>> {
    map(one_of("0123456789"), |c| Some(Key::Digit(c)))(input)
}

/// Parse a decimal key ('.' or ',')
fn decimal_key(input: &str) -> IResult<&str, Option<Key>> {
    value(Some(Key::Decimal), one_of(".,"))(input)
}

/// Parse an operator key
fn operator_key(input: &str) -> IResult<&str, Option<Key>> {
    map(one_of("+-*/"), |c| Some(Key::Operator(c)))(input)
}

/// Parse the evaluate key
fn evaluate_key(input: &str) -> IResult<&str, Option<Key>> {
    value(Some(Key::Evaluate), char('='))(input)
}

/// Parse the clear key
fn clear_key(input: &str) -> IResult<&str, Option<Key>> {
    value(Some(Key::Clear), one_of("cC"))(input)
}

/// Any other character maps to no key at all
fn unknown_key(input: &str) -> IResult<&str, Option<Key>> {
    value(None, anychar)(input)
}

fn key(input: &str) -> IResult<&str, Option<Key>> {
    alt((
        digit_key,
        decimal_key,
        operator_key,
        evaluate_key,
        clear_key,
        unknown_key,
    ))(input)
}

/// Lex a line of input into key events
pub fn lex(input: &str) -> Vec<Key> {
    match many0(preceded(multispace0, key))(input) {
        Ok((_, keys)) => keys.into_iter().flatten().collect(),
        Err(_) => Vec::new(),
    }
}
