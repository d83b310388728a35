//! Expression tokens for tapcalc
//!
//! An expression is an alternating sequence of number and operator tokens.
//! Numbers stay in string form until evaluation so that partial entries
//! like `"3."` survive an operator commit unchanged.

/// One of the four binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Map an operator key to its operator, `None` for any other character.
    pub fn from_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    /// Binding strength: multiplicative 2, additive 1. All four operators
    /// are left-associative.
    pub fn precedence(&self) -> u8 {
        match self {
            Op::Mul | Op::Div => 2,
            Op::Add | Op::Sub => 1,
        }
    }

    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Op::Add => lhs + rhs,
            Op::Sub => lhs - rhs,
            Op::Mul => lhs * rhs,
            Op::Div => lhs / rhs,
        }
    }
}

/// A unit of the committed expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal, kept in the exact form it was typed
    Number(String),
    /// One of the four operators
    Operator(Op),
}

impl Token {
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_from_char() {
        assert_eq!(Op::from_char('+'), Some(Op::Add));
        assert_eq!(Op::from_char('-'), Some(Op::Sub));
        assert_eq!(Op::from_char('*'), Some(Op::Mul));
        assert_eq!(Op::from_char('/'), Some(Op::Div));
        assert_eq!(Op::from_char('%'), None);
        assert_eq!(Op::from_char('x'), None);
    }

    #[test]
    fn multiplicative_binds_tighter() {
        assert!(Op::Mul.precedence() > Op::Add.precedence());
        assert!(Op::Div.precedence() > Op::Sub.precedence());
        assert_eq!(Op::Mul.precedence(), Op::Div.precedence());
        assert_eq!(Op::Add.precedence(), Op::Sub.precedence());
    }

    #[test]
    fn apply_operators() {
        assert_eq!(Op::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Op::Sub.apply(10.0, 4.0), 6.0);
        assert_eq!(Op::Mul.apply(3.0, 4.0), 12.0);
        assert_eq!(Op::Div.apply(10.0, 4.0), 2.5);
    }
}
