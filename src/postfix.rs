//! Infix to postfix conversion and RPN evaluation
//!
//! The shunting-yard half turns the committed infix token stream into
//! reverse Polish order using an auxiliary operator stack; the evaluation
//! half folds the RPN stream over a value stack. No parentheses exist in
//! the token alphabet, so the operator stack only ever holds plain
//! operators.

use crate::engine::EvalError;
use crate::token::{Op, Token};

/// Convert an infix token sequence to postfix (RPN) order.
///
/// All four operators are left-associative, so an operator on the stack
/// with precedence greater than *or equal to* the incoming one is popped
/// first. This is what makes `10 - 2 - 3` evaluate as `(10 - 2) - 3`.
pub fn to_postfix(tokens: &[Token]) -> Vec<Token> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Op> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token.clone()),
            Token::Operator(op) => {
                while let Some(&top) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    ops.pop();
                    output.push(Token::Operator(top));
                }
                ops.push(*op);
            }
        }
    }

    while let Some(op) = ops.pop() {
        output.push(Token::Operator(op));
    }

    output
}

/// Evaluate a postfix token sequence over a value stack.
///
/// Operands were pushed left to right, so the second pop is the left
/// operand. A right operand of exactly zero under division fails the
/// whole evaluation; so does any operand underflow or unparseable
/// number (the defensive path for malformed streams, e.g. a leading
/// operator that was accepted at entry time).
pub fn eval_postfix(tokens: &[Token]) -> Result<f64, EvalError> {
    let mut values: Vec<f64> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(text) => {
                let n: f64 = text
                    .parse()
                    .map_err(|_| EvalError::Malformed(text.clone()))?;
                values.push(n);
            }
            Token::Operator(op) => {
                let rhs = values
                    .pop()
                    .ok_or_else(|| EvalError::Malformed(op.symbol().to_string()))?;
                let lhs = values
                    .pop()
                    .ok_or_else(|| EvalError::Malformed(op.symbol().to_string()))?;
                if *op == Op::Div && rhs == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                values.push(op.apply(lhs, rhs));
            }
        }
    }

    let result = values
        .pop()
        .ok_or_else(|| EvalError::Malformed("empty expression".to_string()))?;
    if !values.is_empty() {
        return Err(EvalError::Malformed("unbalanced expression".to_string()));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Op;

    fn num(s: &str) -> Token {
        Token::Number(s.to_string())
    }

    #[test]
    fn converts_flat_addition() {
        let rpn = to_postfix(&[num("2"), Token::Operator(Op::Add), num("3")]);
        assert_eq!(rpn, vec![num("2"), num("3"), Token::Operator(Op::Add)]);
    }

    #[test]
    fn multiplication_defers_addition() {
        // 2 + 3 * 4 -> 2 3 4 * +
        let rpn = to_postfix(&[
            num("2"),
            Token::Operator(Op::Add),
            num("3"),
            Token::Operator(Op::Mul),
            num("4"),
        ]);
        assert_eq!(
            rpn,
            vec![
                num("2"),
                num("3"),
                num("4"),
                Token::Operator(Op::Mul),
                Token::Operator(Op::Add),
            ]
        );
    }

    #[test]
    fn equal_precedence_pops_left_first() {
        // 10 - 2 - 3 -> 10 2 - 3 -
        let rpn = to_postfix(&[
            num("10"),
            Token::Operator(Op::Sub),
            num("2"),
            Token::Operator(Op::Sub),
            num("3"),
        ]);
        assert_eq!(
            rpn,
            vec![
                num("10"),
                num("2"),
                Token::Operator(Op::Sub),
                num("3"),
                Token::Operator(Op::Sub),
            ]
        );
    }

    #[test]
    fn evaluates_rpn_left_to_right() {
        let rpn = to_postfix(&[
            num("10"),
            Token::Operator(Op::Sub),
            num("2"),
            Token::Operator(Op::Sub),
            num("3"),
        ]);
        assert_eq!(eval_postfix(&rpn).unwrap(), 5.0);
    }

    #[test]
    fn division_by_zero_fails() {
        let rpn = to_postfix(&[num("5"), Token::Operator(Op::Div), num("0")]);
        assert!(matches!(eval_postfix(&rpn), Err(EvalError::DivisionByZero)));
    }

    #[test]
    fn operand_underflow_fails() {
        // A leading operator survives conversion but has only one operand.
        let rpn = to_postfix(&[Token::Operator(Op::Add), num("5")]);
        assert!(matches!(eval_postfix(&rpn), Err(EvalError::Malformed(_))));
    }

    #[test]
    fn partial_number_parses() {
        // An uncommitted "3." buffer is a valid operand.
        let rpn = to_postfix(&[num("2"), Token::Operator(Op::Add), num("3.")]);
        assert_eq!(eval_postfix(&rpn).unwrap(), 5.0);
    }
}
