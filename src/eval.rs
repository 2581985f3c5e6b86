//! Equation evaluation.
//!
//! Reduces an alternating operand/operator token sequence to one decimal
//! string in a single left-to-right pass: multiplicative operators fold
//! immediately into the most recently accumulated term, additive operators
//! accumulate signed terms, and the terms are summed at the end.

use crate::core::{Op, Token};
use crate::decimal::{self, DecimalError};
use bigdecimal::{BigDecimal, Zero};
use thiserror::Error;

/// Fractional digits kept by `÷`; every other operator is exact.
pub const DIVISION_SCALE: i64 = 12;

/// Errors from evaluating a token sequence.
///
/// The state machine only builds well-formed buffers, so these surface when
/// the evaluator is handed a malformed one directly.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error(transparent)]
    Decimal(#[from] DecimalError),

    #[error("operator `{0}` has no left-hand operand")]
    DanglingOperator(Op),

    #[error("equation ends with operator `{0}`")]
    TrailingOperator(Op),

    #[error("adjacent operands without an operator")]
    AdjacentOperands,
}

/// Reduce `tokens` to one decimal string.
///
/// A singleton `[operand]` returns that operand normalized; an empty slice
/// sums to `"0"`. Division keeps [`DIVISION_SCALE`] fractional digits,
/// rounding half-up; a zero divisor is a typed error, never a fault.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Op, Token};
/// use abacus::eval::evaluate;
///
/// let tokens = [
///     Token::operand("3"),
///     Token::Operator(Op::Add),
///     Token::operand("6"),
///     Token::Operator(Op::Multiply),
///     Token::operand("3"),
/// ];
/// // 6 x 3 folds before the + closes.
/// assert_eq!(evaluate(&tokens).unwrap(), "21");
/// ```
pub fn evaluate(tokens: &[Token]) -> Result<String, EvalError> {
    let mut terms: Vec<BigDecimal> = Vec::new();
    let mut pending: Option<BigDecimal> = None;
    let mut sign: Option<Op> = None;

    for token in tokens {
        match token {
            Token::Operand(literal) => {
                if pending.replace(decimal::parse(literal)?).is_some() {
                    return Err(EvalError::AdjacentOperands);
                }
            }
            Token::Operator(op) => {
                let operand = pending.take().ok_or(EvalError::DanglingOperator(*op))?;
                settle(&mut terms, sign, operand)?;
                sign = Some(*op);
            }
        }
    }

    match (pending, sign) {
        (Some(operand), last_sign) => settle(&mut terms, last_sign, operand)?,
        (None, Some(op)) => return Err(EvalError::TrailingOperator(op)),
        (None, None) => {}
    }

    let sum = terms
        .into_iter()
        .fold(BigDecimal::zero(), |acc, term| acc + term);
    Ok(decimal::format(&sum))
}

/// Resolve a completed operand against the operator that preceded it.
fn settle(
    terms: &mut Vec<BigDecimal>,
    sign: Option<Op>,
    operand: BigDecimal,
) -> Result<(), EvalError> {
    match sign {
        None | Some(Op::Add) => terms.push(operand),
        Some(Op::Subtract) => terms.push(-operand),
        Some(Op::Multiply) => {
            let last = terms.pop().ok_or(EvalError::DanglingOperator(Op::Multiply))?;
            terms.push(last * operand);
        }
        Some(Op::Divide) => {
            let last = terms.pop().ok_or(EvalError::DanglingOperator(Op::Divide))?;
            terms.push(decimal::divide(&last, &operand, DIVISION_SCALE)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &[&str]) -> Vec<Token> {
        source
            .iter()
            .map(|text| match *text {
                "+" => Token::Operator(Op::Add),
                "-" => Token::Operator(Op::Subtract),
                "x" => Token::Operator(Op::Multiply),
                "÷" => Token::Operator(Op::Divide),
                operand => Token::operand(operand),
            })
            .collect()
    }

    #[test]
    fn multiplication_folds_before_the_pending_addition() {
        assert_eq!(evaluate(&tokens(&["3", "+", "6", "x", "3"])).unwrap(), "21");
    }

    #[test]
    fn additive_operators_fold_left_to_right() {
        assert_eq!(evaluate(&tokens(&["10", "-", "2", "-", "3"])).unwrap(), "5");
    }

    #[test]
    fn division_keeps_twelve_fractional_digits() {
        assert_eq!(
            evaluate(&tokens(&["1", "÷", "3"])).unwrap(),
            "0.333333333333"
        );
        assert_eq!(
            evaluate(&tokens(&["2", "÷", "3"])).unwrap(),
            "0.666666666667"
        );
    }

    #[test]
    fn exact_divisions_drop_padding_zeros() {
        assert_eq!(evaluate(&tokens(&["10", "÷", "4"])).unwrap(), "2.5");
    }

    #[test]
    fn a_singleton_returns_the_operand_normalized() {
        assert_eq!(evaluate(&tokens(&["7."])).unwrap(), "7");
        assert_eq!(evaluate(&tokens(&["-0."])).unwrap(), "0");
    }

    #[test]
    fn an_empty_buffer_sums_to_zero() {
        assert_eq!(evaluate(&[]).unwrap(), "0");
    }

    #[test]
    fn negative_literals_carry_their_sign() {
        assert_eq!(evaluate(&tokens(&["-2", "x", "3"])).unwrap(), "-6");
    }

    #[test]
    fn a_mixed_run_defers_the_additive_pair() {
        assert_eq!(
            evaluate(&tokens(&["5", "+", "3", "x", "2"])).unwrap(),
            "11"
        );
    }

    #[test]
    fn division_by_zero_is_a_typed_error() {
        assert_eq!(
            evaluate(&tokens(&["1", "÷", "0"])),
            Err(EvalError::Decimal(DecimalError::DivisionByZero)),
        );
    }

    #[test]
    fn malformed_buffers_are_rejected() {
        assert_eq!(
            evaluate(&tokens(&["5", "+"])),
            Err(EvalError::TrailingOperator(Op::Add)),
        );
        assert_eq!(
            evaluate(&tokens(&["+", "5"])),
            Err(EvalError::DanglingOperator(Op::Add)),
        );
        assert_eq!(
            evaluate(&tokens(&["5", "6"])),
            Err(EvalError::AdjacentOperands),
        );
        assert!(matches!(
            evaluate(&tokens(&["five"])),
            Err(EvalError::Decimal(DecimalError::InvalidLiteral(_))),
        ));
    }

    #[test]
    fn wide_operands_stay_exact() {
        assert_eq!(
            evaluate(&tokens(&["1000000000000000000", "x", "1000000000"])).unwrap(),
            "1000000000000000000000000000",
        );
    }
}
