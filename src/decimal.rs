//! The decimal arithmetic seam.
//!
//! Every numeric value in the engine travels as a decimal string; this
//! module is the single place those strings are parsed, divided at a fixed
//! precision, and rendered back. Backed by [`bigdecimal`] so all arithmetic
//! is exact base-10; floating point never touches a value.

use bigdecimal::rounding::RoundingMode;
use bigdecimal::{BigDecimal, Zero};
use std::str::FromStr;
use thiserror::Error;

/// Errors from the decimal seam.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecimalError {
    #[error("invalid decimal literal `{0}`")]
    InvalidLiteral(String),

    #[error("division by zero")]
    DivisionByZero,
}

/// Parse a display or operand literal into an exact decimal.
///
/// Accepts the partial forms the keypad and raw entry produce in addition
/// to complete literals: a trailing decimal point (`5.`), a signed zero
/// (`-0.`), and fraction-only text (`.5`).
///
/// # Example
///
/// ```rust
/// use abacus::decimal::parse;
///
/// assert_eq!(parse("12.").unwrap(), parse("12").unwrap());
/// assert_eq!(parse(".5").unwrap(), parse("0.5").unwrap());
/// assert!(parse("Not a number").is_err());
/// ```
pub fn parse(literal: &str) -> Result<BigDecimal, DecimalError> {
    let invalid = || DecimalError::InvalidLiteral(literal.to_string());

    let trimmed = literal.strip_suffix('.').unwrap_or(literal);
    let completed = if let Some(fraction) = trimmed.strip_prefix("-.") {
        format!("-0.{fraction}")
    } else if let Some(fraction) = trimmed.strip_prefix('.') {
        format!("0.{fraction}")
    } else {
        trimmed.to_string()
    };

    if completed.is_empty() || completed == "-" {
        return Err(invalid());
    }
    BigDecimal::from_str(&completed).map_err(|_| invalid())
}

/// Divide keeping `scale` fractional digits, rounding half-up.
pub fn divide(
    dividend: &BigDecimal,
    divisor: &BigDecimal,
    scale: i64,
) -> Result<BigDecimal, DecimalError> {
    if divisor.is_zero() {
        return Err(DecimalError::DivisionByZero);
    }
    Ok((dividend / divisor).with_scale_round(scale, RoundingMode::HalfUp))
}

/// Render a value in plain decimal notation.
///
/// Trailing fractional zeros are trimmed and exponent notation is never
/// produced, so the output always satisfies the display grammar.
pub fn format(value: &BigDecimal) -> String {
    let (digits, scale) = value.normalized().as_bigint_and_exponent();
    let mut magnitude = digits.to_string();
    let negative = magnitude.starts_with('-');
    if negative {
        magnitude.remove(0);
    }

    let body = if scale <= 0 {
        let mut body = magnitude;
        body.push_str(&"0".repeat((-scale) as usize));
        body
    } else {
        let scale = scale as usize;
        if magnitude.len() > scale {
            let point = magnitude.len() - scale;
            format!("{}.{}", &magnitude[..point], &magnitude[point..])
        } else {
            format!("0.{}{}", "0".repeat(scale - magnitude.len()), magnitude)
        }
    };

    if negative {
        format!("-{body}")
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_partial_forms() {
        assert_eq!(parse("5.").unwrap(), parse("5").unwrap());
        assert_eq!(parse("-0.").unwrap(), BigDecimal::zero());
        assert_eq!(parse(".25").unwrap(), parse("0.25").unwrap());
        assert_eq!(parse("-.25").unwrap(), parse("-0.25").unwrap());
        assert_eq!(parse("05").unwrap(), parse("5").unwrap());
    }

    #[test]
    fn parse_rejects_non_literals() {
        assert!(parse("").is_err());
        assert!(parse("-").is_err());
        assert!(parse("1.2.3").is_err());
        assert!(parse("Not a number").is_err());
    }

    #[test]
    fn divide_rounds_half_up_at_scale() {
        let two = parse("2").unwrap();
        let three = parse("3").unwrap();
        let quotient = divide(&two, &three, 12).unwrap();
        assert_eq!(format(&quotient), "0.666666666667");
    }

    #[test]
    fn divide_by_zero_is_an_error() {
        let one = parse("1").unwrap();
        let zero = parse("0").unwrap();
        assert_eq!(divide(&one, &zero, 12), Err(DecimalError::DivisionByZero));
    }

    #[test]
    fn format_trims_trailing_fraction_zeros() {
        let padded = parse("2.500000000000").unwrap();
        assert_eq!(format(&padded), "2.5");
    }

    #[test]
    fn format_keeps_wide_integers_plain() {
        let product = parse("5").unwrap() * BigDecimal::from(1_000_000_000_000_000_000u64);
        assert_eq!(format(&product), "5000000000000000000");
    }

    #[test]
    fn format_keeps_tiny_fractions_plain() {
        let quotient = divide(
            &parse("1").unwrap(),
            &BigDecimal::from(1_000_000_000_000_000_000u64),
            24,
        )
        .unwrap();
        assert_eq!(format(&quotient), "0.000000000000000001");
    }

    #[test]
    fn format_normalizes_zero() {
        assert_eq!(format(&parse("0.000").unwrap()), "0");
        assert_eq!(format(&parse("-0").unwrap()), "0");
    }

    #[test]
    fn format_preserves_sign() {
        assert_eq!(format(&parse("-12.50").unwrap()), "-12.5");
    }
}
