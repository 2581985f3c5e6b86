//! Denomination conversion.
//!
//! One forward step per call in the cycle Large -> Medium -> Small ->
//! Large. The two scaling-down steps multiply by 10^9 exactly; the
//! Small -> Large step divides by 10^18 keeping 24 fractional digits, the
//! only place a conversion can lose precision.

use crate::core::{Context, Denomination, Token};
use crate::decimal::{self, DecimalError};
use bigdecimal::BigDecimal;

/// Fractional digits kept by the Small -> Large division step.
pub const SMALL_TO_LARGE_SCALE: i64 = 24;

/// 10^9: one forward scaling step.
const UNITS_PER_STEP: u64 = 1_000_000_000;
/// 10^18: Small units per Large unit.
const UNITS_SMALL_PER_LARGE: u64 = 1_000_000_000_000_000_000;

/// Rescale one value from `from` to the next denomination in cycle order.
///
/// # Example
///
/// ```rust
/// use abacus::convert::convert_value;
/// use abacus::Denomination;
///
/// assert_eq!(convert_value("1.5", Denomination::Large).unwrap(), "1500000000");
/// assert_eq!(
///     convert_value("1500000000000000000", Denomination::Small).unwrap(),
///     "1.5",
/// );
/// ```
pub fn convert_value(value: &str, from: Denomination) -> Result<String, DecimalError> {
    let parsed = decimal::parse(value)?;
    let converted = match from {
        Denomination::Large | Denomination::Medium => {
            parsed * BigDecimal::from(UNITS_PER_STEP)
        }
        Denomination::Small => decimal::divide(
            &parsed,
            &BigDecimal::from(UNITS_SMALL_PER_LARGE),
            SMALL_TO_LARGE_SCALE,
        )?,
    };
    Ok(decimal::format(&converted))
}

/// Rescale a whole context one step: the display and every operand token,
/// leaving operator tokens untouched, and advance the denomination.
pub fn convert_context(context: &Context) -> Result<Context, DecimalError> {
    let display = convert_value(&context.display, context.denomination)?;
    let equation = context
        .equation
        .iter()
        .map(|token| match token {
            Token::Operand(literal) => {
                convert_value(literal, context.denomination).map(Token::Operand)
            }
            Token::Operator(op) => Ok(Token::Operator(*op)),
        })
        .collect::<Result<Vec<_>, DecimalError>>()?;

    Ok(Context {
        display,
        equation,
        denomination: context.denomination.next(),
        is_editing: context.is_editing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Op;

    #[test]
    fn each_step_scales_by_ten_to_the_ninth() {
        assert_eq!(convert_value("5", Denomination::Large).unwrap(), "5000000000");
        assert_eq!(convert_value("5", Denomination::Medium).unwrap(), "5000000000");
        assert_eq!(
            convert_value("5000000000000000000", Denomination::Small).unwrap(),
            "5",
        );
    }

    #[test]
    fn a_full_cycle_returns_the_original_value() {
        let start = "123.456789";
        let medium = convert_value(start, Denomination::Large).unwrap();
        let small = convert_value(&medium, Denomination::Medium).unwrap();
        let large = convert_value(&small, Denomination::Small).unwrap();
        assert_eq!(large, start);
    }

    #[test]
    fn zero_is_zero_in_every_denomination() {
        for from in [Denomination::Large, Denomination::Medium, Denomination::Small] {
            assert_eq!(convert_value("0", from).unwrap(), "0");
        }
    }

    #[test]
    fn trailing_dot_displays_convert_cleanly() {
        assert_eq!(convert_value("2.", Denomination::Medium).unwrap(), "2000000000");
    }

    #[test]
    fn small_to_large_rounds_at_twenty_four_digits() {
        // 10^-7 Small is 10^-25 Large, one digit past the kept scale.
        assert_eq!(convert_value("0.0000001", Denomination::Small).unwrap(), "0");
    }

    #[test]
    fn non_literals_are_rejected() {
        assert!(convert_value("Not a number", Denomination::Large).is_err());
    }

    #[test]
    fn context_conversion_touches_operands_only() {
        let context = Context {
            display: "3".to_string(),
            equation: vec![Token::operand("5"), Token::Operator(Op::Add)],
            denomination: Denomination::Medium,
            is_editing: false,
        };
        let converted = convert_context(&context).unwrap();

        assert_eq!(converted.display, "3000000000");
        assert_eq!(
            converted.equation,
            vec![Token::operand("5000000000"), Token::Operator(Op::Add)],
        );
        assert_eq!(converted.denomination, Denomination::Small);
        assert!(!converted.is_editing);
    }

    #[test]
    fn context_conversion_preserves_the_edit_flag() {
        let context = Context {
            is_editing: true,
            ..Context::initial()
        };
        assert!(convert_context(&context).unwrap().is_editing);
    }
}
