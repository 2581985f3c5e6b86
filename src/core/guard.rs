//! Transition guards.
//!
//! Pure predicates over the context (and, for operator events, the
//! incoming operator) that select among competing transitions from the same
//! state/event pair. Their semantics are deliberately literal; see in
//! particular [`divides_by_zero`].

use super::context::{Context, Op, Token};

/// Displays that count as zero for the divide-by-zero guard.
const ZERO_DISPLAYS: [&str; 4] = ["0", "0.", "-0", "-0."];

/// True when closing the pending operation would divide by the current
/// display and that display is zero.
///
/// The check is literal: the display must be one of `0`, `0.`, `-0`, `-0.`
/// and the buffer must hold a `÷` at an odd (operator) index anywhere. A
/// display such as `0.0` is not caught here; the evaluator still refuses
/// the division and the event is rejected instead of faulting.
pub fn divides_by_zero(context: &Context) -> bool {
    ZERO_DISPLAYS.contains(&context.display.as_str())
        && context
            .equation
            .iter()
            .enumerate()
            .any(|(index, token)| index % 2 == 1 && *token == Token::Operator(Op::Divide))
}

/// True when the buffer plus the pending display forms a complete
/// expression: combined length odd and greater than one, so every operator
/// has operands on both sides.
pub fn is_valid_equation(context: &Context) -> bool {
    let combined = context.equation.len() + 1;
    combined > 1 && combined % 2 == 1
}

/// True when an incoming `x`/`÷` arrives while the buffer already holds a
/// `+`/`-`: only the trailing multiplicative run may be consolidated, the
/// additive pair stays pending.
pub fn is_multiply_divide_after_plus_minus(context: &Context, incoming: Op) -> bool {
    incoming.is_multiplicative()
        && context
            .equation
            .iter()
            .any(|token| matches!(token, Token::Operator(op) if op.is_additive()))
}

/// True when an incoming `+`/`-` in the operator state should fold the
/// buffer (minus its trailing operator) before opening the next term.
pub fn is_valid_equation_on_plus_minus(context: &Context, incoming: Op) -> bool {
    incoming.is_additive() && is_valid_equation(context)
}
