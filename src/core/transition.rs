//! The transition function.
//!
//! One pure function from `(state, context, event)` to an optional
//! [`Step`]. `None` means the event is not accepted in the current state
//! and nothing changes. Each state has its own handler; events a handler
//! does not consume fall through to the shared handlers (`Clear`,
//! `ToggleDenomination`), except in `Error`, which accepts `Clear` alone.

use super::context::{Context, Op, Token};
use super::event::Event;
use super::guard;
use super::state::{CalcState, OperandPhase};
use crate::convert;
use crate::entry;
use crate::eval;

/// The outcome of an accepted event.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Step {
    pub state: CalcState,
    pub context: Context,
}

impl Step {
    fn new(state: CalcState, context: Context) -> Option<Self> {
        Some(Self { state, context })
    }
}

/// Apply `event` to `(state, context)`.
///
/// Pure: equal inputs produce equal outputs, and the inputs are never
/// mutated. Guard evaluation happens before any buffer mutation, so a
/// rejected event leaves nothing half-applied.
pub fn transition(state: &CalcState, context: &Context, event: &Event) -> Option<Step> {
    let step = match state {
        CalcState::Idle => on_idle(context, event),
        CalcState::Operand(phase) => on_operand(*phase, context, event),
        CalcState::Operator => on_operator(context, event),
        CalcState::Result => on_result(context, event),
        // Terminal until cleared; no shared fallthrough.
        CalcState::Error => return on_error(event),
    };
    step.or_else(|| on_any(state, context, event))
}

fn on_idle(context: &Context, event: &Event) -> Option<Step> {
    match event {
        Event::Digit(digit) => set_digit(context, *digit),
        Event::Decimal => Step::new(
            CalcState::Operand(OperandPhase::AfterDecimal),
            Context {
                display: format!("{}.", context.display),
                ..context.clone()
            },
        ),
        Event::BeginRawEntry => begin_raw_entry(context),
        _ => None,
    }
}

fn on_operand(phase: OperandPhase, context: &Context, event: &Event) -> Option<Step> {
    let step = match (phase, event) {
        // A parked zero is replaced by the next digit, even another zero.
        (OperandPhase::Zero, Event::Digit(digit)) if *digit <= 9 => Step::new(
            CalcState::Operand(OperandPhase::BeforeDecimal),
            Context {
                display: digit.to_string(),
                ..context.clone()
            },
        ),
        (OperandPhase::BeforeDecimal | OperandPhase::AfterDecimal, Event::Digit(digit))
            if *digit <= 9 =>
        {
            Step::new(
                CalcState::Operand(phase),
                Context {
                    display: format!("{}{}", context.display, digit),
                    ..context.clone()
                },
            )
        }
        (OperandPhase::Zero | OperandPhase::BeforeDecimal, Event::Decimal) => Step::new(
            CalcState::Operand(OperandPhase::AfterDecimal),
            Context {
                display: format!("{}.", context.display),
                ..context.clone()
            },
        ),
        (
            OperandPhase::Zero | OperandPhase::BeforeDecimal | OperandPhase::AfterDecimal,
            Event::BeginRawEntry,
        ) => begin_raw_entry(context),
        (OperandPhase::EnteringInput, Event::CommitRawEntry(text)) => {
            commit_raw_entry(context, text)
        }
        _ => None,
    };
    step.or_else(|| on_operand_shared(context, event))
}

/// Transitions shared by every operand phase.
fn on_operand_shared(context: &Context, event: &Event) -> Option<Step> {
    match event {
        Event::Equal => {
            if guard::divides_by_zero(context) {
                Step::new(CalcState::Error, Context::error())
            } else if guard::is_valid_equation(context) {
                reduce_to_result(context)
            } else {
                None
            }
        }
        Event::Operator(op) => {
            if guard::divides_by_zero(context) {
                Step::new(CalcState::Error, Context::error())
            } else if guard::is_multiply_divide_after_plus_minus(context, *op) {
                consolidate_and_append(context, *op)
            } else if guard::is_valid_equation(context) {
                reduce_and_append(context, *op)
            } else {
                append_first_operator(context, *op)
            }
        }
        _ => None,
    }
}

fn on_operator(context: &Context, event: &Event) -> Option<Step> {
    match event {
        Event::Digit(digit) => set_digit(context, *digit),
        Event::Decimal => Step::new(
            CalcState::Operand(OperandPhase::AfterDecimal),
            Context {
                display: "0.".to_string(),
                ..context.clone()
            },
        ),
        Event::BeginRawEntry => Step::new(
            CalcState::Operand(OperandPhase::EnteringInput),
            Context {
                display: "0".to_string(),
                is_editing: true,
                ..context.clone()
            },
        ),
        Event::Operator(op) => {
            if guard::is_valid_equation_on_plus_minus(context, *op) {
                reduce_replacing_operator(context, *op)
            } else {
                replace_trailing_operator(context, *op)
            }
        }
        Event::Equal => {
            if guard::divides_by_zero(context) {
                Step::new(CalcState::Error, Context::error())
            } else {
                drop_operator_and_reduce(context)
            }
        }
        _ => None,
    }
}

fn on_result(context: &Context, event: &Event) -> Option<Step> {
    match event {
        Event::Operator(op) => {
            let mut equation = context.equation.clone();
            equation.push(Token::Operator(*op));
            Step::new(
                CalcState::Operator,
                Context {
                    equation,
                    ..context.clone()
                },
            )
        }
        // A fresh entry discards the result wholesale, denomination included.
        Event::Digit(digit) => set_digit(&Context::initial(), *digit),
        Event::Decimal => Step::new(
            CalcState::Operand(OperandPhase::AfterDecimal),
            Context {
                display: "0.".to_string(),
                ..Context::initial()
            },
        ),
        Event::BeginRawEntry => begin_raw_entry(&Context::initial()),
        _ => None,
    }
}

/// `Error` is terminal except for `Clear`.
fn on_error(event: &Event) -> Option<Step> {
    match event {
        Event::Clear => Step::new(CalcState::Idle, Context::initial()),
        _ => None,
    }
}

/// Shared fallthrough: `Clear` restores the initial context;
/// `ToggleDenomination` rescales the whole context in place.
fn on_any(state: &CalcState, context: &Context, event: &Event) -> Option<Step> {
    match event {
        Event::Clear => Step::new(CalcState::Idle, Context::initial()),
        Event::ToggleDenomination => {
            let converted = convert::convert_context(context).ok()?;
            let next_state = match state {
                // Re-enter the operand compound at its initial phase, so
                // the next digit replaces the converted display.
                CalcState::Operand(_) => CalcState::Operand(OperandPhase::Zero),
                other => *other,
            };
            Step::new(next_state, converted)
        }
        _ => None,
    }
}

/// Replace the display with a single digit; zero parks in `Operand.Zero`.
fn set_digit(context: &Context, digit: u8) -> Option<Step> {
    if digit > 9 {
        return None;
    }
    let phase = if digit == 0 {
        OperandPhase::Zero
    } else {
        OperandPhase::BeforeDecimal
    };
    Step::new(
        CalcState::Operand(phase),
        Context {
            display: digit.to_string(),
            ..context.clone()
        },
    )
}

fn begin_raw_entry(context: &Context) -> Option<Step> {
    Step::new(
        CalcState::Operand(OperandPhase::EnteringInput),
        Context {
            is_editing: true,
            ..context.clone()
        },
    )
}

/// Validate and commit raw-entry text, routing by the committed shape.
fn commit_raw_entry(context: &Context, text: &str) -> Option<Step> {
    let display = entry::normalize(text)?;
    let phase = if display == "0" {
        OperandPhase::Zero
    } else if display.contains('.') {
        OperandPhase::AfterDecimal
    } else {
        OperandPhase::BeforeDecimal
    };
    Step::new(
        CalcState::Operand(phase),
        Context {
            display,
            is_editing: false,
            ..context.clone()
        },
    )
}

/// Commit the display, fold the whole buffer, and enter `Result`.
fn reduce_to_result(context: &Context) -> Option<Step> {
    let tokens = context.with_pending_operand();
    let result = eval::evaluate(&tokens).ok()?;
    Step::new(
        CalcState::Result,
        Context {
            display: result.clone(),
            equation: vec![Token::Operand(result)],
            ..context.clone()
        },
    )
}

/// Commit the display and fold only the trailing multiplicative run,
/// leaving the pending `+`/`-` pair in place ahead of the incoming
/// operator.
fn consolidate_and_append(context: &Context, op: Op) -> Option<Step> {
    let tokens = context.with_pending_operand();
    let split = tokens.len().min(2);
    let consolidated = eval::evaluate(&tokens[split..]).ok()?;
    let mut equation = tokens[..split].to_vec();
    equation.push(Token::operand(consolidated.clone()));
    equation.push(Token::Operator(op));
    Step::new(
        CalcState::Operator,
        Context {
            display: consolidated,
            equation,
            ..context.clone()
        },
    )
}

/// Commit the display, fold the entire buffer, and append the incoming
/// operator.
fn reduce_and_append(context: &Context, op: Op) -> Option<Step> {
    let tokens = context.with_pending_operand();
    let result = eval::evaluate(&tokens).ok()?;
    let equation = vec![Token::operand(result.clone()), Token::Operator(op)];
    Step::new(
        CalcState::Operator,
        Context {
            display: result,
            equation,
            ..context.clone()
        },
    )
}

/// First operator of the expression: nothing to fold yet.
fn append_first_operator(context: &Context, op: Op) -> Option<Step> {
    let mut equation = context.with_pending_operand();
    equation.push(Token::Operator(op));
    Step::new(
        CalcState::Operator,
        Context {
            equation,
            ..context.clone()
        },
    )
}

/// `+`/`-` after a completed pair: drop the pending operator, fold, then
/// open the new additive term.
fn reduce_replacing_operator(context: &Context, op: Op) -> Option<Step> {
    let committed = &context.equation[..context.equation.len().saturating_sub(1)];
    let result = eval::evaluate(committed).ok()?;
    let equation = vec![Token::operand(result.clone()), Token::Operator(op)];
    Step::new(
        CalcState::Operator,
        Context {
            display: result,
            equation,
            ..context.clone()
        },
    )
}

/// Re-keyed operator: swap the trailing operator token in place.
fn replace_trailing_operator(context: &Context, op: Op) -> Option<Step> {
    let mut equation = context.equation.clone();
    match equation.last_mut() {
        Some(token @ Token::Operator(_)) => *token = Token::Operator(op),
        _ => return None,
    }
    Step::new(
        CalcState::Operator,
        Context {
            equation,
            ..context.clone()
        },
    )
}

/// `=` with a dangling operator: drop it and fold what is committed.
fn drop_operator_and_reduce(context: &Context) -> Option<Step> {
    let committed = &context.equation[..context.equation.len().saturating_sub(1)];
    let result = eval::evaluate(committed).ok()?;
    Step::new(
        CalcState::Result,
        Context {
            display: result.clone(),
            equation: vec![Token::Operand(result)],
            ..context.clone()
        },
    )
}
