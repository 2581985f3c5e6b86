//! Machine states.
//!
//! A flat tagged enum rather than a nested state hierarchy: `Operand`
//! carries its phase as data, and transitions shared by every phase are
//! explicit fallthrough in the transition function.

use serde::{Deserialize, Serialize};

/// How the display literal is currently being built while an operand is
/// entered.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum OperandPhase {
    /// The display is a freshly set zero; the next digit replaces it.
    Zero,
    /// Digits are appending ahead of any decimal point.
    BeforeDecimal,
    /// A decimal point has been accepted; further points are rejected.
    AfterDecimal,
    /// Raw free-text entry is active.
    EnteringInput,
}

/// The calculator's control states.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CalcState {
    /// Fresh or cleared; nothing entered yet.
    Idle,
    /// An operand is being built in the display.
    Operand(OperandPhase),
    /// An operator was just committed; the next operand has not begun.
    Operator,
    /// The equation was folded; the display holds the committed result.
    Result,
    /// Divide-by-zero was detected; only `Clear` leaves this state.
    Error,
}

impl CalcState {
    /// State name for logging and history.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Operand(OperandPhase::Zero) => "Operand.Zero",
            Self::Operand(OperandPhase::BeforeDecimal) => "Operand.BeforeDecimal",
            Self::Operand(OperandPhase::AfterDecimal) => "Operand.AfterDecimal",
            Self::Operand(OperandPhase::EnteringInput) => "Operand.EnteringInput",
            Self::Operator => "Operator",
            Self::Result => "Result",
            Self::Error => "Error",
        }
    }

    /// True in the terminal error state.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl Default for CalcState {
    fn default() -> Self {
        Self::Idle
    }
}
