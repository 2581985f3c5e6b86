//! Inbound events.

use super::context::Op;
use serde::{Deserialize, Serialize};

/// A discrete input consumed by the state machine, one at a time to
/// completion.
///
/// Events carry everything the machine needs; there is no other inbound
/// channel. An event the current state does not accept is rejected whole:
/// no transition, no context change.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Event {
    /// A keypad digit, `0..=9`.
    Digit(u8),
    /// The decimal point key.
    Decimal,
    /// One of the four operator keys.
    Operator(Op),
    /// The equals key: close and fold the pending expression.
    Equal,
    /// Full reset back to the initial context.
    Clear,
    /// Advance the denomination one step, rescaling the whole context.
    ToggleDenomination,
    /// Raw free-text entry begins; the display stops being authoritative.
    BeginRawEntry,
    /// Raw entry ends with the candidate text.
    CommitRawEntry(String),
}

impl Event {
    /// Event name for history records and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Digit(_) => "Digit",
            Self::Decimal => "Decimal",
            Self::Operator(_) => "Operator",
            Self::Equal => "Equal",
            Self::Clear => "Clear",
            Self::ToggleDenomination => "ToggleDenomination",
            Self::BeginRawEntry => "BeginRawEntry",
            Self::CommitRawEntry(_) => "CommitRawEntry",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_ignore_payloads() {
        assert_eq!(Event::Digit(7).name(), "Digit");
        assert_eq!(Event::Operator(Op::Divide).name(), "Operator");
        assert_eq!(Event::CommitRawEntry("1.5".to_string()).name(), "CommitRawEntry");
    }

    #[test]
    fn events_round_trip_through_serde() {
        let event = Event::CommitRawEntry("-0.".to_string());
        let json = serde_json::to_string(&event).unwrap();
        let decoded: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(event, decoded);
    }
}
