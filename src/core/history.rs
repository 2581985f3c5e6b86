//! Transition history tracking.
//!
//! Immutable log of the transitions the engine has accepted. `record`
//! returns a new history and leaves the original untouched.

use super::event::Event;
use super::state::CalcState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single accepted transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being transitioned from
    pub from: CalcState,
    /// The state being transitioned to
    pub to: CalcState,
    /// The event that triggered the transition
    pub event: Event,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of accepted transitions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct History {
    records: Vec<TransitionRecord>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// Pure: the existing history is not mutated.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// The path of states traversed: the first record's `from`, then every
    /// `to` in order.
    pub fn path(&self) -> Vec<&CalcState> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Elapsed time between the first and last record, if any.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All records in order.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }
}
