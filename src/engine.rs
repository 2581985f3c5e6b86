//! The imperative shell.
//!
//! [`Engine`] owns the mutable state the pure core never touches: the
//! current control state, the context, and the transition history. Events
//! apply one at a time, to completion; a rejected event changes nothing.

use crate::core::{transition, CalcState, Context, Event, History, TransitionRecord, View};
use chrono::Utc;
use tracing::{debug, trace};

/// The calculator engine: single writer of the context.
///
/// # Example
///
/// ```rust
/// use abacus::{Engine, Event, Op};
///
/// let mut engine = Engine::new();
/// for event in [
///     Event::Digit(5),
///     Event::Operator(Op::Add),
///     Event::Digit(3),
///     Event::Operator(Op::Multiply),
///     Event::Digit(2),
///     Event::Equal,
/// ] {
///     engine.handle(event);
/// }
/// // x binds tighter than the pending +: 5 + (3 x 2)
/// assert_eq!(engine.view().display, "11");
/// ```
#[derive(Clone, Debug)]
pub struct Engine {
    state: CalcState,
    context: Context,
    history: History,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine in the initial state: `Idle`, display `0`, empty buffer.
    pub fn new() -> Self {
        Self {
            state: CalcState::Idle,
            context: Context::initial(),
            history: History::new(),
        }
    }

    /// Apply one event to completion.
    ///
    /// Returns `true` if the event was accepted. A rejected event leaves
    /// state, context, and history untouched.
    pub fn handle(&mut self, event: Event) -> bool {
        match transition(&self.state, &self.context, &event) {
            Some(step) => {
                debug!(
                    from = self.state.name(),
                    to = step.state.name(),
                    event = event.name(),
                    display = %step.context.display,
                    "transition"
                );
                self.history = self.history.record(TransitionRecord {
                    from: self.state,
                    to: step.state,
                    event,
                    timestamp: Utc::now(),
                });
                self.state = step.state;
                self.context = step.context;
                true
            }
            None => {
                trace!(
                    state = self.state.name(),
                    event = event.name(),
                    "event rejected"
                );
                false
            }
        }
    }

    /// Current control state.
    pub fn state(&self) -> &CalcState {
        &self.state
    }

    /// Current context.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Snapshot of the fields rendering collaborators read.
    pub fn view(&self) -> View {
        self.context.view()
    }

    /// History of accepted transitions.
    pub fn history(&self) -> &History {
        &self.history
    }
}
