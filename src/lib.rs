//! Abacus: a calculator engine as a pure functional state machine.
//!
//! The engine consumes discrete input events (digits, operators, equals,
//! clear, a denomination toggle, raw text entry) one at a time to
//! completion. A pure transition function maps the current state and
//! context to the next; the [`engine::Engine`] shell owns the mutable
//! state, records history, and exposes the snapshot renderers read.
//!
//! Values are one underlying quantity in three denominations
//! (1 Large = 10^9 Medium = 10^18 Small). All arithmetic is exact decimal;
//! division alone rounds, at a fixed fractional scale.
//!
//! # Core Concepts
//!
//! - **Context**: the single aggregate the machine owns: display string,
//!   token buffer, denomination, edit flag
//! - **Guards**: pure predicates selecting among competing transitions
//! - **History**: immutable record of accepted transitions over time
//!
//! # Example
//!
//! ```rust
//! use abacus::{Denomination, Engine, Event, Op};
//!
//! let mut engine = Engine::new();
//!
//! engine.handle(Event::Digit(3));
//! engine.handle(Event::Operator(Op::Add));
//! engine.handle(Event::Digit(6));
//! engine.handle(Event::Operator(Op::Multiply));
//! engine.handle(Event::Digit(3));
//! engine.handle(Event::Equal);
//!
//! // x folds into its own run before the pending + closes: 3 + (6 x 3)
//! assert_eq!(engine.view().display, "21");
//!
//! engine.handle(Event::ToggleDenomination);
//! assert_eq!(engine.view().denomination, Denomination::Small);
//! assert_eq!(engine.view().display, "21000000000");
//! ```

pub mod convert;
pub mod core;
pub mod decimal;
pub mod engine;
pub mod entry;
pub mod eval;
pub mod format;

// Re-export commonly used types
pub use self::core::{CalcState, Context, Denomination, Event, Op, OperandPhase, Token, View};
pub use self::engine::Engine;
