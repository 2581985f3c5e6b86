//! The calculator context: the single mutable aggregate the machine owns.
//!
//! Every field mutation happens inside a transition in response to exactly
//! one event; readers treat each emitted context as immutable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display sentinel shown after a divide-by-zero.
pub const ERROR_DISPLAY: &str = "Not a number";

/// One of three fixed scaling units for the same underlying quantity.
///
/// 1 Large = 10^9 Medium = 10^18 Small. Conversion steps forward in cycle
/// order: Large -> Medium -> Small -> Large.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Denomination {
    Large,
    Medium,
    Small,
}

impl Denomination {
    /// The next unit in cycle order.
    pub fn next(self) -> Self {
        match self {
            Self::Large => Self::Medium,
            Self::Medium => Self::Small,
            Self::Small => Self::Large,
        }
    }

    /// Unit name for display and logging.
    pub fn name(self) -> &'static str {
        match self {
            Self::Large => "Large",
            Self::Medium => "Medium",
            Self::Small => "Small",
        }
    }
}

impl Default for Denomination {
    fn default() -> Self {
        Self::Medium
    }
}

/// The four infix operators.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Op {
    /// The key cap the operator is entered and stored as.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "x",
            Self::Divide => "÷",
        }
    }

    /// True for `x` and `÷`, which bind tighter than a pending `+`/`-`.
    pub fn is_multiplicative(self) -> bool {
        matches!(self, Self::Multiply | Self::Divide)
    }

    /// True for `+` and `-`.
    pub fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Subtract)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One element of the equation buffer.
///
/// The buffer alternates operand and operator tokens and never starts with
/// an operator; a leading minus lives inside the operand literal, not as a
/// token of its own.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Token {
    Operand(String),
    Operator(Op),
}

impl Token {
    /// Operand token from any string-ish literal.
    pub fn operand(literal: impl Into<String>) -> Self {
        Self::Operand(literal.into())
    }

    /// The operand literal, if this token is one.
    pub fn as_operand(&self) -> Option<&str> {
        match self {
            Self::Operand(literal) => Some(literal),
            Self::Operator(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand(literal) => f.write_str(literal),
            Self::Operator(op) => f.write_str(op.symbol()),
        }
    }
}

/// The mutable aggregate owned by the state machine.
///
/// `display` is the decimal literal currently shown (or [`ERROR_DISPLAY`]);
/// `equation` is the committed token buffer; every operand in the buffer
/// and the display share `denomination` at all times. While `is_editing` is
/// true the raw-entry buffer, not `display`, is authoritative.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Context {
    pub display: String,
    pub equation: Vec<Token>,
    pub denomination: Denomination,
    pub is_editing: bool,
}

impl Context {
    /// The context the engine starts with and `Clear` restores.
    pub fn initial() -> Self {
        Self {
            display: "0".to_string(),
            equation: Vec::new(),
            denomination: Denomination::default(),
            is_editing: false,
        }
    }

    /// The initial context with the divide-by-zero sentinel as display.
    pub fn error() -> Self {
        Self {
            display: ERROR_DISPLAY.to_string(),
            ..Self::initial()
        }
    }

    /// The equation buffer with the live display appended as the pending
    /// operand.
    pub fn with_pending_operand(&self) -> Vec<Token> {
        let mut tokens = self.equation.clone();
        tokens.push(Token::operand(self.display.clone()));
        tokens
    }

    /// Snapshot of the fields rendering collaborators read.
    pub fn view(&self) -> View {
        View {
            display: self.display.clone(),
            denomination: self.denomination,
            is_editing: self.is_editing,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::initial()
    }
}

/// The outbound observable state.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct View {
    pub display: String,
    pub denomination: Denomination,
    pub is_editing: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denominations_cycle_forward() {
        assert_eq!(Denomination::Large.next(), Denomination::Medium);
        assert_eq!(Denomination::Medium.next(), Denomination::Small);
        assert_eq!(Denomination::Small.next(), Denomination::Large);
    }

    #[test]
    fn three_steps_return_to_the_start() {
        let start = Denomination::Medium;
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn initial_context_shows_zero() {
        let context = Context::initial();
        assert_eq!(context.display, "0");
        assert!(context.equation.is_empty());
        assert_eq!(context.denomination, Denomination::Medium);
        assert!(!context.is_editing);
    }

    #[test]
    fn error_context_carries_the_sentinel() {
        let context = Context::error();
        assert_eq!(context.display, ERROR_DISPLAY);
        assert!(context.equation.is_empty());
    }

    #[test]
    fn pending_operand_is_appended_last() {
        let context = Context {
            display: "6".to_string(),
            equation: vec![Token::operand("3"), Token::Operator(Op::Add)],
            ..Context::initial()
        };
        let tokens = context.with_pending_operand();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2], Token::operand("6"));
    }

    #[test]
    fn operator_symbols_match_the_key_caps() {
        assert_eq!(Op::Add.symbol(), "+");
        assert_eq!(Op::Subtract.symbol(), "-");
        assert_eq!(Op::Multiply.symbol(), "x");
        assert_eq!(Op::Divide.symbol(), "÷");
    }

    #[test]
    fn tokens_render_as_their_source_text() {
        assert_eq!(Token::operand("1.5").to_string(), "1.5");
        assert_eq!(Token::Operator(Op::Divide).to_string(), "÷");
    }

    #[test]
    fn context_round_trips_through_serde() {
        let context = Context {
            display: "42.".to_string(),
            equation: vec![Token::operand("42"), Token::Operator(Op::Multiply)],
            denomination: Denomination::Small,
            is_editing: true,
        };
        let json = serde_json::to_string(&context).unwrap();
        let decoded: Context = serde_json::from_str(&json).unwrap();
        assert_eq!(context, decoded);
    }
}
