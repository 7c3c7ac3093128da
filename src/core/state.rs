//! The calculator state machine: two operand buffers and a pending
//! operator, mutated by five total operations.
//!
//! Operands are raw strings during entry, not numbers, so in-progress
//! typing (trailing decimal point, leading zeros) displays exactly as
//! typed. They are parsed only at the moment of computation. Every guard
//! is a silent no-op; there is no error state and nothing is fatal.

use serde::{Deserialize, Serialize};

use super::format::{fmt_number, format_operand};
use super::operator::Operator;

/// Maximum operand buffer length during entry, decimal point included.
pub const MAX_OPERAND_LEN: usize = 9;

/// Implicit machine state, derived from the field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No operands entered yet (also the post-`clear` state).
    Empty,
    /// Typing the first operand; no operator chosen.
    EnteringFirst,
    /// First operand captured and an operator pending; second not started.
    OperatorChosen,
    /// Typing the second operand.
    EnteringSecond,
}

/// The two-line display payload consumed by rendering layers.
///
/// `bottom_line` is the formatted current operand; `top_line` is empty
/// when no operator is pending, otherwise the formatted previous operand
/// followed by the operator symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLines {
    /// Pending-operation line, e.g. `"1,234 +"`.
    pub top_line: String,
    /// Current operand line, e.g. `"56.7"`.
    pub bottom_line: String,
}

/// The calculator state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    /// Operand currently being typed (or holding the last result).
    current: String,
    /// Operand captured when the pending operator was chosen.
    previous: String,
    /// Pending binary operator, if any.
    operator: Option<Operator>,
}

impl Calculator {
    /// Creates a calculator in the `Empty` phase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current operand buffer as typed.
    #[must_use]
    pub fn current_operand(&self) -> &str {
        &self.current
    }

    /// Returns the captured previous operand (empty when no operator is
    /// pending).
    #[must_use]
    pub fn previous_operand(&self) -> &str {
        &self.previous
    }

    /// Returns the pending operator, if any.
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Returns the implicit machine state.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.current.is_empty(), self.operator.is_some()) {
            (true, false) => Phase::Empty,
            (false, false) => Phase::EnteringFirst,
            (true, true) => Phase::OperatorChosen,
            (false, true) => Phase::EnteringSecond,
        }
    }

    /// Appends a digit or the decimal point to the current operand.
    ///
    /// No-ops when the token is not a digit or `'.'`, when a second
    /// decimal point is typed, or when the buffer already holds
    /// [`MAX_OPERAND_LEN`] characters.
    pub fn append_digit(&mut self, token: char) {
        if !token.is_ascii_digit() && token != '.' {
            return;
        }
        if token == '.' && self.current.contains('.') {
            return;
        }
        if self.current.len() >= MAX_OPERAND_LEN {
            return;
        }
        self.current.push(token);
    }

    /// Chooses (or replaces) the pending binary operator.
    ///
    /// With an empty current buffer this replaces an already-pending
    /// operator and is otherwise a no-op. With a non-empty buffer, a
    /// pending computation is collapsed first (chained, left-to-right, no
    /// precedence), then the buffer is captured as the previous operand.
    pub fn choose_operator(&mut self, op: Operator) {
        if self.current.is_empty() {
            if self.operator.is_some() {
                self.operator = Some(op);
            }
            return;
        }
        if !self.previous.is_empty() {
            self.compute();
        }
        self.operator = Some(op);
        self.previous = std::mem::take(&mut self.current);
    }

    /// Collapses `previous OP current` into the current operand.
    ///
    /// No-ops unless an operator is pending and both buffers parse as
    /// numbers. Division by zero is not guarded; a non-finite result is
    /// written back in textual form and stays displayable.
    pub fn compute(&mut self) {
        let Some((lhs, op, rhs)) = self.staged() else {
            return;
        };
        self.current = fmt_number(op.apply(lhs, rhs));
        self.previous.clear();
        self.operator = None;
    }

    /// Replaces the current operand with one hundredth of its value.
    ///
    /// Terminal unary operation: any pending operator and previous
    /// operand are discarded, matching `compute`'s post-state. No-ops
    /// when the current buffer does not parse.
    pub fn percentage(&mut self) {
        let Ok(value) = self.current.parse::<f64>() else {
            return;
        };
        self.current = fmt_number(value * 0.01);
        self.previous.clear();
        self.operator = None;
    }

    /// Unconditionally resets to the `Empty` phase.
    pub fn clear(&mut self) {
        self.current.clear();
        self.previous.clear();
        self.operator = None;
    }

    /// Returns the computation `compute` would perform, if its guards
    /// pass: both operands parsed, with the pending operator.
    #[must_use]
    pub fn staged(&self) -> Option<(f64, Operator, f64)> {
        let op = self.operator?;
        let lhs = self.previous.parse::<f64>().ok()?;
        let rhs = self.current.parse::<f64>().ok()?;
        Some((lhs, op, rhs))
    }

    /// Produces the display payload for the current state.
    #[must_use]
    pub fn render(&self) -> DisplayLines {
        let top_line = match self.operator {
            Some(op) => format!("{} {}", format_operand(&self.previous), op.symbol()),
            None => String::new(),
        };
        DisplayLines {
            top_line,
            bottom_line: format_operand(&self.current),
        }
    }
}
