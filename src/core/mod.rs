//! Core calculator: state machine, operators, display formatting,
//! computation history.
//!
//! Everything here is frontend-agnostic and builds with no optional
//! features.

pub mod format;
pub mod history;
mod operator;
mod state;

pub use operator::{Operator, UnknownOperator};
pub use state::{Calculator, DisplayLines, Phase, MAX_OPERAND_LEN};
