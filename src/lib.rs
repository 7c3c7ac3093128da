//! Pocket Calculator
//!
//! A four-function calculator built around a small state machine: two
//! operand buffers held as raw strings, one pending operator, and a
//! display formatter that groups the integer digits with thousands
//! separators while leaving typed fractional digits untouched.
//!
//! Every guard in the state machine is a silent no-op. There is no error
//! state: the worst outcome of any input is that the display does not
//! change, and division by zero flows through as a displayable
//! `inf`/`NaN`.
//!
//! # Example
//!
//! ```rust
//! use pocket_calculator::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.append_digit('5');
//! calc.choose_operator(Operator::Add);
//! calc.append_digit('3');
//! calc.compute();
//! assert_eq!(calc.render().bottom_line, "8");
//! ```
//!
//! The default `tui` feature adds a ratatui/crossterm front-end with a
//! clickable keypad; the core builds with no features at all.

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::core::format::{fmt_number, format_operand};
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::{
        Calculator, DisplayLines, Operator, Phase, UnknownOperator, MAX_OPERAND_LEN,
    };
    pub use crate::driver::{CalculatorDriver, CoreDriver};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    #[cfg(feature = "tui")]
    pub use crate::tui::{ButtonAction, CalculatorApp, InputHandler, KeyAction, Keypad};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_state_machine() {
        let mut calc = Calculator::new();
        calc.append_digit('4');
        calc.choose_operator(Operator::Divide);
        calc.append_digit('2');
        calc.compute();
        assert_eq!(calc.current_operand(), "2");
        assert_eq!(calc.phase(), Phase::EnteringFirst);
    }

    #[test]
    fn test_prelude_driver() {
        let mut driver = CoreDriver::new();
        driver.script("1234.5");
        assert_eq!(driver.screen().bottom_line, "1,234.5");
    }

    #[test]
    fn test_prelude_formatter() {
        assert_eq!(format_operand("1234.5"), "1,234.5");
        assert_eq!(fmt_number(0.5), "0.5");
    }

    #[test]
    fn test_prelude_history() {
        let mut history = History::new();
        history.record(10.0, Operator::Divide, 2.0, 5.0);
        assert_eq!(history.last().unwrap().display(), "10 ÷ 2 = 5");
    }
}
