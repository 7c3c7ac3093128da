//! Unified calculator driver.
//!
//! Write a scenario once as a key script and run it against any front-end:
//! [`CoreDriver`] taps the state machine directly through the recognized-key
//! table, while [`TuiDriver`] routes every key through the TUI app and its
//! input mapping. Integration tests run the same scripts on both.

use crate::core::{Calculator, DisplayLines, Operator};

/// Scriptable calculator interface.
pub trait CalculatorDriver {
    /// Feeds one keystroke. Unrecognized keys are ignored.
    fn tap(&mut self, key: char);

    /// Returns the rendered two-line display.
    fn screen(&self) -> DisplayLines;

    /// Resets the calculator.
    fn reset(&mut self);

    /// Feeds a sequence of keystrokes.
    fn script(&mut self, keys: &str) {
        for key in keys.chars() {
            self.tap(key);
        }
    }
}

/// Driver over the bare state machine.
#[derive(Debug, Default)]
pub struct CoreDriver {
    calc: Calculator,
}

impl CoreDriver {
    /// Creates a driver with an empty calculator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying state machine.
    #[must_use]
    pub fn calc(&self) -> &Calculator {
        &self.calc
    }
}

impl CalculatorDriver for CoreDriver {
    fn tap(&mut self, key: char) {
        match key {
            '0'..='9' | '.' => self.calc.append_digit(key),
            '=' => self.calc.compute(),
            '%' => self.calc.percentage(),
            'c' | 'C' => self.calc.clear(),
            other => {
                if let Ok(op) = Operator::try_from(other) {
                    self.calc.choose_operator(op);
                }
            }
        }
    }

    fn screen(&self) -> DisplayLines {
        self.calc.render()
    }

    fn reset(&mut self) {
        self.calc.clear();
    }
}

/// Driver over the TUI front-end.
#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

#[cfg(feature = "tui")]
mod tui_driver {
    use super::{CalculatorDriver, DisplayLines};
    use crate::tui::{CalculatorApp, InputHandler, KeyAction};

    /// Drives the calculator through [`CalculatorApp`] and the keyboard
    /// mapping, so scripts exercise the whole input path.
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a driver with a fresh app.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns the underlying app.
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn tap(&mut self, key: char) {
            match InputHandler::map_char(key) {
                KeyAction::Button(action) => self.app.press(action),
                KeyAction::Quit => self.app.quit(),
                KeyAction::None => {}
            }
        }

        fn screen(&self) -> DisplayLines {
            self.app.screen()
        }

        fn reset(&mut self) {
            self.tap('c');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CoreDriver tests =====

    #[test]
    fn test_core_driver_script() {
        let mut driver = CoreDriver::new();
        driver.script("5+3=");
        assert_eq!(driver.screen().bottom_line, "8");
    }

    #[test]
    fn test_core_driver_ignores_unknown_keys() {
        let mut driver = CoreDriver::new();
        driver.script("5a#+z3=");
        assert_eq!(driver.screen().bottom_line, "8");
    }

    #[test]
    fn test_core_driver_reset() {
        let mut driver = CoreDriver::new();
        driver.script("5+3");
        driver.reset();
        assert_eq!(driver.screen(), DisplayLines::default());
    }

    #[test]
    fn test_core_driver_display_operators() {
        let mut driver = CoreDriver::new();
        driver.script("6×7=");
        assert_eq!(driver.screen().bottom_line, "42");
    }

    // ===== TuiDriver tests =====

    #[cfg(feature = "tui")]
    #[test]
    fn test_tui_driver_script() {
        let mut driver = TuiDriver::new();
        driver.script("5+3=");
        assert_eq!(driver.screen().bottom_line, "8");
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_tui_driver_quit_key() {
        let mut driver = TuiDriver::new();
        driver.tap('q');
        assert!(driver.app().should_quit());
    }

    // ===== Cross-driver agreement =====

    #[cfg(feature = "tui")]
    #[test]
    fn test_drivers_agree_on_scripts() {
        let scripts = ["5+3+2=", "5+-2=", "4/0=", "50%", "1.2.3", "5=", "+5="];
        for script in scripts {
            let mut core = CoreDriver::new();
            let mut tui = TuiDriver::new();
            core.script(script);
            tui.script(script);
            assert_eq!(core.screen(), tui.screen(), "script {script:?} diverged");
        }
    }
}
