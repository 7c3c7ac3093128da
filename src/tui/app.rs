//! TUI application state.
//!
//! Owns the state machine, the keypad highlight state, the in-session
//! history, and the quit flag. Every accepted action is exactly one state
//! transition; the caller draws once afterwards.

use crate::core::history::History;
use crate::core::{Calculator, DisplayLines};

use super::keypad::{ButtonAction, Keypad};

/// Calculator application state.
#[derive(Debug, Default)]
pub struct CalculatorApp {
    /// The core state machine.
    calc: Calculator,
    /// On-screen keypad (highlight state).
    keypad: Keypad,
    /// Completed computations this session.
    history: History,
    /// Whether the app should quit.
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new app in the empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the core state machine.
    #[must_use]
    pub fn calc(&self) -> &Calculator {
        &self.calc
    }

    /// Returns the keypad.
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the session history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns whether the app should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Produces the two-line display payload.
    #[must_use]
    pub fn screen(&self) -> DisplayLines {
        self.calc.render()
    }

    /// Applies one calculator control, highlighting the matching keypad
    /// button and recording any computation that actually fires.
    pub fn press(&mut self, action: ButtonAction) {
        self.keypad.highlight_action(action);
        match action {
            ButtonAction::Digit(d) => {
                if let Some(c) = char::from_digit(u32::from(d), 10) {
                    self.calc.append_digit(c);
                }
            }
            ButtonAction::Decimal => self.calc.append_digit('.'),
            ButtonAction::Operator(op) => {
                let staged = self.calc.staged();
                self.calc.choose_operator(op);
                // A chained compute leaves its result in the captured
                // previous operand.
                if let Some((lhs, pending, rhs)) = staged {
                    if let Ok(result) = self.calc.previous_operand().parse::<f64>() {
                        self.history.record(lhs, pending, rhs, result);
                    }
                }
            }
            ButtonAction::Equals => {
                let staged = self.calc.staged();
                self.calc.compute();
                if let Some((lhs, pending, rhs)) = staged {
                    if let Ok(result) = self.calc.current_operand().parse::<f64>() {
                        self.history.record(lhs, pending, rhs, result);
                    }
                }
            }
            ButtonAction::Percent => self.calc.percentage(),
            ButtonAction::Clear => {
                self.calc.clear();
                self.history.clear();
            }
            ButtonAction::Blank => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    fn press_keys(app: &mut CalculatorApp, keys: &str) {
        use crate::tui::input::{InputHandler, KeyAction};
        for c in keys.chars() {
            match InputHandler::map_char(c) {
                KeyAction::Button(action) => app.press(action),
                KeyAction::Quit => app.quit(),
                KeyAction::None => {}
            }
        }
    }

    // ===== Construction =====

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert_eq!(app.screen(), DisplayLines::default());
        assert!(app.history().is_empty());
        assert!(!app.should_quit());
    }

    // ===== Action dispatch =====

    #[test]
    fn test_press_digits_and_point() {
        let mut app = CalculatorApp::new();
        press_keys(&mut app, "12.5");
        assert_eq!(app.calc().current_operand(), "12.5");
    }

    #[test]
    fn test_press_full_computation() {
        let mut app = CalculatorApp::new();
        press_keys(&mut app, "5+3=");
        assert_eq!(app.screen().bottom_line, "8");
    }

    #[test]
    fn test_press_percent() {
        let mut app = CalculatorApp::new();
        press_keys(&mut app, "50%");
        assert_eq!(app.screen().bottom_line, "0.5");
    }

    #[test]
    fn test_press_clear_resets_everything() {
        let mut app = CalculatorApp::new();
        press_keys(&mut app, "5+3=c");
        assert_eq!(app.screen(), DisplayLines::default());
        assert!(app.history().is_empty());
    }

    #[test]
    fn test_press_blank_is_noop() {
        let mut app = CalculatorApp::new();
        press_keys(&mut app, "5");
        app.press(ButtonAction::Blank);
        assert_eq!(app.calc().current_operand(), "5");
    }

    // ===== Keypad highlighting =====

    #[test]
    fn test_press_highlights_button() {
        let mut app = CalculatorApp::new();
        app.press(ButtonAction::Digit(7));
        let pressed: Vec<_> = app.keypad().buttons().filter(|b| b.pressed).collect();
        assert_eq!(pressed.len(), 1);
        assert_eq!(pressed[0].label, '7');
    }

    #[test]
    fn test_highlight_moves_between_presses() {
        let mut app = CalculatorApp::new();
        app.press(ButtonAction::Digit(7));
        app.press(ButtonAction::Operator(Operator::Add));
        let pressed: Vec<_> = app.keypad().buttons().filter(|b| b.pressed).collect();
        assert_eq!(pressed.len(), 1);
        assert_eq!(pressed[0].label, '+');
    }

    // ===== History recording =====

    #[test]
    fn test_equals_records_history() {
        let mut app = CalculatorApp::new();
        press_keys(&mut app, "4/2=");
        assert_eq!(app.history().len(), 1);
        assert_eq!(app.history().last().unwrap().display(), "4 ÷ 2 = 2");
    }

    #[test]
    fn test_chained_operator_records_history() {
        let mut app = CalculatorApp::new();
        press_keys(&mut app, "5+3+2=");
        assert_eq!(app.history().len(), 2);
        let displays: Vec<String> = app.history().iter().map(|e| e.display()).collect();
        assert_eq!(displays, vec!["5 + 3 = 8", "8 + 2 = 10"]);
    }

    #[test]
    fn test_noop_equals_records_nothing() {
        let mut app = CalculatorApp::new();
        press_keys(&mut app, "5=");
        assert!(app.history().is_empty());
    }

    #[test]
    fn test_division_by_zero_recorded_as_infinite() {
        let mut app = CalculatorApp::new();
        press_keys(&mut app, "4/0=");
        assert!(app.history().last().unwrap().result.is_infinite());
    }

    // ===== Quit =====

    #[test]
    fn test_quit_flag() {
        let mut app = CalculatorApp::new();
        assert!(!app.should_quit());
        app.quit();
        assert!(app.should_quit());
    }
}
