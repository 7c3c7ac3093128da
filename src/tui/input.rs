//! Keyboard half of the input adapter.
//!
//! Maps crossterm key events onto the same semantic actions the keypad
//! buttons carry. Unrecognized keys map to [`KeyAction::None`] and are
//! ignored by the caller.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::keypad::ButtonAction;
use crate::core::Operator;

/// Action resolved from a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// A calculator control, identical to the keypad's action set.
    Button(ButtonAction),
    /// Quit the application.
    Quit,
    /// Ignored input.
    None,
}

/// Maps key events to actions.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::map_char(c),
            KeyCode::Enter => KeyAction::Button(ButtonAction::Equals),
            KeyCode::Esc => KeyAction::Button(ButtonAction::Clear),
            _ => KeyAction::None,
        }
    }

    /// Maps a typed character to an action.
    ///
    /// Recognized: the ten digits and `.`; the operator symbols in both
    /// their keyboard (`* /`) and display (`× ÷`) forms; `=`, `%`, and
    /// `c`/`C` for clear; `q` to quit.
    #[must_use]
    pub fn map_char(c: char) -> KeyAction {
        match c {
            '0'..='9' => KeyAction::Button(ButtonAction::Digit(c as u8 - b'0')),
            '.' => KeyAction::Button(ButtonAction::Decimal),
            '=' => KeyAction::Button(ButtonAction::Equals),
            '%' => KeyAction::Button(ButtonAction::Percent),
            'c' | 'C' => KeyAction::Button(ButtonAction::Clear),
            'q' => KeyAction::Quit,
            other => match Operator::try_from(other) {
                Ok(op) => KeyAction::Button(ButtonAction::Operator(op)),
                Err(_) => KeyAction::None,
            },
        }
    }
}
