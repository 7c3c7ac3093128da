//! Terminal front-end: application state, keyboard/keypad input adapters,
//! and rendering.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{ButtonAction, Keypad, KeypadButton, KeypadWidget};
pub use ui::{horizontal_chunks, keypad_area, render, APP_TITLE, HELP_SHORTCUTS};
