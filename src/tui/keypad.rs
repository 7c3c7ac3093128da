//! On-screen keypad for the calculator.
//!
//! The keypad is the button half of the input adapter: each button carries
//! a typed action, buttons can be hit-tested for mouse clicks, and the
//! most recently used control is highlighted.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::Operator;

/// Action a keypad button performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Append a digit (0-9) to the current operand.
    Digit(u8),
    /// Append the decimal point.
    Decimal,
    /// Choose a binary operator.
    Operator(Operator),
    /// Collapse the pending computation.
    Equals,
    /// Replace the current operand with one hundredth of its value.
    Percent,
    /// Reset the calculator.
    Clear,
    /// Spacer cell with no behavior.
    Blank,
}

/// A single keypad button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The symbol on the button.
    pub label: char,
    /// Whether the button is currently highlighted.
    pub pressed: bool,
    /// The action this button performs.
    pub action: ButtonAction,
}

impl KeypadButton {
    /// Creates a digit button.
    #[must_use]
    pub fn digit(d: u8) -> Self {
        Self {
            label: char::from_digit(u32::from(d), 10).unwrap_or('?'),
            pressed: false,
            action: ButtonAction::Digit(d),
        }
    }

    /// Creates an operator button labeled with the display symbol.
    #[must_use]
    pub fn operator(op: Operator) -> Self {
        Self {
            label: op.symbol(),
            pressed: false,
            action: ButtonAction::Operator(op),
        }
    }

    /// Creates the decimal point button.
    #[must_use]
    pub fn decimal() -> Self {
        Self {
            label: '.',
            pressed: false,
            action: ButtonAction::Decimal,
        }
    }

    /// Creates the equals button.
    #[must_use]
    pub fn equals() -> Self {
        Self {
            label: '=',
            pressed: false,
            action: ButtonAction::Equals,
        }
    }

    /// Creates the percent button.
    #[must_use]
    pub fn percent() -> Self {
        Self {
            label: '%',
            pressed: false,
            action: ButtonAction::Percent,
        }
    }

    /// Creates the clear button.
    #[must_use]
    pub fn clear() -> Self {
        Self {
            label: 'C',
            pressed: false,
            action: ButtonAction::Clear,
        }
    }

    /// Creates a spacer cell.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            label: ' ',
            pressed: false,
            action: ButtonAction::Blank,
        }
    }

    /// Sets the highlight state.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad layout, a 5x4 grid:
/// ```text
/// [ 7 ] [ 8 ] [ 9 ] [ ÷ ]
/// [ 4 ] [ 5 ] [ 6 ] [ × ]
/// [ 1 ] [ 2 ] [ 3 ] [ - ]
/// [ 0 ] [ . ] [ = ] [ + ]
/// [ C ] [ % ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order.
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard four-function keypad.
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 1: 7 8 9 ÷
            KeypadButton::digit(7),
            KeypadButton::digit(8),
            KeypadButton::digit(9),
            KeypadButton::operator(Operator::Divide),
            // Row 2: 4 5 6 ×
            KeypadButton::digit(4),
            KeypadButton::digit(5),
            KeypadButton::digit(6),
            KeypadButton::operator(Operator::Multiply),
            // Row 3: 1 2 3 -
            KeypadButton::digit(1),
            KeypadButton::digit(2),
            KeypadButton::digit(3),
            KeypadButton::operator(Operator::Subtract),
            // Row 4: 0 . = +
            KeypadButton::digit(0),
            KeypadButton::decimal(),
            KeypadButton::equals(),
            KeypadButton::operator(Operator::Add),
            // Row 5: C %
            KeypadButton::clear(),
            KeypadButton::percent(),
            KeypadButton::blank(),
            KeypadButton::blank(),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of cells (spacers included).
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions as (rows, cols).
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index.
    #[must_use]
    pub fn button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column.
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the index of the first button carrying `action`.
    #[must_use]
    pub fn find_by_action(&self, action: ButtonAction) -> Option<usize> {
        if action == ButtonAction::Blank {
            return None;
        }
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Highlights a button by index.
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Clears every highlight.
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights only the button carrying `action`.
    pub fn highlight_action(&mut self, action: ButtonAction) {
        self.release_all();
        if let Some(idx) = self.find_by_action(action) {
            self.press_button(idx);
        }
    }

    /// Iterates over all buttons.
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Iterates over buttons with their (row, col) positions.
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position inside `area` to a button index.
    ///
    /// Returns `None` for clicks outside the area, on the border, or on a
    /// spacer cell.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border is 1 char on each side.
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        if row >= self.rows || col >= self.cols {
            return None;
        }

        let index = row * self.cols + col;
        match self.buttons.get(index) {
            Some(btn) if btn.action != ButtonAction::Blank => Some(index),
            _ => None,
        }
    }
}

/// Keypad rendering widget.
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a widget borrowing the keypad state.
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < 4 || inner.height < 5 {
            return; // Too small to render
        }

        let btn_width = inner.width / self.keypad.cols as u16;
        let btn_height = inner.height / self.keypad.rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            if btn.action == ButtonAction::Blank {
                continue;
            }

            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                match btn.action {
                    ButtonAction::Digit(_) | ButtonAction::Decimal => {
                        Style::default().fg(Color::White)
                    }
                    ButtonAction::Operator(_) | ButtonAction::Percent => {
                        Style::default().fg(Color::Yellow)
                    }
                    ButtonAction::Equals => Style::default().fg(Color::Green),
                    ButtonAction::Clear => Style::default().fg(Color::Red),
                    ButtonAction::Blank => Style::default(),
                }
            };

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label);
                let label_x = x + (btn_width.saturating_sub(3)) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}
