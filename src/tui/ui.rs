//! TUI rendering: two-line display, keypad, history panel, help sidebar.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Application title.
pub const APP_TITLE: &str = " Pocket Calculator ";

/// Key bindings shown in the help sidebar.
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Enter digits"),
    ("+-*/", "Operator"),
    ("Enter", "Equals"),
    ("=", "Equals"),
    ("%", "Percent"),
    ("Esc/c", "Clear"),
    ("q", "Quit"),
];

/// Renders the calculator UI to the frame.
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUi::new(app), area);
}

/// Splits the frame into main, keypad, and help columns.
#[must_use]
pub fn horizontal_chunks(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(30),    // Display + history
            Constraint::Length(22), // Keypad
            Constraint::Length(20), // Help sidebar
        ])
        .split(area)
        .to_vec()
}

/// Returns the keypad rectangle for a frame of the given area, for mouse
/// hit-testing in the event loop.
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    horizontal_chunks(area)[1]
}

/// Calculator UI widget.
#[derive(Debug)]
pub struct CalculatorUi<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUi<'a> {
    /// Creates the widget borrowing the app state.
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Splits the main column into display and history rows.
    fn main_chunks(&self, area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Two display lines + border
                Constraint::Min(3),    // History
            ])
            .split(area)
            .to_vec()
    }

    /// Renders the two-line, right-aligned display.
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let screen = self.app.screen();

        let lines = vec![
            Line::from(Span::styled(
                screen.top_line,
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                screen.bottom_line,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    /// Renders the session history, newest first.
    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .app
            .history()
            .iter_rev()
            .take(10)
            .map(|entry| {
                ListItem::new(Span::styled(
                    entry.display(),
                    Style::default().fg(Color::Gray),
                ))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" History (newest first) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    /// Renders the help sidebar.
    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>6}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(APP_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let columns = horizontal_chunks(area);
        if columns.len() < 3 {
            return;
        }

        let rows = self.main_chunks(columns[0]);
        if rows.len() >= 2 {
            self.render_display(rows[0], buf);
            self.render_history(rows[1], buf);
        }

        KeypadWidget::new(self.app.keypad()).render(columns[1], buf);
        self.render_help(columns[2], buf);
    }
}
