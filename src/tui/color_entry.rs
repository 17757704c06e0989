//! Hex entry dialog opened by a color proxy.
//!
//! Stands in for the platform color dialog: the typed value is only handed
//! back to the editor once it parses as `#RRGGBB`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::{ColorField, RgbColor};
use crate::tui::theme::Theme;
use crate::tui::Component;

/// Longest input accepted (`#` plus six digits).
const MAX_INPUT_LEN: usize = 7;

/// Events emitted by the color entry dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorEntryEvent {
    /// User confirmed a valid hex color
    Confirmed(String),
    /// User closed the dialog without committing
    Cancelled,
}

/// Color entry dialog state
#[derive(Debug, Clone)]
pub struct ColorEntry {
    field: ColorField,
    label: String,
    input: String,
    error: Option<String>,
}

impl ColorEntry {
    /// Opens the dialog for `field`, prefilled with its current value.
    pub fn new(field: ColorField, label: impl Into<String>, current: RgbColor) -> Self {
        Self {
            field,
            label: label.into(),
            input: current.to_hex(),
            error: None,
        }
    }

    /// Field being edited.
    #[must_use]
    pub const fn field(&self) -> ColorField {
        self.field
    }

    /// Current input buffer.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    fn parsed(&self) -> Option<RgbColor> {
        RgbColor::from_hex(&self.input).ok()
    }
}

impl Component for ColorEntry {
    type Event = ColorEntryEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if (c.is_ascii_hexdigit() || c == '#') && self.input.len() < MAX_INPUT_LEN {
                    self.input.push(c);
                }
                self.error = None;
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.error = None;
            }
            KeyCode::Enter => match RgbColor::from_hex(&self.input) {
                Ok(color) => return Some(ColorEntryEvent::Confirmed(color.to_hex())),
                Err(e) => self.error = Some(format!("{e:#}")),
            },
            KeyCode::Esc => return Some(ColorEntryEvent::Cancelled),
            _ => {}
        }
        None
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(50, 40, area);

        frame.render_widget(Clear, dialog_area);
        let background = Block::default().style(Style::default().bg(theme.background));
        frame.render_widget(background, dialog_area);

        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Input field + swatch
                Constraint::Min(2),    // Error message (if any)
                Constraint::Length(2), // Help text
            ])
            .split(dialog_area);

        let title = Paragraph::new(format!("{} color", self.label))
            .style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.background)),
            );
        frame.render_widget(title, chunks[0]);

        let swatch = self.parsed().map_or_else(
            || Span::styled("      ", Style::default().fg(theme.text_muted)),
            |color| Span::styled("      ", Style::default().bg(color.to_ratatui_color())),
        );
        let input = Paragraph::new(Line::from(vec![
            Span::styled(format!("{}█ ", self.input), Style::default().fg(theme.text)),
            swatch,
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Hex ")
                .style(Style::default().bg(theme.background)),
        );
        frame.render_widget(input, chunks[1]);

        if let Some(ref error) = self.error {
            let error_widget = Paragraph::new(error.as_str())
                .style(Style::default().fg(theme.error))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Error ")
                        .style(Style::default().bg(theme.background)),
                )
                .wrap(Wrap { trim: true });
            frame.render_widget(error_widget, chunks[2]);
        }

        let key_style = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD);
        let help = Paragraph::new(Line::from(vec![
            Span::styled("Enter", key_style),
            Span::raw(" Apply  "),
            Span::styled("Esc", key_style),
            Span::raw(" Cancel"),
        ]))
        .style(Style::default().fg(theme.text).bg(theme.background));
        frame.render_widget(help, chunks[3]);
    }
}

/// Helper to create a centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn entry() -> ColorEntry {
        ColorEntry::new(ColorField::Title, "Title", RgbColor::BLACK)
    }

    #[test]
    fn test_prefilled_with_current() {
        assert_eq!(entry().input(), "#000000");
    }

    #[test]
    fn test_confirm_valid_hex() {
        let mut entry = entry();
        for _ in 0..6 {
            entry.handle_input(key(KeyCode::Backspace));
        }
        for c in "ff8800".chars() {
            entry.handle_input(key(KeyCode::Char(c)));
        }
        assert_eq!(
            entry.handle_input(key(KeyCode::Enter)),
            Some(ColorEntryEvent::Confirmed("#FF8800".to_string()))
        );
    }

    #[test]
    fn test_invalid_hex_stays_open() {
        let mut entry = entry();
        entry.handle_input(key(KeyCode::Backspace));
        assert_eq!(entry.handle_input(key(KeyCode::Enter)), None);
        assert!(entry.error.is_some());
        // Non-hex characters are dropped
        entry.handle_input(key(KeyCode::Char('z')));
        assert_eq!(entry.input(), "#00000");
    }

    #[test]
    fn test_escape_cancels() {
        assert_eq!(
            entry().handle_input(key(KeyCode::Esc)),
            Some(ColorEntryEvent::Cancelled)
        );
    }
}
