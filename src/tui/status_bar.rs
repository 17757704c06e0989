//! Status bar widget for displaying status messages and key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::controls::Role;
use crate::editor::ControlId;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: message line on top, key hints below
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let first_line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.clone()),
            ])
        } else if !state.status_message.is_empty() {
            Line::from(state.status_message.clone())
        } else {
            Line::from(Span::styled(
                Self::focus_description(state),
                Style::default().fg(theme.text_secondary),
            ))
        };

        let status = Paragraph::new(vec![first_line, Self::hints_line(state, theme)])
            .style(Style::default().fg(theme.text).bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Accessible name and value of the focused control.
    fn focus_description(state: &AppState) -> String {
        let focused = state.focused_control();
        let surfaces = state.editor.tab_order();
        let described: Vec<String> = surfaces
            .iter()
            .filter(|(id, _)| *id == focused)
            .map(|(_, s)| match (s.role, &s.value_text, s.checked) {
                (_, Some(value), _) => value.clone(),
                (Role::Button, None, Some(true)) => format!("{} (selected)", s.title),
                (Role::Switch, None, Some(checked)) => {
                    format!("{} {}", s.title, if checked { "on" } else { "off" })
                }
                _ => s.title.clone(),
            })
            .filter(|text| !text.is_empty())
            .collect();
        described.join("  ")
    }

    /// Key hints for the current context.
    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints: &[(&str, &str)] = if state.color_entry.is_some() {
            &[("Enter", "Apply"), ("Esc", "Cancel")]
        } else if state.error_message.is_some() {
            &[("Enter/Esc", "Dismiss")]
        } else {
            match state.focused_control() {
                ControlId::Opacity => &[
                    ("←/→", "Step"),
                    ("PgUp/PgDn", "Page"),
                    ("Home/End", "0%/100%"),
                    ("Tab", "Next"),
                    ("j/k", "Scroll"),
                    ("w", "Write"),
                    ("q", "Quit"),
                ],
                ControlId::CardRadius | ControlId::AvatarShape => &[
                    ("←/→", "Choose"),
                    ("Home/End", "First/Last"),
                    ("Tab", "Next"),
                    ("1-5", "Tool"),
                    ("w", "Write"),
                    ("q", "Quit"),
                ],
                ControlId::CardShadow => &[
                    ("Space", "Toggle"),
                    ("Tab", "Next"),
                    ("g/G", "Top/Bottom"),
                    ("w", "Write"),
                    ("q", "Quit"),
                ],
                _ => &[
                    ("Enter", "Pick color"),
                    ("Tab", "Next"),
                    ("j/k", "Scroll"),
                    ("w", "Write"),
                    ("q", "Quit"),
                ],
            }
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                (*key).to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                (*action).to_string(),
                Style::default().fg(theme.text_muted),
            ));
        }

        Line::from(spans)
    }
}
