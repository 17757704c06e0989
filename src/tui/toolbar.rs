//! Card-styling toolbar widget.
//!
//! Drawn from the controller's surface tree: every element with a non-zero
//! opacity gets a row segment, so the hidden native color inputs never appear.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::controls::{Role, Surface};
use crate::editor::{ControlId, EditorController};

/// Cells in the opacity bar.
const SLIDER_CELLS: usize = 20;

/// Toolbar widget
pub struct Toolbar;

impl Toolbar {
    /// Render the toolbar with the focused control highlighted
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let lines = control_lines(&state.editor, state.focused_control(), theme);

        let title = format!(" {} ", state.editor.nav().active());
        let toolbar = Paragraph::new(lines)
            .style(Style::default().fg(theme.text).bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(theme.primary)),
            );
        f.render_widget(toolbar, area);
    }
}

/// One line per control, blank lines between them.
fn control_lines(
    editor: &EditorController,
    focused: ControlId,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let surfaces = editor.surfaces();
    let mut lines = Vec::new();

    for id in ControlId::ALL {
        let is_focused = id == focused;
        let marker = if is_focused { "▶ " } else { "  " };
        let label_style = if is_focused {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_secondary)
        };

        let mut spans = vec![Span::styled(
            format!("{marker}{:<8}", editor.label(id)),
            label_style,
        )];
        for surface in surfaces
            .iter()
            .filter(|(owner, s)| *owner == id && s.opacity > 0.0)
            .map(|(_, s)| s)
        {
            spans.extend(surface_spans(editor, id, surface, theme));
        }

        let mut line = Line::from(spans);
        if is_focused {
            line = line.style(Style::default().bg(theme.highlight_bg));
        }
        lines.push(line);
        lines.push(Line::from(""));
    }

    lines
}

fn surface_spans(
    editor: &EditorController,
    id: ControlId,
    surface: &Surface,
    theme: &Theme,
) -> Vec<Span<'static>> {
    let model = editor.snapshot();
    match surface.role {
        Role::Slider => {
            let filled = (model.card_opacity() * SLIDER_CELLS as f64).round() as usize;
            vec![
                Span::styled("█".repeat(filled), Style::default().fg(theme.primary)),
                Span::styled(
                    "░".repeat(SLIDER_CELLS - filled.min(SLIDER_CELLS)),
                    Style::default().fg(theme.text_muted),
                ),
                Span::raw(format!(" {:>3}%", model.opacity_percent())),
            ]
        }
        Role::Button => {
            let style = if surface.checked == Some(true) {
                Style::default()
                    .fg(theme.background)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            vec![Span::styled(format!(" {} ", surface.title), style), Span::raw(" ")]
        }
        Role::Switch => {
            let (knob, style) = if surface.checked == Some(true) {
                ("━━● On", Style::default().fg(theme.success))
            } else {
                ("●── Off", Style::default().fg(theme.text_muted))
            };
            vec![Span::styled(knob, style)]
        }
        Role::ColorProxy => {
            let Some(field) = id.color_field() else {
                return Vec::new();
            };
            let picker = editor.picker(field);
            // Proxy diameter in cells: two columns per 16px
            let width = usize::from(picker.size().diameter_px() / 8).max(2);
            vec![
                Span::styled(
                    " ".repeat(width),
                    Style::default().bg(picker.fill().to_ratatui_color()),
                ),
                Span::raw(" "),
                Span::styled(
                    surface.value_text.clone().unwrap_or_default(),
                    Style::default().fg(theme.text),
                ),
            ]
        }
        // Hidden inputs are filtered out by opacity before reaching here
        Role::ColorInput => Vec::new(),
    }
}
