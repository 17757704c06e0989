//! Terminal editor: card-styling toolbar next to a live mobile preview.
//!
//! This module contains the main TUI loop, `AppState`, event handling, and
//! the Ratatui widgets.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]

pub mod color_entry;
pub mod component;
pub mod status_bar;
pub mod store_preview;
pub mod theme;
pub mod toolbar;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::controls::ControlInput;
use crate::editor::{ControlId, EditorController};
use crate::preview::EditorTool;

pub use color_entry::{ColorEntry, ColorEntryEvent};
pub use component::Component;
pub use status_bar::StatusBar;
pub use store_preview::StorePreview;
pub use theme::Theme;
pub use toolbar::Toolbar;

/// Preview scroll distance for `j` / `k`, in pixels.
pub const SCROLL_STEP_PX: i64 = 40;

/// Application state - single source of truth
///
/// All widgets read from this state immutably. Only the key handlers modify it.
pub struct AppState {
    /// Style session
    pub editor: EditorController,
    /// Snapshot file written by `w`
    pub snapshot_path: Option<PathBuf>,
    /// Whether the model changed since the last write
    pub dirty: bool,
    /// Current UI theme
    pub theme: Theme,
    /// Index into the focusable controls
    pub focus: usize,
    /// Open hex entry dialog (if any)
    pub color_entry: Option<ColorEntry>,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,
    /// Set after a quit attempt with unsaved changes
    pub quit_armed: bool,
    /// Set when the main loop should exit
    pub should_quit: bool,
    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Creates the state for an editing session.
    #[must_use]
    pub fn new(editor: EditorController, snapshot_path: Option<PathBuf>, config: Config) -> Self {
        Self {
            editor,
            snapshot_path,
            dirty: false,
            theme: Theme::from_mode(config.ui.theme_mode),
            focus: 0,
            color_entry: None,
            status_message: String::new(),
            error_message: None,
            quit_armed: false,
            should_quit: false,
            config,
        }
    }

    /// Control that currently has keyboard focus.
    #[must_use]
    pub fn focused_control(&self) -> ControlId {
        let controls = self.editor.focusable_controls();
        controls
            .get(self.focus % controls.len().max(1))
            .copied()
            .unwrap_or(ControlId::Opacity)
    }

    /// Moves focus forward (`1`) or backward (`-1`), wrapping.
    pub fn move_focus(&mut self, delta: isize) {
        let count = self.editor.focusable_controls().len().max(1) as isize;
        self.focus = (self.focus as isize + delta).rem_euclid(count) as usize;
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Sends one input to a control and reports the outcome.
    pub fn send_input(&mut self, id: ControlId, input: ControlInput) {
        match self.editor.handle_input(id, input) {
            Ok(outcome) if outcome.ignored => {}
            Ok(outcome) => {
                self.dirty |= outcome.changed;
                let label = self.editor.label(id).to_string();
                let message = if outcome.clamped {
                    format!("{label}: already at the limit")
                } else {
                    format!("{label}: {}", self.describe(id))
                };
                self.set_status(message);
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn describe(&self, id: ControlId) -> String {
        let model = self.editor.snapshot();
        match id {
            ControlId::Opacity => format!("{}%", model.opacity_percent()),
            ControlId::CardRadius => model.card_radius().label().to_string(),
            ControlId::AvatarShape => model.avatar_shape().label().to_string(),
            ControlId::CardShadow => (if model.card_shadow() { "on" } else { "off" }).to_string(),
            other => other
                .color_field()
                .map(|field| model.color(field).to_hex())
                .unwrap_or_default(),
        }
    }

    /// Activates the focused control. Color proxies open the hex entry dialog.
    pub fn activate_focused(&mut self) {
        let id = self.focused_control();
        match id.color_field() {
            Some(field) => {
                let label = self.editor.label(id).to_string();
                let activation = self.editor.click_color_proxy(field);
                self.color_entry = Some(ColorEntry::new(field, label, activation.current));
            }
            None => self.send_input(id, ControlInput::Activate),
        }
    }

    /// Writes the current model to the snapshot file.
    ///
    /// # Errors
    ///
    /// Returns error if no snapshot file is set or it cannot be written.
    pub fn save_snapshot(&mut self) -> Result<()> {
        let path = self
            .snapshot_path
            .clone()
            .context("No snapshot file: start the editor with --snapshot FILE")?;
        crate::cli::common::write_snapshot(&path, self.editor.snapshot())
            .context(format!("Failed to save snapshot: {}", path.display()))?;
        self.dirty = false;
        self.quit_armed = false;
        tracing::info!(path = %path.display(), "snapshot written");
        self.set_status(format!("Saved {}", path.display()));
        Ok(())
    }
}

/// Setup terminal for TUI
///
/// # Errors
///
/// Returns error if the terminal cannot be switched to raw / alternate mode.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
///
/// # Errors
///
/// Returns error if the terminal modes cannot be restored.
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
///
/// # Errors
///
/// Returns error if drawing or reading terminal events fails.
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key)? {
                    break;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(12),   // Toolbar + preview
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);

    let main = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    Toolbar::render(f, main[0], state);
    StorePreview::render(f, main[1], state);

    StatusBar::render(f, chunks[2], state, &state.theme);

    if let Some(entry) = &state.color_entry {
        entry.render(f, f.area(), &state.theme);
    }

    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let dirty_indicator = if state.dirty { " *" } else { "" };
    let file = state
        .snapshot_path
        .as_ref()
        .map_or_else(|| "(unsaved session)".to_string(), |p| p.display().to_string());
    let title = format!(
        " {} - {} - {}{}",
        crate::constants::APP_NAME,
        state.editor.nav().active(),
        file,
        dirty_indicator
    );

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = color_entry::centered_rect(60, 30, f.area());
    f.render_widget(Clear, area);

    let error_text = Paragraph::new(error)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" ERROR ")
                .title_bottom(" Enter/Esc to dismiss ")
                .style(
                    Style::default()
                        .fg(theme.error)
                        .bg(theme.background)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, area);
}

/// Handle a key press. Returns `true` when the editor should exit.
fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Error overlay blocks everything until dismissed
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        return Ok(false);
    }

    if state.color_entry.is_some() {
        return Ok(handle_color_entry_input(state, key));
    }

    handle_main_input(state, key)
}

fn handle_color_entry_input(state: &mut AppState, key: KeyEvent) -> bool {
    let Some(entry) = state.color_entry.as_mut() else {
        return false;
    };
    let field = entry.field();
    match entry.handle_input(key) {
        Some(ColorEntryEvent::Confirmed(hex)) => {
            state.color_entry = None;
            state.send_input(ControlId::for_color(field), ControlInput::Commit(hex));
        }
        Some(ColorEntryEvent::Cancelled) => {
            state.color_entry = None;
            state.set_status("Color unchanged");
        }
        None => {}
    }
    false
}

fn handle_main_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let focused = state.focused_control();
    if !matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        state.quit_armed = false;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            if state.dirty && !state.quit_armed {
                state.quit_armed = true;
                state.set_status("Unsaved changes: press q again to quit, w to write");
                return Ok(false);
            }
            return Ok(true);
        }
        KeyCode::Tab => state.move_focus(1),
        KeyCode::BackTab => state.move_focus(-1),
        KeyCode::Left | KeyCode::Down => state.send_input(focused, ControlInput::Decrement),
        KeyCode::Right | KeyCode::Up => state.send_input(focused, ControlInput::Increment),
        KeyCode::PageDown => state.send_input(focused, ControlInput::PageDecrement),
        KeyCode::PageUp => state.send_input(focused, ControlInput::PageIncrement),
        KeyCode::Home => state.send_input(focused, ControlInput::Home),
        KeyCode::End => state.send_input(focused, ControlInput::End),
        KeyCode::Enter | KeyCode::Char(' ') => state.activate_focused(),
        KeyCode::Char('j') => {
            state.editor.scroll_by(SCROLL_STEP_PX);
        }
        KeyCode::Char('k') => {
            state.editor.scroll_by(-SCROLL_STEP_PX);
        }
        KeyCode::Char('g') => {
            state.editor.scroll_to(0);
        }
        KeyCode::Char('G') => {
            state.editor.scroll_to_end();
        }
        KeyCode::Char(c @ '1'..='5') => {
            let slot = c.to_digit(10).map_or(0, |d| d as usize);
            if let Some(tool) = EditorTool::from_slot(slot) {
                state.editor.select_tool(tool);
                state.set_status(format!("Tool: {tool}"));
            }
        }
        KeyCode::Char('w') => {
            if let Err(e) = state.save_snapshot() {
                state.set_error(format!("{e:#}"));
            }
        }
        _ => {}
    }

    Ok(false)
}
