//! Apply command: drive the toolbar controls headlessly.
//!
//! Inputs are replayed through the same controller the terminal editor uses,
//! in a fixed order: opacity steps, radius, avatar, shadow, then colors.

use crate::cli::common::{load_config, read_snapshot, snapshot_json, write_snapshot, CliError, CliResult};
use crate::controls::ControlInput;
use crate::editor::{ControlId, EditorController, UpdateOutcome};
use crate::models::ColorField;
use clap::Args;
use std::path::PathBuf;

/// Apply control inputs to a snapshot and print the result
#[derive(Debug, Clone, Args)]
pub struct ApplyArgs {
    /// Snapshot JSON file to start from
    #[arg(value_name = "FILE")]
    pub snapshot: PathBuf,

    /// Press the opacity slider's decrement key N times
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub decrement: u32,

    /// Press the opacity slider's increment key N times
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub increment: u32,

    /// Select a card radius (square, rounded, pill)
    #[arg(long, value_name = "VARIANT")]
    pub radius: Option<String>,

    /// Select an avatar shape (circle, square)
    #[arg(long, value_name = "VARIANT")]
    pub avatar: Option<String>,

    /// Flip the card shadow switch
    #[arg(long)]
    pub toggle_shadow: bool,

    /// Commit a color through a picker, e.g. `title=#FF0000` or `title=255,0,0` (repeatable)
    #[arg(long = "color", value_name = "FIELD=COLOR")]
    pub colors: Vec<String>,

    /// Write the resulting snapshot here instead of printing it
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ApplyArgs {
    /// Execute the apply command
    pub fn execute(&self) -> CliResult<()> {
        // Parse color arguments up front so a typo fails before any input is replayed
        let colors = self
            .colors
            .iter()
            .map(|arg| parse_color_arg(arg))
            .collect::<CliResult<Vec<_>>>()?;

        let config = load_config()?;
        let snapshot = read_snapshot(&self.snapshot)?;
        let mut editor = EditorController::from_snapshot(&snapshot, config.editor_settings())?;

        let mut clamped = false;
        for _ in 0..self.decrement {
            clamped |= press(&mut editor, ControlId::Opacity, ControlInput::Decrement)?.clamped;
        }
        for _ in 0..self.increment {
            clamped |= press(&mut editor, ControlId::Opacity, ControlInput::Increment)?.clamped;
        }
        if clamped {
            tracing::info!(
                opacity = editor.snapshot().card_opacity(),
                "opacity clamped at its bound"
            );
        }

        if let Some(radius) = &self.radius {
            press(&mut editor, ControlId::CardRadius, ControlInput::Select(radius.clone()))?;
        }
        if let Some(avatar) = &self.avatar {
            press(&mut editor, ControlId::AvatarShape, ControlInput::Select(avatar.clone()))?;
        }
        if self.toggle_shadow {
            press(&mut editor, ControlId::CardShadow, ControlInput::Activate)?;
        }

        for (field, value) in colors {
            editor.click_color_proxy(field);
            match value {
                ColorValue::Hex(hex) => {
                    press(&mut editor, ControlId::for_color(field), ControlInput::Commit(hex))?;
                }
                ColorValue::Channels(channels) => {
                    editor.commit_color_channels(field, channels)?;
                }
            }
        }

        match &self.output {
            Some(path) => {
                write_snapshot(path, editor.snapshot())?;
                println!("Snapshot written to {}", path.display());
            }
            None => println!("{}", snapshot_json(editor.snapshot())?),
        }

        Ok(())
    }
}

fn press(
    editor: &mut EditorController,
    id: ControlId,
    input: ControlInput,
) -> CliResult<UpdateOutcome> {
    editor.handle_input(id, input).map_err(CliError::from)
}

/// Color as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ColorValue {
    /// `#RRGGBB`, validated by the picker
    Hex(String),
    /// `R,G,B`, range-checked by the picker
    Channels([i64; 3]),
}

/// Parses `FIELD=HEX` or `FIELD=R,G,B`.
fn parse_color_arg(arg: &str) -> CliResult<(ColorField, ColorValue)> {
    let (name, hex) = arg.split_once('=').ok_or_else(|| {
        CliError::validation(format!(
            "Invalid color argument '{}': expected FIELD=HEX or FIELD=R,G,B (e.g. title=#FF0000)",
            arg
        ))
    })?;

    let field = ColorField::parse(name.trim()).ok_or_else(|| {
        CliError::validation(format!(
            "Unknown color field '{}'. Must be one of: theme, title, price, card-background",
            name
        ))
    })?;

    let value = hex.trim();
    if !value.contains(',') {
        return Ok((field, ColorValue::Hex(value.to_string())));
    }

    let channels: Vec<i64> = value
        .split(',')
        .map(|c| c.trim().parse::<i64>())
        .collect::<Result<_, _>>()
        .map_err(|e| {
            CliError::validation(format!("Invalid color channels '{}': {}", value, e))
        })?;
    let channels: [i64; 3] = channels.try_into().map_err(|_| {
        CliError::validation(format!(
            "Invalid color channels '{}': expected exactly three values",
            value
        ))
    })?;

    Ok((field, ColorValue::Channels(channels)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::ExitCode;

    #[test]
    fn test_parse_color_arg() {
        let (field, value) = parse_color_arg("title=#ff0000").unwrap();
        assert_eq!(field, ColorField::Title);
        assert_eq!(value, ColorValue::Hex("#ff0000".into()));

        let (field, value) = parse_color_arg("price=255, 0,300").unwrap();
        assert_eq!(field, ColorField::Price);
        assert_eq!(value, ColorValue::Channels([255, 0, 300]));

        let (field, _) = parse_color_arg("card-background=#FFFFFF").unwrap();
        assert_eq!(field, ColorField::CardBackground);
    }

    #[test]
    fn test_parse_color_arg_errors() {
        assert_eq!(
            parse_color_arg("title").unwrap_err().kind,
            ExitCode::ValidationError
        );
        assert!(parse_color_arg("border=#000000")
            .unwrap_err()
            .message
            .contains("Unknown color field"));
        assert!(parse_color_arg("title=1,2").is_err());
        assert!(parse_color_arg("title=1,x,3").is_err());
    }
}
