//! Shared CLI plumbing: error type, exit codes, snapshot file I/O.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::StyleError;
use crate::models::{PartialUpdate, StyleModel};

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Input was rejected (bad snapshot value, bad flag, invalid config)
    ValidationError = 1,
    /// A file could not be read or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error reported by a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process terminates with
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<StyleError> for CliError {
    fn from(err: StyleError) -> Self {
        Self::validation(err.to_string())
    }
}

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the configuration, reporting failures as validation errors.
pub fn load_config() -> CliResult<Config> {
    Config::load()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Reads a snapshot file into a partial update.
///
/// A missing or unparsable file is an I/O error; an empty file is an empty update.
pub fn read_snapshot(path: &Path) -> CliResult<PartialUpdate> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::io(format!("Failed to read snapshot {}: {}", path.display(), e))
    })?;

    if content.trim().is_empty() {
        return Ok(PartialUpdate::default());
    }

    serde_json::from_str(&content).map_err(|e| {
        CliError::io(format!("Failed to parse snapshot {}: {}", path.display(), e))
    })
}

/// Serializes a model as pretty snapshot JSON.
pub fn snapshot_json(model: &StyleModel) -> CliResult<String> {
    serde_json::to_string_pretty(model)
        .map_err(|e| CliError::io(format!("Failed to serialize snapshot: {}", e)))
}

/// Writes a model to `path` atomically (temp file + rename).
pub fn write_snapshot(path: &Path, model: &StyleModel) -> CliResult<()> {
    let json = snapshot_json(model)?;
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, format!("{json}\n")).map_err(|e| {
        CliError::io(format!(
            "Failed to write snapshot {}: {}",
            temp_path.display(),
            e
        ))
    })?;

    fs::rename(&temp_path, path).map_err(|e| {
        CliError::io(format!("Failed to write snapshot {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorField;
    use tempfile::TempDir;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::validation("x").exit_code(), 1);
        assert_eq!(CliError::io("x").exit_code(), 2);
    }

    #[test]
    fn test_style_error_is_validation() {
        let err: CliError = StyleError::invalid_color(ColorField::Title, "bad").into();
        assert_eq!(err.kind, ExitCode::ValidationError);
        assert!(err.message.contains("titleColor"));
    }

    #[test]
    fn test_snapshot_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("style.json");
        let model = StyleModel::default()
            .apply(&PartialUpdate::opacity(0.3))
            .unwrap();
        write_snapshot(&path, &model).unwrap();

        let read = read_snapshot(&path).unwrap();
        assert_eq!(StyleModel::hydrate(&read).unwrap(), model);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_missing_snapshot_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_snapshot(&temp_dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.kind, ExitCode::IoError);
    }
}
