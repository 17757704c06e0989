//! Tracing subscriber setup.
//!
//! Headless commands log to stderr. The terminal editor owns the screen, so it
//! logs to `<config dir>/logs/storestyle.log` through a non-blocking writer
//! instead; keep the returned guard alive until exit so the file is flushed.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Log file name inside the log directory.
pub const LOG_FILE_NAME: &str = "storestyle.log";

/// `RUST_LOG` if set, otherwise `debug` when verbose and `info` when not.
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }))
}

/// Installs a compact stderr subscriber.
///
/// Does nothing if a global subscriber is already set.
pub fn init_stderr(verbose: bool) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(layer)
        .try_init();
}

/// Installs a subscriber appending to the log file in `log_dir`.
///
/// # Errors
///
/// Returns error if the directory or file cannot be created.
pub fn init_file(log_dir: &Path, verbose: bool) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir).context(format!(
        "Failed to create log directory: {}",
        log_dir.display()
    ))?;

    let log_path = log_file_path(log_dir);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .context(format!("Failed to open log file: {}", log_path.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(file);
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(layer)
        .try_init();

    tracing::info!(log_path = %log_path.display(), "editor logging initialized");
    Ok(guard)
}

/// Full path of the log file inside `log_dir`.
#[must_use]
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_file_creates_log() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("logs");
        let guard = init_file(&log_dir, true).unwrap();
        drop(guard);
        assert!(log_file_path(&log_dir).exists());
    }
}
