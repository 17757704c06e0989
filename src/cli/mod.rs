//! CLI command handlers.
//!
//! Headless, scriptable access to the style engine for automation and
//! testing. Every command returns a [`CliResult`] whose error carries the
//! process exit code.

pub mod apply;
pub mod common;
pub mod config;
pub mod render;
pub mod scroll;

// Re-export types used by main.rs and tests
pub use apply::ApplyArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use render::RenderArgs;
pub use scroll::ScrollArgs;
