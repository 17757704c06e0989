//! Live style-configuration engine for a storefront design editor.
//!
//! The crate holds a validated [`models::StyleModel`], translates control
//! input (slider, enum selectors, toggle, color pickers) into model updates
//! through the [`editor::EditorController`], and renders the model into
//! concrete preview attributes. A terminal editor and a headless CLI sit on
//! top of the same controller.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod controls;
pub mod editor;
pub mod error;
pub mod logging;
pub mod models;
pub mod preview;
#[cfg(feature = "ratatui")]
pub mod tui;

pub use editor::{ControlId, EditorController, EditorSettings, UpdateOutcome};
pub use error::{StyleError, StyleResult};
