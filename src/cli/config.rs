//! Configuration management CLI commands.

use crate::cli::common::{load_config, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Opacity slider step, in (0, 1]
    #[arg(long, value_name = "STEP")]
    opacity_step: Option<f64>,

    /// Preview viewport height in pixels
    #[arg(long, value_name = "PX")]
    viewport_height: Option<u32>,

    /// Pinned navigation bar height in pixels
    #[arg(long, value_name = "PX")]
    nav_height: Option<u32>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    paths: PathsOutput,
    editor: EditorOutput,
    preview: PreviewOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    snapshot: Option<String>,
}

#[derive(Serialize, Debug)]
struct EditorOutput {
    opacity_step: f64,
    page_multiplier: u8,
}

#[derive(Serialize, Debug)]
struct PreviewOutput {
    viewport_height: u32,
    nav_height: u32,
    product_count: usize,
    product_height: u32,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.theme.is_none()
            && self.opacity_step.is_none()
            && self.viewport_height.is_none()
            && self.nav_height.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --theme, --opacity-step, --viewport-height, or --nav-height",
            ));
        }

        let mut config = Config::load().unwrap_or_else(|e| {
            tracing::warn!(
                error = %format!("{e:#}"),
                "existing configuration could not be loaded, starting from defaults"
            );
            Config::default()
        });

        if let Some(theme_str) = &self.theme {
            config.ui.theme_mode = theme_str.parse::<ThemeMode>().map_err(|_| {
                CliError::validation("Invalid theme mode. Must be 'auto', 'light', or 'dark'")
            })?;
        }
        if let Some(step) = self.opacity_step {
            config.editor.opacity_step = step;
        }
        if let Some(height) = self.viewport_height {
            config.preview.viewport_height = height;
        }
        if let Some(height) = self.nav_height {
            config.preview.nav_height = height;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {}", e)))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {:#}", e)))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        paths: PathsOutput {
            snapshot: config
                .paths
                .snapshot
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        },
        editor: EditorOutput {
            opacity_step: config.editor.opacity_step,
            page_multiplier: config.editor.page_multiplier,
        },
        preview: PreviewOutput {
            viewport_height: config.preview.viewport_height,
            nav_height: config.preview.nav_height,
            product_count: config.preview.product_count,
            product_height: config.preview.product_height,
        },
        ui: UiOutput {
            theme: format!("{:?}", config.ui.theme_mode).to_lowercase(),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {}", e)))?;

    println!("{}", json);
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Configuration:");
    println!();
    println!("Paths:");
    match &config.paths.snapshot {
        Some(path) => println!("  Snapshot: {}", path.display()),
        None => println!("  Snapshot: (not set)"),
    }
    println!();
    println!("Editor:");
    println!("  Opacity step:    {}", config.editor.opacity_step);
    println!("  Page multiplier: {}", config.editor.page_multiplier);
    println!();
    println!("Preview:");
    println!("  Viewport height: {}px", config.preview.viewport_height);
    println!("  Nav height:      {}px", config.preview.nav_height);
    println!("  Products:        {}", config.preview.product_count);
    println!("  Product height:  {}px", config.preview.product_height);
    println!();
    println!("UI:");
    println!("  Theme: {:?}", config.ui.theme_mode);
}
