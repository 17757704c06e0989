//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving editor configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::editor::EditorSettings;

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "STORESTYLE_CONFIG_DIR";

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl std::str::FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => anyhow::bail!("Invalid theme mode '{other}' (expected auto, dark or light)"),
        }
    }
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Snapshot opened by `edit` when no `--snapshot` is given
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
}

/// Control tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Opacity change per slider step
    #[serde(default = "default_opacity_step")]
    pub opacity_step: f64,
    /// Slider steps per PageUp / PageDown
    #[serde(default = "default_page_multiplier")]
    pub page_multiplier: u8,
}

fn default_opacity_step() -> f64 {
    crate::controls::slider::DEFAULT_STEP
}

fn default_page_multiplier() -> u8 {
    crate::controls::slider::DEFAULT_PAGE_MULTIPLIER
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            opacity_step: default_opacity_step(),
            page_multiplier: default_page_multiplier(),
        }
    }
}

/// Mobile preview dimensions, in pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Viewport height, navigation bar included
    pub viewport_height: u32,
    /// Pinned navigation bar height
    pub nav_height: u32,
    /// Number of sample products
    pub product_count: usize,
    /// Height of one product card
    pub product_height: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        let settings = EditorSettings::default();
        Self {
            viewport_height: settings.viewport_height,
            nav_height: settings.nav_height,
            product_count: settings.product_count,
            product_height: settings.product_height,
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/storestyle/config.toml`
/// - macOS: `~/Library/Application Support/storestyle/config.toml`
/// - Windows: `%APPDATA%\storestyle\config.toml`
///
/// `STORESTYLE_CONFIG_DIR` replaces the directory on every platform.
///
/// # Validation
///
/// - `opacity_step` must be in `(0, 1]`
/// - `page_multiplier` must be at least 1
/// - `nav_height` must be smaller than `viewport_height`
/// - `product_height` must be non-zero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Control tuning
    #[serde(default)]
    pub editor: EditorConfig,
    /// Preview dimensions
    #[serde(default)]
    pub preview: PreviewConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// - Linux: `~/.config/storestyle/`
    /// - macOS: `~/Library/Application Support/storestyle/`
    /// - Windows: `%APPDATA%\storestyle\`
    ///
    /// # Errors
    ///
    /// Returns error if the platform has no config directory.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(crate::constants::APP_BINARY_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    ///
    /// # Errors
    ///
    /// Returns error if the config directory cannot be determined.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Gets the directory the terminal editor writes its log file to.
    ///
    /// # Errors
    ///
    /// Returns error if the config directory cannot be determined.
    pub fn log_dir() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("logs"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, parsed, or fails validation.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate().context(format!(
            "Invalid config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    ///
    /// # Errors
    ///
    /// Returns error if validation fails or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::debug!(path = %config_path.display(), "config saved");
        Ok(())
    }

    /// Validates configuration values.
    ///
    /// # Errors
    ///
    /// Returns the first rule that is violated.
    pub fn validate(&self) -> Result<()> {
        let step = self.editor.opacity_step;
        if !(step > 0.0 && step <= 1.0) {
            anyhow::bail!("opacity_step must be in (0, 1], got {step}");
        }

        if self.editor.page_multiplier == 0 {
            anyhow::bail!("page_multiplier must be at least 1");
        }

        if self.preview.nav_height >= self.preview.viewport_height {
            anyhow::bail!(
                "nav_height ({}) must be smaller than viewport_height ({})",
                self.preview.nav_height,
                self.preview.viewport_height
            );
        }

        if self.preview.product_height == 0 {
            anyhow::bail!("product_height must be greater than 0");
        }

        Ok(())
    }

    /// Controller settings derived from this configuration.
    #[must_use]
    pub fn editor_settings(&self) -> EditorSettings {
        EditorSettings {
            opacity_step: self.editor.opacity_step,
            page_multiplier: self.editor.page_multiplier,
            viewport_height: self.preview.viewport_height,
            nav_height: self.preview.nav_height,
            product_count: self.preview.product_count,
            product_height: self.preview.product_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.paths.snapshot, None);
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert!((config.editor.opacity_step - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.editor.page_multiplier, 10);
        assert_eq!(config.preview.viewport_height, 844);
        assert_eq!(config.preview.product_count, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::new();
        config.editor.opacity_step = 0.0;
        assert!(config.validate().is_err());
        config.editor.opacity_step = 1.5;
        assert!(config.validate().is_err());
        config.editor.opacity_step = 1.0;
        assert!(config.validate().is_ok());

        config.preview.nav_height = config.preview.viewport_height;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("nav_height"));

        let mut config = Config::new();
        config.editor.page_multiplier = 0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.preview.product_height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Light;
        config.preview.viewport_height = 700;

        let content = toml::to_string_pretty(&config).unwrap();
        fs::write(&config_file, content).unwrap();

        let content = fs::read_to_string(&config_file).unwrap();
        let loaded: Config = toml::from_str(&content).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let loaded: Config = toml::from_str("[ui]\ntheme_mode = \"Dark\"\n").unwrap();
        assert_eq!(loaded.ui.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.preview, PreviewConfig::default());
        assert_eq!(loaded.editor, EditorConfig::default());
    }

    #[test]
    fn test_theme_mode_from_str() {
        assert_eq!("DARK".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!("auto".parse::<ThemeMode>().unwrap(), ThemeMode::Auto);
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_editor_settings() {
        let mut config = Config::new();
        config.preview.product_count = 3;
        let settings = config.editor_settings();
        assert_eq!(settings.product_count, 3);
        assert_eq!(settings.nav_height, 72);
    }
}
