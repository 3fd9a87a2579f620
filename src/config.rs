//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory
//! resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::catalog::Section;

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

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Directory holding the catalog JSON documents (items.json etc.)
    pub data_dir: Option<PathBuf>,
}

/// Catalog fetch settings for the `fetch` and `tag` pipeline commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Base URL the catalog documents are downloaded from
    pub base_url: Option<String>,
    /// Minimum like count an item needs to be published
    #[serde(default = "default_min_likes")]
    pub min_likes: u32,
}

const fn default_min_likes() -> u32 {
    crate::catalog::ingest::DEFAULT_MIN_LIKES
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            min_likes: default_min_likes(),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display help on startup
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Section shown when the browser starts ("items", "worlds", ...)
    #[serde(default = "default_startup_section")]
    pub startup_section: String,
    /// Number of entries in the new-arrivals strip
    #[serde(default = "default_new_arrivals")]
    pub new_arrivals: usize,
}

fn default_startup_section() -> String {
    Section::Items.slug().to_string()
}

const fn default_new_arrivals() -> usize {
    10
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: true,
            theme_mode: ThemeMode::default(),
            startup_section: default_startup_section(),
            new_arrivals: default_new_arrivals(),
        }
    }
}

impl UiConfig {
    /// The startup section, falling back to the items section when the
    /// configured slug is unknown.
    #[must_use]
    pub fn startup_section(&self) -> Section {
        self.startup_section.parse().unwrap_or(Section::Items)
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/vrclife/config.toml`
/// - macOS: `~/Library/Application Support/vrclife/config.toml`
/// - Windows: `%APPDATA%\vrclife\config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Catalog fetch settings
    #[serde(default)]
    pub fetch: FetchConfig,
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

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("vrclife");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// The directory the catalog documents live in.
    ///
    /// Falls back to `<config dir>/data` when not set explicitly.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.paths.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::config_dir()?.join("data")),
        }
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
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

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `data_dir` exists when set explicitly
    /// - `base_url` uses http(s) when set
    /// - `startup_section` is a known section slug
    pub fn validate(&self) -> Result<()> {
        if let Some(data_dir) = &self.paths.data_dir {
            if !data_dir.exists() {
                anyhow::bail!("Data directory does not exist: {}", data_dir.display());
            }
            if !data_dir.is_dir() {
                anyhow::bail!("Data path is not a directory: {}", data_dir.display());
            }
        }

        if let Some(base_url) = &self.fetch.base_url {
            if !crate::catalog::loader::is_url(base_url) {
                anyhow::bail!("Fetch base URL must start with http:// or https://: {base_url}");
            }
        }

        if self.ui.startup_section.parse::<Section>().is_err() {
            anyhow::bail!("Unknown startup section: {}", self.ui.startup_section);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.paths.data_dir, None);
        assert!(config.ui.show_help_on_startup);
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(config.fetch.min_likes, 100);
        assert_eq!(config.ui.startup_section(), Section::Items);
    }

    #[test]
    fn test_config_validate_defaults() {
        assert!(Config::new().validate().is_ok());
    }

    #[test]
    fn test_config_validate_data_dir() {
        let temp_dir = TempDir::new().unwrap();

        let mut config = Config::new();
        config.paths.data_dir = Some(temp_dir.path().join("missing"));
        assert!(config.validate().is_err());

        config.paths.data_dir = Some(temp_dir.path().to_path_buf());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_base_url() {
        let mut config = Config::new();
        config.fetch.base_url = Some("ftp://example.com".to_string());
        assert!(config.validate().is_err());

        config.fetch.base_url = Some("https://vrclife.example/data".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_startup_section() {
        let mut config = Config::new();
        config.ui.startup_section = "avatars".to_string();
        assert!(config.validate().is_err());

        config.ui.startup_section = "worlds".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let mut config = Config::new();
        config.fetch.base_url = Some("https://vrclife.example/data".to_string());
        config.ui.startup_section = "trends".to_string();

        let content = toml::to_string_pretty(&config).unwrap();
        let loaded: Config = toml::from_str(&content).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let loaded: Config = toml::from_str("[ui]\nshow_help_on_startup = false\n").unwrap();
        assert!(!loaded.ui.show_help_on_startup);
        assert_eq!(loaded.fetch.min_likes, 100);
        assert_eq!(loaded.ui.new_arrivals, 10);
    }
}
