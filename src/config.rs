//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving user preferences in
//! TOML format with platform-specific directory resolution. Only ambient
//! preferences live here; design session state is never persisted.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

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

/// UI preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference.
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Default grid dimensions applied to fresh sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDefaults {
    /// Rows in a fresh session.
    pub rows: usize,
    /// Columns in a fresh session.
    pub columns: usize,
    /// Colors per square in a fresh session.
    pub colors_per_square: usize,
}

impl Default for GridDefaults {
    fn default() -> Self {
        Self {
            rows: 8,
            columns: 8,
            colors_per_square: 4,
        }
    }
}

/// Export preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExportConfig {
    /// Directory pattern PNGs are written to. Falls back to the current
    /// working directory when unset.
    pub output_dir: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences.
    #[serde(default)]
    pub ui: UiConfig,
    /// Default grid dimensions.
    #[serde(default)]
    pub grid: GridDefaults,
    /// Export preferences.
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Gets the platform-specific configuration directory.
    ///
    /// - Linux: `~/.config/GrannySquareStudio/`
    /// - macOS: `~/Library/Application Support/GrannySquareStudio/`
    /// - Windows: `%APPDATA%\GrannySquareStudio\`
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("GrannySquareStudio"))
    }

    /// Path to the config file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Whether a config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Loads the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed. Callers
    /// typically fall back to defaults on failure.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Saves the configuration to disk, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error on serialization or I/O failure.
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Resolved export directory: configured value or the current directory.
    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        self.export
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(config.grid.rows, 8);
        assert_eq!(config.grid.columns, 8);
        assert_eq!(config.grid.colors_per_square, 4);
        assert_eq!(config.export.output_dir, None);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = Config::default();
        config.ui.theme_mode = ThemeMode::Dark;
        config.grid.rows = 12;
        config.export.output_dir = Some(PathBuf::from("/tmp/patterns"));

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: Config = toml::from_str("[ui]\ntheme_mode = \"Light\"\n").unwrap();
        assert_eq!(parsed.ui.theme_mode, ThemeMode::Light);
        assert_eq!(parsed.grid, GridDefaults::default());
    }

    #[test]
    fn test_export_dir_fallback() {
        let config = Config::default();
        assert_eq!(config.export_dir(), PathBuf::from("."));
    }
}
