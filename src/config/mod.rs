// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[feed]` - Frame geometry and rate of the built-in test pattern source
//!
//! # Examples
//!
//! ```no_run
//! use camview::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "CamView";

/// Application theme preference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves the preference to a concrete dark/light choice,
    /// consulting the OS setting for `System`.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,

    /// Whether the status bar is drawn below the frame area.
    #[serde(default = "default_show_status_bar")]
    pub show_status_bar: bool,
}

fn default_show_status_bar() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: ThemeMode::default(),
            show_status_bar: true,
        }
    }
}

/// Settings for the frame feed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FeedConfig {
    /// Frame width in pixels.
    #[serde(default)]
    pub width: Option<u32>,

    /// Frame height in pixels.
    #[serde(default)]
    pub height: Option<u32>,

    /// Frame rate in frames per second.
    #[serde(default)]
    pub fps: Option<u32>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            width: Some(DEFAULT_FEED_WIDTH),
            height: Some(DEFAULT_FEED_HEIGHT),
            fps: Some(DEFAULT_FEED_FPS),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(crate::error::Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
                show_status_bar: false,
            },
            feed: FeedConfig {
                width: Some(640),
                height: Some(480),
                fps: Some(15),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.general.language.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_feed_uses_default_constants() {
        let config = Config::default();
        assert_eq!(config.feed.width, Some(DEFAULT_FEED_WIDTH));
        assert_eq!(config.feed.height, Some(DEFAULT_FEED_HEIGHT));
        assert_eq!(config.feed.fps, Some(DEFAULT_FEED_FPS));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"de\"\n").unwrap();
        assert_eq!(config.general.language.as_deref(), Some("de"));
        assert_eq!(config.feed, FeedConfig::default());
    }

    #[test]
    fn status_bar_toggle_defaults_on_and_round_trips() {
        assert!(Config::default().general.show_status_bar);

        // Files written before the toggle existed have no such key.
        let legacy: Config = toml::from_str("[general]\nlanguage = \"fr\"\n").unwrap();
        assert!(legacy.general.show_status_bar);

        let config = Config {
            general: GeneralConfig {
                show_status_bar: false,
                ..GeneralConfig::default()
            },
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert!(!loaded.general.show_status_bar);
    }

    #[test]
    fn theme_mode_serializes_kebab_case() {
        let config = Config {
            general: GeneralConfig {
                language: None,
                theme_mode: ThemeMode::System,
                ..GeneralConfig::default()
            },
            ..Config::default()
        };
        let serialized = toml::to_string(&config).unwrap();
        assert!(serialized.contains("theme_mode = \"system\""));
    }
}
