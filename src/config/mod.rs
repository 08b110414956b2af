// SPDX-License-Identifier: MPL-2.0
//! This module handles the HUD's style and sizing configuration, including
//! loading and saving it to a `hud.toml` file.
//!
//! The configuration is read by every task when it is laid out and rendered,
//! and is only mutated by the host application between calls.
//!
//! # Examples
//!
//! ```no_run
//! use iced_hud::config::{self, Config, ContentStyle};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.content_style = ContentStyle::Light;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("hud.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.content_style, ContentStyle::Light);
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "hud.toml";
const APP_NAME: &str = "IcedHud";

/// A serializable RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Color::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        Self::new(color.r, color.g, color.b, color.a)
    }
}

/// Tint of the card content (text, buttons, translucent material).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStyle {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Color of the dimming backdrop once fully shown.
    pub background_color: Rgba,
    /// Fill of the card behind its translucent material.
    pub content_background_color: Rgba,
    pub content_translucent: bool,
    pub content_style: ContentStyle,
    pub min_width: f32,
    pub min_height: f32,
    pub max_width: f32,
    pub max_height: f32,
    /// Auto-hide delay of status toasts when the caller does not pass one.
    pub default_duration_secs: f64,
    pub cancel_button_min_width: f32,
    /// When false, every transition completes synchronously.
    pub animated: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            background_color: Rgba::TRANSPARENT,
            content_background_color: Rgba::TRANSPARENT,
            content_translucent: true,
            content_style: ContentStyle::Dark,
            min_width: DEFAULT_MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            default_duration_secs: DEFAULT_DURATION_SECS,
            cancel_button_min_width: DEFAULT_CANCEL_BUTTON_MIN_WIDTH,
            animated: true,
        }
    }
}

impl Config {
    /// Returns a copy with out-of-range values pulled back into shape.
    ///
    /// Widths below the padding are raised, maxima below their minima are
    /// raised to the minima, and negative durations become zero.
    #[must_use]
    pub fn validated(mut self) -> Self {
        let floor = 2.0 * CONTENT_PADDING;
        self.min_width = self.min_width.max(floor);
        self.max_width = self.max_width.max(self.min_width);
        self.min_height = self.min_height.max(0.0);
        self.max_height = self.max_height.max(self.min_height);
        self.cancel_button_min_width = self.cancel_button_min_width.max(0.0);
        if !self.default_duration_secs.is_finite() || self.default_duration_secs < 0.0 {
            self.default_duration_secs = 0.0;
        }
        self
    }

    /// Default auto-hide delay as a `Duration`. Delays too long to
    /// represent saturate to `Duration::MAX`, which never fires.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.default_duration_secs.max(0.0)).unwrap_or(Duration::MAX)
    }

    /// Duration of enter/exit/relayout transitions, zero when not animated.
    #[must_use]
    pub fn transition_duration(&self) -> Duration {
        if self.animated {
            TRANSITION_DURATION
        } else {
            Duration::ZERO
        }
    }
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
    let config = match toml::from_str::<Config>(&content) {
        Ok(config) => config.validated(),
        Err(err) => {
            tracing::warn!(path = %path.display(), "invalid HUD config, using defaults: {err}");
            Config::default()
        }
    };
    tracing::info!(path = %path.display(), "loaded HUD config");
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    tracing::info!(path = %path.display(), "saved HUD config");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_style() {
        let config = Config {
            content_style: ContentStyle::Light,
            background_color: Rgba::new(0.0, 0.0, 0.0, 0.4),
            animated: false,
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("hud.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("hud.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("hud.toml");
        fs::write(&config_path, "max_width = 320.0\ncontent_style = \"light\"\n")
            .expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.max_width, 320.0);
        assert_eq!(loaded.content_style, ContentStyle::Light);
        assert_eq!(loaded.min_width, DEFAULT_MIN_WIDTH);
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let err = load_from_path(&temp_dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn validated_repairs_inverted_bounds() {
        let config = Config {
            min_width: 200.0,
            max_width: 100.0,
            min_height: 60.0,
            max_height: 10.0,
            default_duration_secs: -1.0,
            ..Config::default()
        }
        .validated();

        assert_eq!(config.max_width, 200.0);
        assert_eq!(config.max_height, 60.0);
        assert_eq!(config.default_duration(), Duration::ZERO);
    }

    #[test]
    fn huge_default_duration_saturates() {
        let config = Config {
            default_duration_secs: 1e20,
            ..Config::default()
        }
        .validated();
        assert_eq!(config.default_duration(), Duration::MAX);
    }

    #[test]
    fn transition_duration_is_zero_when_not_animated() {
        let config = Config {
            animated: false,
            ..Config::default()
        };
        assert_eq!(config.transition_duration(), Duration::ZERO);
        assert_eq!(Config::default().transition_duration(), TRANSITION_DURATION);
    }

    #[test]
    fn rgba_converts_to_color() {
        let color: Color = Rgba::new(1.0, 0.5, 0.0, 0.25).into();
        assert_eq!(color, Color::from_rgba(1.0, 0.5, 0.0, 0.25));
    }
}
