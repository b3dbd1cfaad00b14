use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub navigation: NavigationConfig,
    pub fullscreen: FullscreenConfig,
    /// Explicit slide order and titles. Empty means "every image in the deck directory".
    pub slides: Vec<SlideEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub fps: u32,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Horizontal travel a touch must exceed to count as a swipe (pixels).
    pub swipe_threshold: f32,
    /// How long an announcement stays live (milliseconds).
    pub announcement_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullscreenConfig {
    /// Fullscreen methods in preference order. The first one the platform
    /// supports handles every request; later entries are fallbacks only.
    pub methods: Vec<FullscreenMethodKind>,
    /// Whether the fullscreen toggle button is shown.
    pub button: bool,
    /// Request fullscreen right after the window opens.
    pub start: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FullscreenMethodKind {
    Native,
    Borderless,
}

/// One `[[slides]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideEntry {
    /// File name relative to the deck directory.
    pub file: PathBuf,
    #[serde(default)]
    pub title: Option<String>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            fps: FPS,
            title: WINDOW_TITLE.to_string(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: SWIPE_THRESHOLD,
            announcement_ms: ANNOUNCEMENT_MS,
        }
    }
}

impl Default for FullscreenConfig {
    fn default() -> Self {
        Self {
            methods: vec![FullscreenMethodKind::Native, FullscreenMethodKind::Borderless],
            button: true,
            start: false,
        }
    }
}

impl Config {
    /// Picks the config file for a deck: the explicit path if given,
    /// otherwise `slidenav.toml` inside the deck directory.
    pub fn resolve_path(explicit: Option<&Path>, deck_dir: &Path) -> PathBuf {
        match explicit {
            Some(path) => path.to_path_buf(),
            None => deck_dir.join(CONFIG_FILE_NAME),
        }
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields `Config::default()`. An existing file is parsed
    /// as TOML but not validated: command line overrides still apply, so
    /// callers run [`Config::validate`] on the final value.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::from_toml(&content).map_err(|e| match e {
            ConfigError::ParseError { source, .. } => ConfigError::ParseError {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses a TOML document without validating it.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: PathBuf::new(),
            source: e,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "window size must be positive, got {}x{}",
                    self.window.width, self.window.height
                ),
            });
        }

        if self.window.fps == 0 {
            return Err(ConfigError::ValidationError {
                message: "window.fps must be greater than zero".to_string(),
            });
        }

        let threshold = self.navigation.swipe_threshold;
        if threshold.is_nan() || threshold <= 0.0 {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "navigation.swipe_threshold must be positive, got {}",
                    self.navigation.swipe_threshold
                ),
            });
        }

        if self.fullscreen.methods.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "fullscreen.methods must list at least one method".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for entry in &self.slides {
            if !seen.insert(&entry.file) {
                return Err(ConfigError::ValidationError {
                    message: format!("slide '{}' is listed twice", entry.file.display()),
                });
            }
        }

        Ok(())
    }
}
