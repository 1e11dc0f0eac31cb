//! Configuration management module.
//!
//! Loads window, palette and seed settings from an optional JSON file next to
//! the executable. Missing or broken files fall back to the defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

const CONFIG_FILE_NAME: &str = "crud_visualizer_config.json";

/// Errors raised while reading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid colour for `{field}`: {value:?} (expected #RRGGBB)")]
    InvalidColor { field: &'static str, value: String },
    #[error("canvas size must be positive, got {width}x{height}")]
    InvalidCanvas { width: f32, height: f32 },
}

/// Colours used by the canvas, as `#RRGGBB` strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PaletteConfig {
    pub background: String,
    pub button: String,
    pub button_hover: String,
    pub item_fill: String,
    pub item_border: String,
    pub selected: String,
    pub text: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            button: "#8FB9FF".to_string(),
            button_hover: "#6EA0E6".to_string(),
            item_fill: "#FFF2CC".to_string(),
            item_border: "#E6B800".to_string(),
            selected: "#FFB3B3".to_string(),
            text: "#000000".to_string(),
        }
    }
}

impl PaletteConfig {
    fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("background", self.background.as_str()),
            ("button", self.button.as_str()),
            ("button_hover", self.button_hover.as_str()),
            ("item_fill", self.item_fill.as_str()),
            ("item_border", self.item_border.as_str()),
            ("selected", self.selected.as_str()),
            ("text", self.text.as_str()),
        ]
    }

    /// Check that every entry parses as a colour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in self.entries() {
            if parse_hex_color(value).is_none() {
                return Err(ConfigError::InvalidColor {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default = "default_canvas_width")]
    pub canvas_width: f32,
    #[serde(default = "default_canvas_height")]
    pub canvas_height: f32,
    #[serde(default = "default_seed_labels")]
    pub seed_labels: Vec<String>,
    #[serde(default)]
    pub palette: PaletteConfig,
    #[serde(skip)]
    pub config_file: String,
}

fn default_window_title() -> String {
    "CRUD Visualizer".to_string()
}

fn default_canvas_width() -> f32 {
    800.0
}

fn default_canvas_height() -> f32 {
    600.0
}

fn default_seed_labels() -> Vec<String> {
    vec![
        "Item A".to_string(),
        "Item B".to_string(),
        "Item C".to_string(),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            seed_labels: default_seed_labels(),
            palette: PaletteConfig::default(),
            config_file: String::new(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(ConfigError::InvalidCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        self.palette.validate()
    }
}

/// Parse `#RRGGBB` (leading `#` optional) into RGB bytes.
pub fn parse_hex_color(value: &str) -> Option<[u8; 3]> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Configuration manager for locating and loading the config file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_path(Self::get_exe_directory().join(CONFIG_FILE_NAME))
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Get the directory containing the executable.
    fn get_exe_directory() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Load configuration, falling back to defaults on any error.
    pub fn load(&self) -> Config {
        let mut config = match self.try_load() {
            Ok(Some(config)) => {
                tracing::info!("Loaded config from {}", self.config_path.display());
                config
            }
            Ok(None) => {
                tracing::debug!(
                    "No config file at {}, using defaults",
                    self.config_path.display()
                );
                Config::default()
            }
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", self.config_path.display(), e);
                Config::default()
            }
        };

        config.config_file = self.config_path.to_string_lossy().into_owned();
        config
    }

    fn try_load(&self) -> Result<Option<Config>, ConfigError> {
        if !self.config_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.config_path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(Some(config))
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
