//! Application configuration.

use serde::{Deserialize, Serialize};
use snapbox_core::{DEFAULT_PROXIMITY_THRESHOLD, IRect, RgbaColor, SceneConfig, SnapPolicy};
use std::path::Path;
use thiserror::Error;

/// Environment variable holding the path of a JSON config file.
pub const CONFIG_ENV_VAR: &str = "SNAPBOX_CONFIG";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Width and height in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extent {
    pub width: i32,
    pub height: i32,
}

impl Extent {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Snap proximity threshold in pixels.
    pub threshold: i32,
    pub snap_policy: SnapPolicy,
    pub raise_on_grab: bool,
    pub background: RgbaColor,
    /// Rectangles present at startup, back to front.
    pub initial_rects: Vec<IRect>,
    /// Area in which new rectangles are placed.
    pub spawn_area: Extent,
    /// Size of new rectangles.
    pub spawn_size: Extent,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Draggable Rectangles".to_string(),
            width: 640,
            height: 480,
            threshold: DEFAULT_PROXIMITY_THRESHOLD,
            snap_policy: SnapPolicy::Sequential,
            raise_on_grab: false,
            background: RgbaColor::white(),
            initial_rects: vec![
                IRect::new(50, 50, 100, 100),
                IRect::new(200, 200, 100, 100),
                IRect::new(400, 50, 150, 150),
            ],
            spawn_area: Extent::new(500, 300),
            spawn_size: Extent::new(100, 100),
        }
    }
}

impl AppConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load the file named by `SNAPBOX_CONFIG`, falling back to defaults if
    /// the variable is unset or the file cannot be used.
    pub fn from_env() -> Self {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load_or_default(path),
            None => Self::default(),
        }
    }

    /// Load a configuration file, logging the error and falling back to
    /// defaults if it cannot be read or parsed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::error!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Scene settings derived from this configuration.
    pub fn scene_config(&self) -> SceneConfig {
        SceneConfig {
            threshold: self.threshold,
            snap_policy: self.snap_policy,
            raise_on_grab: self.raise_on_grab,
            background: self.background,
        }
    }
}
