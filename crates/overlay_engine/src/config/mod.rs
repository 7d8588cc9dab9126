//! Configuration system

use crate::foundation::math::Vec4;
pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Host-facing overlay settings
///
/// Sampled at layout and draw time; a change must go through
/// [`crate::overlay::OverlayController::reconfigure`] so the cached layout
/// is recomputed the same way a list change recomputes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Is the overlay enabled?
    pub enabled: bool,

    /// Maximum width of the overlay in pixels
    pub max_width: f32,

    /// Maximum number of items to show in the overlay
    pub max_items: usize,

    /// Background fill color (RGBA)
    pub background_color: Vec4,

    /// Text and rule color (RGBA)
    pub text_color: Vec4,

    /// Header text drawn above the list
    pub header: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_width: 600.0,
            max_items: 10,
            background_color: Vec4::new(0.0, 0.0, 0.0, 0.2),
            text_color: Vec4::new(1.0, 1.0, 1.0, 0.8),
            header: "To-Do List".to_string(),
        }
    }
}

impl Config for OverlayConfig {}
