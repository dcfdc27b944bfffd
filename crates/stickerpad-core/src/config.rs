//! Startup configuration: canvas geometry, colors, and the tool catalogue.
//!
//! Every field has a default, so `{}` is a valid configuration and a host
//! only needs to spell out what it changes.

use crate::catalogue::ToolCatalogue;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Stickerpad Fun";

/// Drawing surface settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// CSS color used by `fill_background`.
    pub background: String,
    /// CSS color for strokes, dots, and glyphs.
    pub ink: String,
    /// Glyph size in pixels for stamps and the stamp preview.
    pub glyph_px: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            background: "white".to_string(),
            ink: "black".to_string(),
            glyph_px: 32.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadConfig {
    pub title: String,
    pub canvas: CanvasConfig,
    pub tools: ToolCatalogue,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            canvas: CanvasConfig::default(),
            tools: ToolCatalogue::default(),
        }
    }
}

impl PadConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PadConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConfigError::InvalidCanvasSize {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }
        Ok(())
    }
}
