//! Game settings
//!
//! Every tunable constant of a session. Loaded from a JSON file; missing
//! fields fall back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{LabelMetrics, Rect};

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Frame rate cap
    pub fps: u32,

    // === Gameplay ===
    pub starting_lives: u8,
    /// Distance between the screen edge and the spawn region
    pub spawn_margin: f32,
    /// Width of the random part of the spawn cooldown (seconds)
    pub spawn_window_seconds: f64,
    /// Remaining time at which a box is drawn fully green (seconds)
    pub max_lifetime_seconds: f64,
    /// Fixed run seed (random when absent)
    pub seed: Option<u64>,

    // === Text ===
    pub box_font_size: f32,
    pub ui_font_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            fps: FPS,

            starting_lives: STARTING_LIVES,
            spawn_margin: SPAWN_MARGIN,
            spawn_window_seconds: SPAWN_WINDOW_SECONDS,
            max_lifetime_seconds: MAX_LIFETIME_SECONDS,
            seed: None,

            box_font_size: BOX_FONT_SIZE,
            ui_font_size: UI_FONT_SIZE,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Whole screen
    pub fn screen(&self) -> Rect {
        Rect::new(0.0, 0.0, self.screen_width, self.screen_height)
    }

    /// Region where box top-left corners may land
    pub fn spawn_bounds(&self) -> Rect {
        self.screen().inset(self.spawn_margin)
    }

    /// Metrics used to size box labels
    pub fn label_metrics(&self) -> LabelMetrics {
        LabelMetrics::for_font_size(self.box_font_size)
    }

    /// Frame budget in milliseconds
    pub fn frame_ms(&self) -> u64 {
        (MS_PER_SECOND / self.fps.max(1) as f64).round() as u64
    }
}
