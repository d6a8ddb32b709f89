//! Timed targets ("boxes") the player has to click

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::elapsed_seconds;

/// Approximate monospace metrics for a box label
///
/// Hit bounds follow the rendered label, so the simulation needs to know how
/// large a label is without asking a font rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelMetrics {
    /// Horizontal advance per glyph (pixels)
    pub advance: f32,
    /// Height of one line of text (pixels)
    pub line_height: f32,
}

impl LabelMetrics {
    /// Metrics of the default game font at the given pixel size
    pub fn for_font_size(size: f32) -> Self {
        Self {
            advance: size * 0.5,
            line_height: size * 0.75,
        }
    }

    /// Extent of a single line of text
    pub fn measure(&self, text: &str) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * self.advance, self.line_height)
    }
}

/// A clickable box with a countdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    /// Assigned by the game state on insertion (0 until then)
    pub id: u32,
    /// Top-left corner of the box
    pub topleft: Vec2,
    /// Extent of the rendered label, refreshed every frame
    pub size: Vec2,
    lifetime: f64,
    created_at: u64,
}

impl Target {
    /// Create a box that lives for `lifetime` seconds starting at `now` (ms)
    pub fn new(lifetime: f64, topleft: Vec2, now: u64) -> Self {
        Self {
            id: 0,
            topleft,
            size: Vec2::ZERO,
            lifetime,
            created_at: now,
        }
    }

    /// Lifetime in seconds, fixed at creation
    #[inline]
    pub fn lifetime(&self) -> f64 {
        self.lifetime
    }

    /// Creation timestamp (ms)
    #[inline]
    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    /// Seconds left before the box expires (negative once expired)
    pub fn time_left_seconds(&self, now: u64) -> f64 {
        self.lifetime - elapsed_seconds(self.created_at, now)
    }

    /// True while there is time left on the box
    pub fn is_alive(&self, now: u64) -> bool {
        self.time_left_seconds(now) > 0.0
    }

    /// Remaining time as shown on the box
    pub fn label(&self, now: u64) -> String {
        format!("{:.2}", self.time_left_seconds(now))
    }

    /// Resize the hit bounds to the label shown at `now`
    pub fn refresh(&mut self, now: u64, metrics: &LabelMetrics) {
        self.size = metrics.measure(&self.label(now));
    }

    /// Current on-screen bounds
    pub fn bounds(&self) -> Rect {
        Rect::from_topleft(self.topleft, self.size)
    }

    /// True if `point` lies on the box
    pub fn is_hit_by(&self, point: Vec2) -> bool {
        self.bounds().contains_point(point)
    }

    /// Remaining time as a fraction of `max_lifetime`, clamped to [0, 1]
    pub fn time_fraction(&self, now: u64, max_lifetime: f64) -> f32 {
        if max_lifetime <= 0.0 {
            return 0.0;
        }
        (self.time_left_seconds(now) / max_lifetime).clamp(0.0, 1.0) as f32
    }
}
