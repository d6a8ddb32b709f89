//! Button Game - click the timed boxes before they run out
//!
//! Core modules:
//! - `sim`: Deterministic simulation (targets, spawner, per-frame tick)
//! - `view`: Read-only presentation snapshot and presenters
//! - `platform`: Clock and input sources
//! - `session`: Game loop gluing the above together
//! - `settings`: Data-driven game configuration

pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;
pub mod view;

pub use session::{EndReason, Session, SessionSummary};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Frame rate cap for the game loop
    pub const FPS: u32 = 60;

    /// Window dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Boxes spawn inside the screen shrunk by this margin on every side
    pub const SPAWN_MARGIN: f32 = 100.0;

    /// Lives at session start
    pub const STARTING_LIVES: u8 = 3;

    /// Width of the random part of the spawn cooldown (seconds)
    pub const SPAWN_WINDOW_SECONDS: f64 = 1.0;

    /// Lifetime mapped to the fully "high-time" box color (seconds)
    pub const MAX_LIFETIME_SECONDS: f64 = 7.0;

    /// Font sizes (pixels)
    pub const BOX_FONT_SIZE: f32 = 36.0;
    pub const UI_FONT_SIZE: f32 = 32.0;

    pub const MS_PER_SECOND: f64 = 1000.0;
}

/// Linear interpolation from `a` (t = 0) to `b` (t = 1)
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Convert a duration in seconds to whole milliseconds
#[inline]
pub fn seconds_to_ms(seconds: f64) -> u64 {
    (seconds.max(0.0) * consts::MS_PER_SECOND).round() as u64
}

/// Milliseconds elapsed between two timestamps, as seconds (negative if `now` precedes `since`)
#[inline]
pub fn elapsed_seconds(since: u64, now: u64) -> f64 {
    (now as f64 - since as f64) / consts::MS_PER_SECOND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(700.0, 100.0, 0.0), 700.0);
        assert_eq!(lerp(700.0, 100.0, 1.0), 100.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    }

    #[test]
    fn test_time_conversions() {
        assert_eq!(seconds_to_ms(1.25), 1250);
        assert_eq!(seconds_to_ms(-3.0), 0);
        assert_eq!(elapsed_seconds(1000, 8000), 7.0);
        assert_eq!(elapsed_seconds(2000, 1500), -0.5);
    }
}
