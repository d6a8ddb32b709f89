//! Presentation snapshot
//!
//! The simulation never draws anything. Each frame the session captures a
//! read-only [`Snapshot`] and hands it to a [`Presenter`].

use std::io::Write;

use glam::Vec2;
use serde::Serialize;

use crate::lerp;
use crate::settings::Settings;
use crate::sim::{GameState, Target};

/// RGBA color, components in [0, 1]
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    /// Box background with no time left
    pub const LOW_TIME: Color = [1.0, 0.0, 0.0, 1.0];
    /// Box background with a full lifetime left
    pub const HIGH_TIME: Color = [0.0, 1.0, 0.0, 1.0];
    pub const BOX_TEXT: Color = [0.0, 0.0, 0.0, 1.0];
    pub const UI_TEXT: Color = [1.0, 1.0, 1.0, 1.0];
}

/// Component-wise color interpolation
pub fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    [
        lerp(a[0], b[0], t),
        lerp(a[1], b[1], t),
        lerp(a[2], b[2], t),
        lerp(a[3], b[3], t),
    ]
}

/// Background color of a box: red when time is up, green at `max_lifetime`
pub fn target_color(target: &Target, now: u64, max_lifetime: f64) -> Color {
    lerp_color(
        colors::LOW_TIME,
        colors::HIGH_TIME,
        target.time_fraction(now, max_lifetime),
    )
}

/// How one box should be drawn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetView {
    pub id: u32,
    pub topleft: Vec2,
    pub size: Vec2,
    /// Remaining time, two decimals
    pub label: String,
    pub time_left: f64,
    pub background: Color,
    pub text_color: Color,
}

impl TargetView {
    pub fn center(&self) -> Vec2 {
        self.topleft + self.size * 0.5
    }
}

/// One line of HUD text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudLine {
    pub text: String,
    pub position: Vec2,
    pub color: Color,
}

/// Everything a presenter needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Timestamp (ms) the snapshot was taken at
    pub now: u64,
    pub score: u64,
    pub lives: u8,
    pub game_over: bool,
    pub hud: Vec<HudLine>,
    pub targets: Vec<TargetView>,
}

impl Snapshot {
    pub fn capture(state: &GameState, settings: &Settings, now: u64) -> Self {
        let targets = state
            .targets
            .iter()
            .map(|target| TargetView {
                id: target.id,
                topleft: target.topleft,
                size: target.size,
                label: target.label(now),
                time_left: target.time_left_seconds(now),
                background: target_color(target, now, settings.max_lifetime_seconds),
                text_color: colors::BOX_TEXT,
            })
            .collect();

        let hud = vec![
            HudLine {
                text: format!("Player score: {}", state.score),
                position: Vec2::ZERO,
                color: colors::UI_TEXT,
            },
            HudLine {
                text: format!("Lives: {}", state.lives),
                position: Vec2::new(0.0, settings.ui_font_size),
                color: colors::UI_TEXT,
            },
        ];

        Self {
            now,
            score: state.score,
            lives: state.lives,
            game_over: state.is_over(),
            hud,
            targets,
        }
    }

    /// Box with the least time left
    pub fn most_urgent(&self) -> Option<&TargetView> {
        self.targets
            .iter()
            .min_by(|a, b| {
                a.time_left
                    .partial_cmp(&b.time_left)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }
}

/// Consumer of frame snapshots
pub trait Presenter {
    fn present(&mut self, snapshot: &Snapshot);
}

/// Discards every frame
#[derive(Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn present(&mut self, _snapshot: &Snapshot) {}
}

/// Logs the HUD whenever score or lives change
#[derive(Debug, Default)]
pub struct LogPresenter {
    last: Option<(u64, u8)>,
}

impl Presenter for LogPresenter {
    fn present(&mut self, snapshot: &Snapshot) {
        let current = (snapshot.score, snapshot.lives);
        if self.last == Some(current) {
            return;
        }
        self.last = Some(current);

        let hud: Vec<&str> = snapshot.hud.iter().map(|line| line.text.as_str()).collect();
        log::info!("{} ({} boxes)", hud.join(" | "), snapshot.targets.len());
    }
}

/// Writes every frame as one JSON line
pub struct JsonLinesPresenter<W: Write> {
    out: W,
    failed: bool,
}

impl<W: Write> JsonLinesPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out, failed: false }
    }
}

impl<W: Write> Drop for JsonLinesPresenter<W> {
    fn drop(&mut self) {
        if let Err(e) = self.out.flush() {
            log::warn!("Frame dump flush failed: {}", e);
        }
    }
}

impl<W: Write> Presenter for JsonLinesPresenter<W> {
    fn present(&mut self, snapshot: &Snapshot) {
        if self.failed {
            return;
        }
        let result = serde_json::to_writer(&mut self.out, snapshot)
            .map_err(std::io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"));
        if let Err(e) = result {
            // Keep playing; only the dump is lost
            log::warn!("Frame dump failed, disabling it: {}", e);
            self.failed = true;
        }
    }
}
