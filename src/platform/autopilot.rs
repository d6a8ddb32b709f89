//! Autopilot - plays the game from the presentation snapshot
//!
//! Used for headless/demo runs. It only sees what a player would see, and it
//! needs `reaction_ms` between clicks, so it eventually falls behind once the
//! spawn rate picks up.

use glam::Vec2;

use super::input::{FrameInput, InputSource};
use crate::view::Snapshot;

#[derive(Debug, Clone)]
pub struct AutoPilot {
    /// Minimum time between two clicks (ms)
    pub reaction_ms: u64,
    /// Quit after this many frames (None = play until game over)
    pub max_frames: Option<u64>,
    last_click_at: Option<u64>,
    pointer: Vec2,
    frames: u64,
}

impl AutoPilot {
    pub fn new(reaction_ms: u64) -> Self {
        Self {
            reaction_ms,
            max_frames: None,
            last_click_at: None,
            pointer: Vec2::ZERO,
            frames: 0,
        }
    }

    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    fn ready(&self, now: u64) -> bool {
        match self.last_click_at {
            Some(at) => now.saturating_sub(at) >= self.reaction_ms,
            None => true,
        }
    }
}

impl InputSource for AutoPilot {
    fn poll(&mut self, view: &Snapshot, now: u64) -> FrameInput {
        self.frames += 1;
        if self.max_frames.is_some_and(|max| self.frames > max) {
            log::info!("Autopilot giving up after {} frames", self.frames - 1);
            return FrameInput::quit();
        }

        // Go for the box closest to expiring
        let Some(target) = view.most_urgent() else {
            return FrameInput {
                pointer: self.pointer,
                ..Default::default()
            };
        };

        self.pointer = target.center();
        if !self.ready(now) {
            return FrameInput {
                pointer: self.pointer,
                ..Default::default()
            };
        }

        log::debug!("Autopilot clicking box {} ({})", target.id, target.label);
        self.last_click_at = Some(now);
        FrameInput::click_at(self.pointer)
    }
}
