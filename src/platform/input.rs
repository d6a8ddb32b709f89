//! Input sources

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::TickInput;
use crate::view::Snapshot;

/// Input gathered for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Window closed / player asked to leave
    pub quit: bool,
    /// Pointer position in screen coordinates
    pub pointer: Vec2,
    /// Mouse button pressed this frame
    pub click: bool,
}

impl FrameInput {
    pub fn click_at(pointer: Vec2) -> Self {
        Self {
            quit: false,
            pointer,
            click: true,
        }
    }

    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Default::default()
        }
    }
}

impl From<FrameInput> for TickInput {
    fn from(input: FrameInput) -> Self {
        TickInput {
            pointer: input.pointer,
            click: input.click,
        }
    }
}

/// Produces one [`FrameInput`] per frame
///
/// Sources get the snapshot the player would be looking at when deciding.
pub trait InputSource {
    fn poll(&mut self, view: &Snapshot, now: u64) -> FrameInput;
}

/// Replays a fixed list of frames, then idles (or quits)
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<FrameInput>,
    quit_when_done: bool,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = FrameInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            quit_when_done: false,
        }
    }

    /// Request quit once the script runs out
    pub fn quit_when_done(mut self) -> Self {
        self.quit_when_done = true;
        self
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _view: &Snapshot, _now: u64) -> FrameInput {
        match self.frames.pop_front() {
            Some(frame) => frame,
            None if self.quit_when_done => FrameInput::quit(),
            None => FrameInput::default(),
        }
    }
}
