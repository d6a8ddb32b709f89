//! Per-frame simulation tick
//!
//! Advances the session by one frame using a single timestamp for every
//! decision (spawn, expiry, hits).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Pointer position in screen coordinates
    pub pointer: Vec2,
    /// A click happened this frame
    pub click: bool,
}

/// Result of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session continues
    Running,
    /// Lives are gone; carries the final score. Stop ticking.
    SessionEnded { score: u64 },
}

/// Advance the game state by one frame at time `now` (ms)
///
/// A box that has expired is resolved as expired even if it was clicked in
/// the same frame.
pub fn tick(state: &mut GameState, input: &TickInput, now: u64) -> TickOutcome {
    if state.phase == GamePhase::GameOver {
        return TickOutcome::SessionEnded { score: state.score };
    }

    state.events.clear();

    // Spawn
    if let Some(target) = state.spawner.maybe_spawn(state.score, now) {
        state.insert_target(target);
    }

    // Labels shrink as time runs out, so hit bounds follow them
    let metrics = state.label_metrics;
    for target in &mut state.targets {
        target.refresh(now, &metrics);
    }

    // Expire / hit
    let mut lost = 0u8;
    let mut gained = 0u64;
    let events = &mut state.events;
    state.targets.retain(|target| {
        if !target.is_alive(now) {
            lost = lost.saturating_add(1);
            events.push(GameEvent::Expired { id: target.id });
            false
        } else if input.click && target.is_hit_by(input.pointer) {
            gained += 1;
            events.push(GameEvent::Hit { id: target.id });
            false
        } else {
            true
        }
    });
    state.lives = state.lives.saturating_sub(lost);
    state.score += gained;

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!("Game over with score {}", state.score);
        return TickOutcome::SessionEnded { score: state.score };
    }

    TickOutcome::Running
}
