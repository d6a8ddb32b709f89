//! Game state and core simulation types
//!
//! Everything a session mutates lives in [`GameState`]; it is owned by the
//! game loop and only changed through [`tick`](super::tick::tick).

use serde::{Deserialize, Serialize};

use super::spawner::Spawner;
use super::target::{LabelMetrics, Target};
use crate::settings::Settings;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Boxes are spawning and counting down
    Running,
    /// Run ended (no lives left)
    GameOver,
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A box appeared
    Spawned { id: u32, lifetime: f64 },
    /// A box ran out of time and cost a life
    Expired { id: u32 },
    /// The player clicked a box
    Hit { id: u32 },
    /// Lives ran out
    GameOver { score: u64 },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Player score
    pub score: u64,
    /// Player lives
    pub lives: u8,
    /// Current phase
    pub phase: GamePhase,
    /// Live boxes (insertion order)
    pub targets: Vec<Target>,
    /// Events emitted by the most recent tick
    pub events: Vec<GameEvent>,
    /// Box label metrics used to size hit bounds
    pub label_metrics: LabelMetrics,
    pub(crate) spawner: Spawner,
    next_id: u32,
}

impl GameState {
    /// Create a new session starting at `now` (ms) with one box already on screen
    pub fn new(settings: &Settings, seed: u64, now: u64) -> Self {
        let spawner = Spawner::new(
            settings.spawn_bounds(),
            settings.spawn_window_seconds,
            seed,
            now,
        );

        let mut state = Self {
            seed,
            score: 0,
            lives: settings.starting_lives,
            phase: GamePhase::Running,
            targets: Vec::new(),
            events: Vec::new(),
            label_metrics: settings.label_metrics(),
            spawner,
            next_id: 1,
        };

        // First box doesn't wait for the cooldown
        let first = state.spawner.spawn_now(0, now);
        state.insert_target(first);

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a box to the session, assigning it an ID
    pub fn insert_target(&mut self, mut target: Target) -> u32 {
        let id = self.next_entity_id();
        target.id = id;
        target.refresh(target.created_at(), &self.label_metrics);
        self.events.push(GameEvent::Spawned {
            id,
            lifetime: target.lifetime(),
        });
        self.targets.push(target);
        id
    }

    /// Spawner driving this session
    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let settings = Settings::default();
        let state = GameState::new(&settings, 12345, 0);

        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.targets.len(), 1);
        assert_eq!(state.targets[0].id, 1);
        assert_eq!(state.targets[0].lifetime(), 7.0);
        assert!(state.spawner().next_spawn_at() >= 1000);
        assert_eq!(
            state.events,
            vec![GameEvent::Spawned { id: 1, lifetime: 7.0 }]
        );
    }

    #[test]
    fn test_initial_target_inside_spawn_bounds() {
        let settings = Settings::default();
        let bounds = settings.spawn_bounds();
        for seed in 0..50 {
            let state = GameState::new(&settings, seed, 0);
            let pos = state.targets[0].topleft;
            assert!(pos.x >= bounds.left() && pos.x <= bounds.right());
            assert!(pos.y >= bounds.top() && pos.y <= bounds.bottom());
        }
    }

    #[test]
    fn test_starting_lives_from_settings() {
        let settings = Settings {
            starting_lives: 5,
            ..Default::default()
        };
        let state = GameState::new(&settings, 1, 0);
        assert_eq!(state.lives, 5);
    }

    #[test]
    fn test_entity_ids_increase() {
        let settings = Settings::default();
        let mut state = GameState::new(&settings, 1, 0);
        assert_eq!(state.next_entity_id(), 2);
        assert_eq!(state.next_entity_id(), 3);
    }
}
