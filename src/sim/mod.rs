//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time is passed in as a millisecond timestamp, never read from a clock
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod rect;
pub mod spawner;
pub mod state;
pub mod target;
pub mod tick;

pub use rect::Rect;
pub use spawner::{Spawner, lifetime_from_score, min_spawn_seconds, random_position_within};
pub use state::{GameEvent, GamePhase, GameState};
pub use target::{LabelMetrics, Target};
pub use tick::{TickInput, TickOutcome, tick};
