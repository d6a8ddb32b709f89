//! Game loop
//!
//! Drives one session: read the clock once per frame, poll input, tick the
//! simulation, present the result, pace the frame.

use crate::platform::{Clock, InputSource};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickOutcome, tick};
use crate::view::{Presenter, Snapshot};

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// All lives lost
    GameOver,
    /// Input source asked to quit
    Quit,
}

/// Final result of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub seed: u64,
    pub score: u64,
    pub frames: u64,
    pub end: EndReason,
}

/// One play-through, from the first box to game over (or quit)
pub struct Session<C, I, P> {
    settings: Settings,
    state: GameState,
    clock: C,
    input: I,
    presenter: P,
}

impl<C: Clock, I: InputSource, P: Presenter> Session<C, I, P> {
    /// Start a session at the clock's current time
    pub fn new(settings: Settings, seed: u64, clock: C, input: I, presenter: P) -> Self {
        let state = GameState::new(&settings, seed, clock.now_ms());
        log::info!("Session started with seed: {}", seed);
        Self {
            settings,
            state,
            clock,
            input,
            presenter,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run until game over or quit; returns the final score
    pub fn run(&mut self) -> SessionSummary {
        let mut frames = 0;
        let end = loop {
            let now = self.clock.now_ms();

            let view = Snapshot::capture(&self.state, &self.settings, now);
            let input = self.input.poll(&view, now);
            if input.quit {
                log::info!("Quit requested");
                break EndReason::Quit;
            }

            let outcome = tick(&mut self.state, &input.into(), now);
            frames += 1;
            log_events(&self.state.events);

            self.presenter
                .present(&Snapshot::capture(&self.state, &self.settings, now));

            if let TickOutcome::SessionEnded { .. } = outcome {
                break EndReason::GameOver;
            }

            self.clock.tick(self.settings.fps);
        };

        SessionSummary {
            seed: self.state.seed,
            score: self.state.score,
            frames,
            end,
        }
    }
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::Spawned { id, lifetime } => {
                log::debug!("Box {} spawned ({:.2}s)", id, lifetime)
            }
            GameEvent::Expired { id } => log::debug!("Box {} expired", id),
            GameEvent::Hit { id } => log::debug!("Box {} hit", id),
            GameEvent::GameOver { score } => log::debug!("Game over event (score {})", score),
        }
    }
}
