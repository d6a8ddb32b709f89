//! Time sources and frame pacing

use std::time::{Duration, Instant};

/// Monotonic millisecond clock with a frame limiter
pub trait Clock {
    /// Milliseconds since the clock started
    fn now_ms(&self) -> u64;

    /// Block until the next frame is due at `fps` frames per second
    fn tick(&mut self, fps: u32);
}

/// Wall clock; `tick` sleeps off whatever is left of the frame budget
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
    last_frame: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn tick(&mut self, fps: u32) {
        let budget = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        let spent = self.last_frame.elapsed();
        if spent < budget {
            std::thread::sleep(budget - spent);
        }
        self.last_frame = Instant::now();
    }
}

/// Simulated clock that jumps a fixed step per frame
///
/// Runs sessions as fast as the CPU allows with reproducible timestamps.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: u64,
    /// Fixed step per tick; derived from the frame rate when `None`
    step_ms: Option<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: start_ms,
            step_ms: None,
        }
    }

    pub fn with_step(start_ms: u64, step_ms: u64) -> Self {
        Self {
            now: start_ms,
            step_ms: Some(step_ms),
        }
    }

    /// Move time forward without waiting for a frame
    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now
    }

    fn tick(&mut self, fps: u32) {
        let step = self
            .step_ms
            .unwrap_or_else(|| (1000.0 / fps.max(1) as f64).round() as u64);
        self.now += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_steps_by_fps() {
        let mut clock = ManualClock::new(1000);
        assert_eq!(clock.now_ms(), 1000);
        clock.tick(50);
        assert_eq!(clock.now_ms(), 1020);
        clock.advance(5);
        assert_eq!(clock.now_ms(), 1025);
    }

    #[test]
    fn test_manual_clock_fixed_step() {
        let mut clock = ManualClock::with_step(0, 100);
        clock.tick(60);
        clock.tick(60);
        assert_eq!(clock.now_ms(), 200);
    }

    #[test]
    fn test_system_clock_is_monotonic_and_paces() {
        let mut clock = SystemClock::new();
        let before = clock.now_ms();
        clock.tick(200);
        clock.tick(200);
        let after = clock.now_ms();
        assert!(after >= before + 5, "two 5ms frames should take at least ~5ms");
    }
}
