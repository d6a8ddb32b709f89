//! Box spawner
//!
//! Decides when the next box appears and how long it lives. Both the spawn
//! cooldown and the box lifetime shrink as the score grows.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use super::target::Target;
use crate::{lerp, seconds_to_ms};

/// Scores at or below this use the easiest difficulty
pub const EASY_SCORE: u64 = 5;
/// Scores at or above this use the hardest difficulty
pub const HARD_SCORE: u64 = 20;

/// Minimum spawn cooldown (seconds) for a score
///
/// The linear part does not meet the clamped ends exactly (0.9 at score 5,
/// 0.0 at score 20); the clamps win at the breakpoints.
pub fn min_spawn_seconds(score: u64) -> f64 {
    if score <= EASY_SCORE {
        return 1.0;
    }
    if score >= HARD_SCORE {
        return 0.1;
    }
    1.2 - 0.06 * score as f64
}

/// Box lifetime (seconds) for a score
pub fn lifetime_from_score(score: u64) -> f64 {
    if score <= EASY_SCORE {
        return 7.0;
    }
    if score >= HARD_SCORE {
        return 1.0;
    }
    9.0 - 0.4 * score as f64
}

/// Random top-left corner inside `bounds`
///
/// Draws x before y, each interpolated from the far edge toward the near edge.
/// The result is pinned to the bounds so f32 rounding never leaves them.
pub fn random_position_within(bounds: &Rect, rng: &mut impl Rng) -> Vec2 {
    let x = lerp(bounds.right(), bounds.left(), rng.random::<f32>());
    let y = lerp(bounds.bottom(), bounds.top(), rng.random::<f32>());
    Vec2::new(
        x.max(bounds.left()).min(bounds.right()),
        y.max(bounds.top()).min(bounds.bottom()),
    )
}

/// Cooldown (ms) picked uniformly from `[min, min + window)`
///
/// Drawn in whole milliseconds so the upper end stays exclusive.
pub fn random_cooldown_ms(score: u64, window: f64, rng: &mut impl Rng) -> u64 {
    let min_ms = seconds_to_ms(min_spawn_seconds(score));
    let window_ms = seconds_to_ms(window);
    if window_ms == 0 {
        return min_ms;
    }
    rng.random_range(min_ms..min_ms + window_ms)
}

/// Factory producing boxes at randomized intervals
#[derive(Debug, Clone)]
pub struct Spawner {
    /// Region boxes spawn in (top-left corners)
    pub bounds: Rect,
    /// Width of the random part of the cooldown (seconds)
    pub spawn_window: f64,
    next_spawn_at: u64,
    rng: Pcg32,
}

impl Spawner {
    /// Create a spawner and schedule its first spawn from `now` (ms)
    pub fn new(bounds: Rect, spawn_window: f64, seed: u64, now: u64) -> Self {
        let mut spawner = Self {
            bounds,
            spawn_window,
            next_spawn_at: now,
            rng: Pcg32::seed_from_u64(seed),
        };
        spawner.reset_timer(0, now);
        spawner
    }

    /// Timestamp (ms) of the next scheduled spawn
    #[inline]
    pub fn next_spawn_at(&self) -> u64 {
        self.next_spawn_at
    }

    /// Spawn a box if the cooldown has run out
    pub fn maybe_spawn(&mut self, score: u64, now: u64) -> Option<Target> {
        if now >= self.next_spawn_at {
            Some(self.spawn_now(score, now))
        } else {
            None
        }
    }

    /// Spawn a box regardless of the cooldown and restart it
    pub fn spawn_now(&mut self, score: u64, now: u64) -> Target {
        let lifetime = lifetime_from_score(score);
        let topleft = random_position_within(&self.bounds, &mut self.rng);

        self.reset_timer(score, now);
        Target::new(lifetime, topleft, now)
    }

    /// Pick a new cooldown and schedule the next spawn after it
    pub fn reset_timer(&mut self, score: u64, now: u64) {
        let cooldown = random_cooldown_ms(score, self.spawn_window, &mut self.rng);
        self.next_spawn_at = now + cooldown;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_easy_breakpoint() {
        for score in 0..=EASY_SCORE {
            assert_eq!(min_spawn_seconds(score), 1.0);
            assert_eq!(lifetime_from_score(score), 7.0);
        }
    }

    #[test]
    fn test_hard_breakpoint() {
        for score in [HARD_SCORE, 21, 25, 100, u64::MAX] {
            assert_eq!(min_spawn_seconds(score), 0.1);
            assert_eq!(lifetime_from_score(score), 1.0);
        }
    }

    #[test]
    fn test_linear_section() {
        for score in (EASY_SCORE + 1)..HARD_SCORE {
            assert_eq!(min_spawn_seconds(score), 1.2 - 0.06 * score as f64);
            assert_eq!(lifetime_from_score(score), 9.0 - 0.4 * score as f64);
        }
        assert!((min_spawn_seconds(6) - 0.84).abs() < 1e-9);
        assert!((lifetime_from_score(6) - 6.6).abs() < 1e-9);
        assert!((min_spawn_seconds(19) - 0.06).abs() < 1e-9);
        assert!((lifetime_from_score(19) - 1.4).abs() < 1e-9);
    }

    #[test]
    fn test_linear_section_strictly_decreasing() {
        for score in (EASY_SCORE + 1)..(HARD_SCORE - 1) {
            assert!(min_spawn_seconds(score + 1) < min_spawn_seconds(score));
            assert!(lifetime_from_score(score + 1) < lifetime_from_score(score));
        }
    }

    #[test]
    fn test_maybe_spawn_waits_for_cooldown() {
        let bounds = Rect::new(100.0, 100.0, 600.0, 400.0);
        let mut spawner = Spawner::new(bounds, 1.0, 7, 0);
        let due = spawner.next_spawn_at();

        // Cooldown at score 0 is in [1.0, 2.0) seconds
        assert!((1000..2000).contains(&due));

        assert!(spawner.maybe_spawn(0, due - 1).is_none());
        assert_eq!(spawner.next_spawn_at(), due);

        let target = spawner.maybe_spawn(0, due).expect("cooldown elapsed");
        assert_eq!(target.created_at(), due);
        assert_eq!(target.lifetime(), 7.0);
        assert!(spawner.next_spawn_at() >= due + 1000);
    }

    #[test]
    fn test_spawn_now_uses_score_lifetime() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let mut spawner = Spawner::new(bounds, 0.5, 1, 0);

        let target = spawner.spawn_now(25, 10_000);
        assert_eq!(target.lifetime(), 1.0);
        // Cooldown at score 25 is in [0.1, 0.6) seconds
        let next = spawner.next_spawn_at();
        assert!((10_100..10_600).contains(&next));
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let bounds = Rect::new(100.0, 100.0, 600.0, 400.0);
        let mut a = Spawner::new(bounds, 1.0, 42, 0);
        let mut b = Spawner::new(bounds, 1.0, 42, 0);

        for i in 0..20 {
            let ta = a.spawn_now(i, i * 500);
            let tb = b.spawn_now(i, i * 500);
            assert_eq!(ta.topleft, tb.topleft);
            assert_eq!(a.next_spawn_at(), b.next_spawn_at());
        }
    }

    #[test]
    fn test_cooldown_upper_end_is_exclusive() {
        let bounds = Rect::new(100.0, 100.0, 600.0, 400.0);
        for seed in 0..20_000 {
            let spawner = Spawner::new(bounds, 1.0, seed, 0);
            let due = spawner.next_spawn_at();
            assert!((1000..2000).contains(&due), "seed {} scheduled at {}", seed, due);
        }

        let mut spawner = Spawner::new(bounds, 1.0, 3, 0);
        for score in 0..30 {
            let now = 50_000 + score * 1000;
            let min_ms = seconds_to_ms(min_spawn_seconds(score));
            for _ in 0..200 {
                spawner.reset_timer(score, now);
                let next = spawner.next_spawn_at();
                assert!(next >= now + min_ms && next < now + min_ms + 1000);
            }
        }
    }

    #[test]
    fn test_zero_window_uses_minimum() {
        let mut rng = Pcg32::seed_from_u64(9);
        assert_eq!(random_cooldown_ms(0, 0.0, &mut rng), 1000);
        assert_eq!(random_cooldown_ms(25, 0.0, &mut rng), 100);
    }

    proptest! {
        #[test]
        fn prop_position_within_bounds(
            left in -500.0f32..500.0,
            top in -500.0f32..500.0,
            width in 0.0f32..1000.0,
            height in 0.0f32..1000.0,
            seed in any::<u64>(),
        ) {
            let bounds = Rect::new(left, top, width, height);
            let mut rng = Pcg32::seed_from_u64(seed);
            let pos = random_position_within(&bounds, &mut rng);
            prop_assert!(pos.x >= bounds.left() && pos.x <= bounds.right());
            prop_assert!(pos.y >= bounds.top() && pos.y <= bounds.bottom());
        }

        #[test]
        fn prop_lifetime_never_increases(score in 0u64..1000) {
            prop_assert!(lifetime_from_score(score + 1) <= lifetime_from_score(score));
            prop_assert!(lifetime_from_score(score) >= 1.0);
            prop_assert!(min_spawn_seconds(score) > 0.0);
        }

        #[test]
        fn prop_cooldown_in_window(score in 0u64..40, seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let min_ms = seconds_to_ms(min_spawn_seconds(score));
            let cooldown = random_cooldown_ms(score, 1.0, &mut rng);
            prop_assert!(cooldown >= min_ms && cooldown < min_ms + 1000);
        }
    }
}
