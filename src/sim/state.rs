//! Game state and core simulation types
//!
//! Everything the frame step reads or writes lives in `GameState`, so the
//! simulation is a function of this value plus input and time.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance values this run was started with
    pub tuning: Tuning,
    /// Player bucket
    pub bucket: Rect,
    /// Falling raindrops, in spawn order
    pub raindrops: Vec<Rect>,
    /// Drops caught since the last miss
    pub score: u32,
    /// Best score reached before a miss
    pub high_score: u32,
    /// Timestamp (seconds) of the most recent spawn
    pub last_spawn: f64,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game state with default tuning
    pub fn new(seed: u64, now: f64) -> Self {
        Self::with_tuning(Tuning::default(), seed, now)
    }

    /// Create a new game state: centered bucket and a single raindrop
    pub fn with_tuning(tuning: Tuning, seed: u64, now: f64) -> Self {
        let mut state = Self {
            seed,
            tuning,
            bucket: Rect::new(
                SCREEN_WIDTH / 2.0 - BUCKET_SIZE / 2.0,
                BUCKET_Y,
                BUCKET_SIZE,
                BUCKET_SIZE,
            ),
            raindrops: Vec::new(),
            score: 0,
            high_score: 0,
            last_spawn: now,
            rng: Pcg32::seed_from_u64(seed),
        };

        state.spawn_drop(now);

        state
    }

    /// Spawn a raindrop at the top edge, at a random whole-unit column
    pub fn spawn_drop(&mut self, now: f64) {
        let max_x = (SCREEN_WIDTH - DROP_SIZE) as u32;
        let x = self.rng.random_range(0..=max_x) as f32;
        self.raindrops
            .push(Rect::new(x, SCREEN_HEIGHT, DROP_SIZE, DROP_SIZE));
        self.last_spawn = now;
        log::debug!("Spawned raindrop at x={} ({} falling)", x, self.raindrops.len());
    }

    /// Rightmost allowed bucket x
    #[inline]
    pub fn bucket_max_x() -> f32 {
        SCREEN_WIDTH - BUCKET_SIZE
    }
}
