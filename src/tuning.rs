//! Data-driven game balance
//!
//! Defaults reproduce the classic feel; a JSON document can override any
//! subset of fields.

use serde::{Deserialize, Serialize};

/// A fall-speed tier: applies while the score is below `below_score`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedBand {
    pub below_score: u32,
    /// Units per second
    pub speed: f32,
}

impl SpeedBand {
    pub const fn new(below_score: u32, speed: f32) -> Self {
        Self { below_score, speed }
    }
}

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Bucket speed under keyboard control (units/s)
    pub bucket_speed: f32,
    /// Seconds between raindrop spawns
    pub spawn_interval: f64,
    /// Fall-speed tiers, ascending by `below_score`
    pub speed_bands: Vec<SpeedBand>,
    /// Fall speed once the score is past every band (units/s)
    pub top_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            bucket_speed: 200.0,
            spawn_interval: 1.0,
            speed_bands: vec![
                SpeedBand::new(10, 200.0),
                SpeedBand::new(20, 250.0),
                SpeedBand::new(30, 300.0),
                SpeedBand::new(40, 350.0),
                SpeedBand::new(50, 500.0),
            ],
            top_speed: 700.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Raindrop fall speed for the given score
    pub fn fall_speed(&self, score: u32) -> f32 {
        self.speed_bands
            .iter()
            .find(|band| score < band.below_score)
            .map(|band| band.speed)
            .unwrap_or(self.top_speed)
    }
}
