//! Drop - catch the falling raindrops
//!
//! Core modules:
//! - `sim`: Per-frame simulation (bucket, raindrops, scoring)
//! - `renderer`: Sprite batching and the WebGPU pipeline
//! - `platform`: Clock and input abstraction
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{KeyBindings, Settings};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Window title
    pub const WINDOW_TITLE: &str = "Drop";

    /// World (and default window) dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    /// Raindrop sprite/hitbox size
    pub const DROP_SIZE: f32 = 64.0;

    /// Bucket sprite/hitbox size
    pub const BUCKET_SIZE: f32 = 64.0;
    /// Bottom edge of the bucket, above the bottom of the screen
    pub const BUCKET_Y: f32 = 20.0;

    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Clear color (dark blue)
    pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.2, 1.0];

    /// HUD label anchors
    pub const SCORE_LABEL_POS: (f32, f32) = (SCREEN_WIDTH - 128.0, SCREEN_HEIGHT - 64.0);
    pub const HIGH_SCORE_LABEL_POS: (f32, f32) = (SCREEN_WIDTH - 128.0, SCREEN_HEIGHT - 128.0);
}
