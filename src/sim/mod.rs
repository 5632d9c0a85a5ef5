//! Per-frame simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Time comes in through `FrameTime`
//! - Input comes in through `FrameInput`
//! - Randomness comes from the seeded RNG owned by `GameState`

pub mod demo;
pub mod rect;
pub mod state;
pub mod tick;

pub use demo::autopilot;
pub use rect::Rect;
pub use state::GameState;
pub use tick::{FrameInput, FrameTime, step, update};
