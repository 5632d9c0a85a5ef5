//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time/frame deltas
//! - Input events

pub mod input;
pub mod time;

pub use input::{InputSource, InputState, Key, sample_frame_input};
pub use time::{Clock, FrameClock};
