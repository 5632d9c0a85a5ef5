//! Idle/demo mode - the game plays itself
//!
//! Chases the lowest raindrop with the movement keys, the same way a player
//! on a keyboard would.

use super::state::GameState;
use super::tick::FrameInput;

/// Horizontal distance (units) within which the bucket stops chasing
const DEAD_ZONE: f32 = 4.0;

/// Produce this frame's input for the autopilot
pub fn autopilot(state: &GameState) -> FrameInput {
    let target = state
        .raindrops
        .iter()
        .min_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal));

    let Some(target) = target else {
        return FrameInput::default();
    };

    let offset = target.center().x - state.bucket.center().x;
    FrameInput {
        pointer: None,
        move_left: offset < -DEAD_ZONE,
        move_right: offset > DEAD_ZONE,
    }
}
