//! Per-frame simulation step
//!
//! Moves the bucket, spawns raindrops on a timer, drops them at a
//! score-dependent speed, and settles catches and misses.

use glam::Vec2;

use super::state::GameState;
use crate::consts::*;

/// Input commands for a single frame, already in world space
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Pointer position while pressed (world space)
    pub pointer: Option<Vec2>,
    /// Move-left key held
    pub move_left: bool,
    /// Move-right key held
    pub move_right: bool,
}

/// Frame timing: wall-clock timestamp and elapsed time since the last frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds, on the same timebase as `GameState::last_spawn`
    pub now: f64,
    /// Seconds since the previous frame
    pub dt: f32,
}

impl FrameTime {
    pub const fn new(now: f64, dt: f32) -> Self {
        Self { now, dt }
    }
}

/// Advance a game state by one frame, returning the next state
pub fn update(mut state: GameState, input: &FrameInput, time: FrameTime) -> GameState {
    step(&mut state, input, time);
    state
}

/// Advance the game state by one frame in place
pub fn step(state: &mut GameState, input: &FrameInput, time: FrameTime) {
    let dt = time.dt.max(0.0);

    move_bucket(state, input, dt);

    if time.now - state.last_spawn > state.tuning.spawn_interval {
        state.spawn_drop(time.now);
    }

    advance_raindrops(state, dt);
}

fn move_bucket(state: &mut GameState, input: &FrameInput, dt: f32) {
    // Center the bucket under the pointer; pointer y is irrelevant
    if let Some(pointer) = input.pointer {
        if pointer.x.is_finite() {
            state.bucket.x = pointer.x - BUCKET_SIZE / 2.0;
        }
    }

    let direction = input.move_right as i8 - input.move_left as i8;
    if direction != 0 {
        state.bucket.x += direction as f32 * state.tuning.bucket_speed * dt;
    }

    state.bucket.x = state.bucket.x.clamp(0.0, GameState::bucket_max_x());
}

/// Move every drop, then settle it: below the screen is a miss, touching
/// the bucket is a catch. Off-screen is checked first.
fn advance_raindrops(state: &mut GameState, dt: f32) {
    let GameState {
        tuning,
        bucket,
        raindrops,
        score,
        high_score,
        ..
    } = state;

    raindrops.retain_mut(|drop| {
        // Speed follows the score as it changes during this pass
        drop.y -= tuning.fall_speed(*score) * dt;

        if drop.top() < 0.0 {
            if *score > *high_score {
                *high_score = *score;
                log::info!("New high score: {}", high_score);
            }
            log::debug!("Missed a raindrop, score {} reset", score);
            *score = 0;
            false
        } else if drop.overlaps(bucket) {
            *score += 1;
            log::debug!("Caught a raindrop, score {}", score);
            false
        } else {
            true
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Rect;
    use proptest::prelude::*;

    /// A state with no raindrops and a spawn timer that will not fire at `now`
    fn quiet_state(now: f64) -> GameState {
        let mut state = GameState::new(12345, now);
        state.raindrops.clear();
        state
    }

    fn drop_at(x: f32, y: f32) -> Rect {
        Rect::new(x, y, DROP_SIZE, DROP_SIZE)
    }

    #[test]
    fn test_pointer_centers_bucket() {
        let state = quiet_state(0.0);
        let input = FrameInput {
            pointer: Some(Vec2::new(100.0, 400.0)),
            ..Default::default()
        };
        let state = update(state, &input, FrameTime::new(0.0, 0.016));
        assert_eq!(state.bucket.x, 68.0);
        assert_eq!(state.bucket.y, BUCKET_Y);
    }

    #[test]
    fn test_keys_move_bucket() {
        let state = quiet_state(0.0);
        let left = FrameInput {
            move_left: true,
            ..Default::default()
        };
        let state = update(state, &left, FrameTime::new(0.0, 0.5));
        assert_eq!(state.bucket.x, 268.0);

        let right = FrameInput {
            move_right: true,
            ..Default::default()
        };
        let state = update(state, &right, FrameTime::new(0.0, 0.25));
        assert_eq!(state.bucket.x, 318.0);
    }

    #[test]
    fn test_both_keys_cancel() {
        let state = quiet_state(0.0);
        let input = FrameInput {
            move_left: true,
            move_right: true,
            ..Default::default()
        };
        let state = update(state, &input, FrameTime::new(0.0, 0.5));
        assert_eq!(state.bucket.x, 368.0);
    }

    #[test]
    fn test_keys_apply_after_pointer() {
        let state = quiet_state(0.0);
        let input = FrameInput {
            pointer: Some(Vec2::new(432.0, 0.0)),
            move_right: true,
            ..Default::default()
        };
        let state = update(state, &input, FrameTime::new(0.0, 0.1));
        assert_eq!(state.bucket.x, 420.0);
    }

    #[test]
    fn test_bucket_clamped_to_screen() {
        let state = quiet_state(0.0);
        let input = FrameInput {
            pointer: Some(Vec2::new(-500.0, 0.0)),
            ..Default::default()
        };
        let state = update(state, &input, FrameTime::new(0.0, 0.0));
        assert_eq!(state.bucket.x, 0.0);

        let input = FrameInput {
            pointer: Some(Vec2::new(5000.0, 0.0)),
            ..Default::default()
        };
        let state = update(state, &input, FrameTime::new(0.0, 0.0));
        assert_eq!(state.bucket.x, SCREEN_WIDTH - BUCKET_SIZE);
    }

    #[test]
    fn test_non_finite_pointer_ignored() {
        let state = quiet_state(0.0);
        let input = FrameInput {
            pointer: Some(Vec2::new(f32::NAN, 0.0)),
            ..Default::default()
        };
        let state = update(state, &input, FrameTime::new(0.0, 0.0));
        assert_eq!(state.bucket.x, 368.0);
    }

    #[test]
    fn test_spawn_timer() {
        let state = quiet_state(0.0);

        // Exactly one interval is not enough
        let state = update(state, &FrameInput::default(), FrameTime::new(1.0, 0.0));
        assert!(state.raindrops.is_empty());

        let state = update(state, &FrameInput::default(), FrameTime::new(1.001, 0.0));
        assert_eq!(state.raindrops.len(), 1);
        assert_eq!(state.last_spawn, 1.001);

        // At most one spawn per frame, even after a long gap
        let state = update(state, &FrameInput::default(), FrameTime::new(10.0, 0.0));
        assert_eq!(state.raindrops.len(), 2);
    }

    #[test]
    fn test_miss_resets_score_and_records_high_score() {
        let mut state = quiet_state(0.0);
        state.score = 9;
        state.high_score = 4;
        state.raindrops.push(drop_at(600.0, 1.0));

        let state = update(state, &FrameInput::default(), FrameTime::new(0.5, 1.0));
        assert!(state.raindrops.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 9);
    }

    #[test]
    fn test_miss_keeps_higher_high_score() {
        let mut state = quiet_state(0.0);
        state.score = 3;
        state.high_score = 20;
        state.raindrops.push(drop_at(600.0, 1.0));

        let state = update(state, &FrameInput::default(), FrameTime::new(0.5, 1.0));
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 20);
    }

    #[test]
    fn test_drop_just_above_bottom_survives() {
        let mut state = quiet_state(0.0);
        // 200 u/s for 0.1 s: y = -60, top edge still on screen
        state.raindrops.push(drop_at(600.0, -40.0));
        let state = update(state, &FrameInput::default(), FrameTime::new(0.0, 0.1));
        assert_eq!(state.raindrops.len(), 1);
        assert_eq!(state.raindrops[0].y, -60.0);
    }

    #[test]
    fn test_catch_increments_score() {
        let mut state = quiet_state(0.0);
        state.score = 5;
        state.high_score = 2;
        state.raindrops.push(drop_at(368.0, 20.0));

        let state = update(state, &FrameInput::default(), FrameTime::new(0.0, 0.0));
        assert!(state.raindrops.is_empty());
        assert_eq!(state.score, 6);
        assert_eq!(state.high_score, 2);
    }

    #[test]
    fn test_catch_after_falling_into_bucket() {
        let mut state = quiet_state(0.0);
        state.raindrops.push(drop_at(380.0, 100.0));
        // Falls 20 units: bottom at 80, bucket top at 84
        let state = update(state, &FrameInput::default(), FrameTime::new(0.0, 0.1));
        assert!(state.raindrops.is_empty());
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_touching_edge_is_not_a_catch() {
        let mut state = quiet_state(0.0);
        state.raindrops.push(drop_at(368.0 + 64.0, 20.0));
        let state = update(state, &FrameInput::default(), FrameTime::new(0.0, 0.0));
        assert_eq!(state.raindrops.len(), 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_speed_band_follows_score() {
        let mut state = quiet_state(0.0);
        state.score = 25;
        state.raindrops.push(drop_at(0.0, 400.0));
        let state = update(state, &FrameInput::default(), FrameTime::new(0.0, 0.1));
        assert_eq!(state.raindrops[0].y, 370.0);
    }

    #[test]
    fn test_score_change_affects_later_drops_in_same_frame() {
        let mut state = quiet_state(0.0);
        state.score = 9;
        // First drop is caught (score becomes 10), second falls at the 10+ band
        state.raindrops.push(drop_at(368.0, 20.0));
        state.raindrops.push(drop_at(0.0, 400.0));
        let state = update(state, &FrameInput::default(), FrameTime::new(0.0, 0.1));
        assert_eq!(state.score, 10);
        assert_eq!(state.raindrops.len(), 1);
        assert_eq!(state.raindrops[0].y, 375.0);
    }

    #[test]
    fn test_zero_dt_without_input_is_idempotent() {
        let mut state = GameState::new(777, 0.0);
        state.score = 4;
        state.high_score = 11;
        state.raindrops.push(drop_at(10.0, 300.0));
        let before = state.clone();

        let after = update(state, &FrameInput::default(), FrameTime::new(0.5, 0.0));
        assert_eq!(after.bucket, before.bucket);
        assert_eq!(after.score, before.score);
        assert_eq!(after.high_score, before.high_score);
        assert_eq!(after.raindrops, before.raindrops);
    }

    #[test]
    fn test_negative_dt_treated_as_zero() {
        let mut state = quiet_state(0.0);
        state.raindrops.push(drop_at(10.0, 300.0));
        let input = FrameInput {
            move_left: true,
            ..Default::default()
        };
        let state = update(state, &input, FrameTime::new(0.0, -1.0));
        assert_eq!(state.bucket.x, 368.0);
        assert_eq!(state.raindrops[0].y, 300.0);
    }

    #[test]
    fn test_determinism() {
        let inputs = [
            FrameInput {
                move_left: true,
                ..Default::default()
            },
            FrameInput::default(),
            FrameInput {
                pointer: Some(Vec2::new(100.0, 0.0)),
                ..Default::default()
            },
            FrameInput {
                move_right: true,
                ..Default::default()
            },
        ];

        let mut state1 = GameState::new(99999, 0.0);
        let mut state2 = GameState::new(99999, 0.0);
        for frame in 0..600 {
            let input = &inputs[frame % inputs.len()];
            let time = FrameTime::new(frame as f64 / 60.0, 1.0 / 60.0);
            step(&mut state1, input, time);
            step(&mut state2, input, time);
        }

        assert_eq!(state1.bucket, state2.bucket);
        assert_eq!(state1.raindrops, state2.raindrops);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.high_score, state2.high_score);
    }

    fn arb_input() -> impl Strategy<Value = FrameInput> {
        (
            proptest::option::of(-2000.0f32..3000.0),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(pointer_x, move_left, move_right)| FrameInput {
                pointer: pointer_x.map(|x| Vec2::new(x, 0.0)),
                move_left,
                move_right,
            })
    }

    proptest! {
        #[test]
        fn prop_bucket_stays_on_screen(
            start_x in -1000.0f32..2000.0,
            input in arb_input(),
            dt in 0.0f32..10.0,
        ) {
            let mut state = quiet_state(0.0);
            state.bucket.x = start_x;
            let state = update(state, &input, FrameTime::new(0.0, dt));
            prop_assert!(state.bucket.x >= 0.0);
            prop_assert!(state.bucket.x <= SCREEN_WIDTH - BUCKET_SIZE);
        }

        #[test]
        fn prop_high_score_never_decreases(
            seed in any::<u64>(),
            frames in proptest::collection::vec((arb_input(), 0.0f32..0.2), 1..300),
        ) {
            let mut state = GameState::new(seed, 0.0);
            let mut now = 0.0f64;
            let mut best = state.high_score;
            for (input, dt) in &frames {
                now += *dt as f64;
                step(&mut state, input, FrameTime::new(now, *dt));
                prop_assert!(state.high_score >= best);
                prop_assert!(state.raindrops.iter().all(|d| d.top() >= 0.0));
                best = state.high_score;
            }
        }
    }
}
