//! Frame timing

use crate::consts::MAX_FRAME_DT;
use crate::sim::FrameTime;

/// Source of the current time and the time since the last frame
pub trait Clock {
    /// Current timestamp in seconds
    fn now(&self) -> f64;
    /// Seconds elapsed between the previous frame and this one
    fn delta_time(&self) -> f32;
}

impl FrameTime {
    /// Sample a clock for this frame
    pub fn from_clock(clock: &impl Clock) -> Self {
        Self::new(clock.now(), clock.delta_time())
    }
}

/// Clock advanced once per frame from an external timestamp
/// (`requestAnimationFrame` time, a fixed-step counter, ...)
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    now: f64,
    delta: f32,
    started: bool,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to a new frame timestamp (seconds).
    ///
    /// The first frame has a zero delta. Deltas never go negative and are
    /// capped at `MAX_FRAME_DT` so a stalled tab does not jump the game.
    pub fn advance_to(&mut self, now: f64) -> FrameTime {
        self.delta = if self.started {
            ((now - self.now) as f32).clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        if !self.started || now > self.now {
            self.now = now;
        }
        self.started = true;
        FrameTime::from_clock(self)
    }
}

impl Clock for FrameClock {
    fn now(&self) -> f64 {
        self.now
    }

    fn delta_time(&self) -> f32 {
        self.delta
    }
}
