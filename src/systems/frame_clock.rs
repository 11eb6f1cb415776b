//! Frame timing
//!
//! Measures the wall-clock delta between frames and keeps the previous
//! delta around, since the integrator consumes `(dt, dt0)` pairs. The raw
//! delta is clamped to [fixed, 2*fixed] milliseconds so a stall or a
//! too-fast host never produces a degenerate step.

use std::time::Instant;

/// Clamp a raw frame delta to the usable band around the fixed step
///
/// Both arguments and the result are in milliseconds.
pub fn clamp_delta(raw_ms: f32, fixed_ms: f32) -> f32 {
    raw_ms.clamp(fixed_ms, 2.0 * fixed_ms)
}

/// Tracks frame deltas for the variable-timestep integrator
pub struct FrameClock {
    last_frame: Instant,
    fixed_ms: f32,
    dt0: f32,
}

impl FrameClock {
    /// Create a clock for the given base simulation rate
    pub fn new(base_hz: f32) -> Self {
        let fixed_ms = 1000.0 / base_hz;
        Self {
            last_frame: Instant::now(),
            fixed_ms,
            // Seed the previous delta so the first frame is a clean step
            dt0: fixed_ms,
        }
    }

    /// The fixed step in milliseconds
    pub fn fixed_ms(&self) -> f32 {
        self.fixed_ms
    }

    /// Measure the delta since the previous call
    ///
    /// Returns `(dt, dt0)`: this frame's clamped delta and the previous
    /// frame's, both in milliseconds.
    pub fn tick(&mut self) -> (f32, f32) {
        let now = Instant::now();
        let raw_ms = (now - self.last_frame).as_secs_f32() * 1000.0;
        let dt = clamp_delta(raw_ms, self.fixed_ms);
        self.last_frame = now;

        let dt0 = self.dt0;
        self.dt0 = dt;
        (dt, dt0)
    }
}
