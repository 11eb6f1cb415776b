//! Named tick durations
//!
//! Design-level timing budgets (jump charge window, alignment smoothing
//! window, bullet lifetime) expressed as named durations derived from the
//! base simulation rate, so call sites never carry magic milliseconds.

use serde::{Serialize, Deserialize};

/// Tick-duration table in milliseconds, derived from a base rate
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Ticks {
    /// 60 ticks (one second at 60 Hz)
    pub seconds: f32,
    /// 30 ticks
    pub half: f32,
    /// 15 ticks
    pub lengths: f32,
    /// 10 ticks
    pub sixth: f32,
    /// 5 ticks
    pub five: f32,
    /// 3 ticks
    pub three: f32,
    /// 1 tick
    pub one: f32,
}

impl Ticks {
    /// Build the table from a base simulation rate in Hz
    pub fn from_rate(rate_hz: f32) -> Self {
        let rate = 1000.0 / rate_hz;
        Self {
            seconds: 60.0 * rate,
            half: 30.0 * rate,
            lengths: 15.0 * rate,
            sixth: 10.0 * rate,
            five: 5.0 * rate,
            three: 3.0 * rate,
            one: rate,
        }
    }
}

impl Default for Ticks {
    fn default() -> Self {
        Self::from_rate(60.0)
    }
}
