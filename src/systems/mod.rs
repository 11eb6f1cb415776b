//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod frame_clock;

pub use frame_clock::{clamp_delta, FrameClock};
