//! Per-frame input intent
//!
//! The host samples its input devices and hands the simulation a frame of
//! named intensities. This crate resolves those raw intensities into
//! movement intents; it never talks to devices itself.

mod intent;

pub use intent::{resolve_axis, InputFrame};
