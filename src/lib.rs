//! tilerig - 2D tile platformer movement core
//!
//! A Verlet-integrated character movement core over a boolean tile grid:
//! directional sensor probes, exact push-out, display-position smoothing,
//! and a character controller on top.

pub mod config;
pub mod scene;
pub mod systems;

pub use config::AppConfig;
