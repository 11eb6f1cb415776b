//! Tile-grid movement core for tilerig
//!
//! This crate provides the 2D platformer movement simulation:
//! - Boolean tile grid used as the static collision map
//! - Verlet point-mass bodies with per-body time scaling
//! - Directional sensors with a signed clearance/penetration contract
//! - Facing-relative sensor pairs
//! - Grid-snapped display-position smoothing
//! - The player character controller tying it all together

pub mod align;
pub mod body;
pub mod grid;
pub mod player;
pub mod sensor;
pub mod ticks;

// Re-export commonly used types
pub use align::BodyAlign;
pub use body::{Body, BodyConfig};
pub use grid::TileGrid;
pub use player::{ContactFlags, Player, PlayerConfig, PlayerInput, Pose};
pub use sensor::{Dir, Facing, Sensor};
pub use ticks::Ticks;
