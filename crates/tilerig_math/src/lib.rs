//! 2D Mathematics Library
//!
//! This crate provides the small vector algebra and interpolation helpers
//! used by the tilerig movement core.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components (+y is down)
//! - [`appr`] - clamped approach-toward helper
//! - [`subdivide`] - line-segment subdivision at a fixed unit length

mod vec2;
mod approach;
pub mod segment;

pub use vec2::Vec2;
pub use approach::appr;
pub use segment::subdivide;
