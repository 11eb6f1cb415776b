//! Core entity and drawing seams for tilerig
//!
//! This crate provides:
//! - [`Entity`] - the init/update/draw capability contract
//! - [`Lifed`] - composition wrapper tracking elapsed lifetime
//! - [`Pool`] - generational arena for transient entities
//! - [`DrawSurface`] / [`SpriteRegion`] - the rendering collaborator seam

pub mod draw;
pub mod entity;
pub mod pool;

pub use draw::{DrawSurface, SpriteRegion, TraceSurface};
pub use entity::{Entity, Lifed};
pub use pool::{Pool, PoolKey};
