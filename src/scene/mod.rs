//! Scene construction and the playfield entity
//!
//! This module provides a declarative API for stamping tile levels and
//! the playfield that runs a level.

mod level_builder;
mod playfield;

pub use level_builder::LevelBuilder;
pub use playfield::{Bullet, Playfield};
