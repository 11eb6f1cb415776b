//! LevelBuilder - Declarative level construction
//!
//! Provides a fluent API for stamping solid runs into a tile grid.

use tilerig_math::Vec2;
use tilerig_physics::TileGrid;

/// Builder for stamping tile levels
///
/// # Example
/// ```ignore
/// let (grid, spawn) = LevelBuilder::new(20, 12, 16.0)
///     .floor(10)
///     .block(8, 7, 2, 3)
///     .stairs(12, 9, 3)
///     .with_spawn(48.0, 48.0)
///     .build();
/// ```
pub struct LevelBuilder {
    grid: TileGrid,
    spawn: Vec2,
}

impl LevelBuilder {
    /// Create a builder for an empty grid
    pub fn new(width: i32, height: i32, cell_size: f32) -> Self {
        let grid = TileGrid::new(width, height, cell_size);
        // Default spawn: one cell in from the top-left corner
        let spawn = Vec2::new(cell_size * 1.5, cell_size * 1.5);
        Self { grid, spawn }
    }

    /// Set the player spawn position in world units
    pub fn with_spawn(mut self, x: f32, y: f32) -> Self {
        self.spawn = Vec2::new(x, y);
        self
    }

    /// Fill an entire row with solid cells
    pub fn floor(mut self, row: i32) -> Self {
        for ix in 0..self.grid.width() {
            self.grid.set(ix, row, true);
        }
        self
    }

    /// Stamp a horizontal run of solid cells
    pub fn platform(mut self, ix: i32, iy: i32, len: i32) -> Self {
        for dx in 0..len {
            self.grid.set(ix + dx, iy, true);
        }
        self
    }

    /// Stamp a vertical run of solid cells
    pub fn wall(mut self, ix: i32, iy: i32, len: i32) -> Self {
        for dy in 0..len {
            self.grid.set(ix, iy + dy, true);
        }
        self
    }

    /// Stamp a solid rectangle of cells
    pub fn block(mut self, ix: i32, iy: i32, w: i32, h: i32) -> Self {
        for dy in 0..h {
            for dx in 0..w {
                self.grid.set(ix + dx, iy + dy, true);
            }
        }
        self
    }

    /// Stamp a staircase rising to the right, one cell per step
    ///
    /// `(ix, iy)` is the bottom-left step; each step fills down to `iy`
    /// so the stairs are solid underneath.
    pub fn stairs(mut self, ix: i32, iy: i32, steps: i32) -> Self {
        for s in 0..steps {
            for dy in 0..=s {
                self.grid.set(ix + s, iy - dy, true);
            }
        }
        self
    }

    /// Build and return the grid with the spawn position
    pub fn build(self) -> (TileGrid, Vec2) {
        (self.grid, self.spawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_fills_row() {
        let (grid, _) = LevelBuilder::new(8, 8, 16.0).floor(6).build();
        for ix in 0..8 {
            assert!(grid.get(ix, 6));
        }
        assert!(!grid.get(0, 5));
    }

    #[test]
    fn test_platform_and_wall_runs() {
        let (grid, _) = LevelBuilder::new(8, 8, 16.0)
            .platform(2, 4, 3)
            .wall(6, 1, 4)
            .build();

        assert!(grid.get(2, 4) && grid.get(3, 4) && grid.get(4, 4));
        assert!(!grid.get(5, 4));
        assert!(grid.get(6, 1) && grid.get(6, 4));
        assert!(!grid.get(6, 5));
    }

    #[test]
    fn test_block_rectangle() {
        let (grid, _) = LevelBuilder::new(8, 8, 16.0).block(1, 2, 2, 3).build();
        assert!(grid.get(1, 2) && grid.get(2, 4));
        assert!(!grid.get(3, 2));
        assert!(!grid.get(1, 5));
    }

    #[test]
    fn test_stairs_solid_underneath() {
        let (grid, _) = LevelBuilder::new(8, 8, 16.0).stairs(2, 6, 3).build();
        // Step heights 1, 2, 3 going right
        assert!(grid.get(2, 6));
        assert!(grid.get(3, 6) && grid.get(3, 5));
        assert!(grid.get(4, 6) && grid.get(4, 5) && grid.get(4, 4));
        assert!(!grid.get(2, 5));
        assert!(!grid.get(4, 3));
    }

    #[test]
    fn test_spawn_default_and_override() {
        let (_, spawn) = LevelBuilder::new(8, 8, 16.0).build();
        assert_eq!(spawn, Vec2::new(24.0, 24.0));

        let (_, spawn) = LevelBuilder::new(8, 8, 16.0).with_spawn(100.0, 50.0).build();
        assert_eq!(spawn, Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_out_of_bounds_stamps_ignored() {
        let (grid, _) = LevelBuilder::new(4, 4, 16.0).platform(2, 3, 10).build();
        assert!(grid.get(2, 3) && grid.get(3, 3));
        // Cells past the edge are silently dropped
        assert!(!grid.get(4, 3));
    }
}
