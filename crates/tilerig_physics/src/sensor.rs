//! Directional grid sensors
//!
//! A sensor is a stateless probe bound to an offset from some position
//! source. Every query scans the grid fresh from the source's current
//! position, so the same sensor can probe a body's true position or its
//! smoothed display position.
//!
//! Sign contract, relied on by every consumer:
//! - positive: that many units of clearance before an obstacle
//! - zero: flush against an obstacle boundary (the grounded test)
//! - negative: currently overlapping an obstacle by that many units

use crate::grid::TileGrid;

/// Cardinal scan direction (+y is down)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    fn step(self) -> (f32, f32) {
        match self {
            Dir::Up => (0.0, -1.0),
            Dir::Down => (0.0, 1.0),
            Dir::Left => (-1.0, 0.0),
            Dir::Right => (1.0, 0.0),
        }
    }
}

/// A directional ray probe at a fixed offset from its position source
#[derive(Clone, Copy, Debug, Default)]
pub struct Sensor {
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Sensor {
    pub fn new(offset_x: f32, offset_y: f32) -> Self {
        Self { offset_x, offset_y }
    }

    /// Signed clearance/penetration distance in direction `dir`
    ///
    /// The probe point is the floored world position plus this sensor's
    /// offset. Scans advance one world unit at a time over a range of
    /// four cells' worth of units.
    pub fn probe(&self, grid: &TileGrid, x: f32, y: f32, dir: Dir) -> f32 {
        let px = (x + self.offset_x).floor();
        let py = (y + self.offset_y).floor();
        let size = (grid.cell_size() * 4.0) as i32;
        let (sx, sy) = dir.step();

        if !grid.get_world(px, py) {
            // Clear at the probe point: march outward to the first obstacle
            for i in 1..=size {
                let i = i as f32;
                if grid.get_world(px + sx * i, py + sy * i) {
                    return i;
                }
            }
            size as f32
        } else {
            // Overlapping: march inward to the first empty cell
            for i in 1..=size {
                let fi = i as f32;
                if !grid.get_world(px - sx * fi, py - sy * fi) {
                    return (1 - i) as f32;
                }
            }
            -(size as f32)
        }
    }

    /// Clearance above the probe point
    pub fn up(&self, grid: &TileGrid, x: f32, y: f32) -> f32 {
        self.probe(grid, x, y, Dir::Up)
    }

    /// Clearance below the probe point
    pub fn down(&self, grid: &TileGrid, x: f32, y: f32) -> f32 {
        self.probe(grid, x, y, Dir::Down)
    }

    /// Clearance to the left of the probe point
    pub fn left(&self, grid: &TileGrid, x: f32, y: f32) -> f32 {
        self.probe(grid, x, y, Dir::Left)
    }

    /// Clearance to the right of the probe point
    pub fn right(&self, grid: &TileGrid, x: f32, y: f32) -> f32 {
        self.probe(grid, x, y, Dir::Right)
    }
}

/// A pair of opposed sensors resolved against a facing sign
///
/// `front` is the sensor on the side the entity faces (`facing < 0` is
/// left). The `a_front`/`a_back` readings keep the sensor sign contract
/// regardless of which physical side is front, so "front is blocked" is
/// always `a_front <= 0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Facing {
    pub left: Sensor,
    pub right: Sensor,
}

impl Facing {
    pub fn new(left: Sensor, right: Sensor) -> Self {
        Self { left, right }
    }

    /// The sensor on the facing side
    pub fn front(&self, facing: f32) -> &Sensor {
        if facing < 0.0 {
            &self.left
        } else {
            &self.right
        }
    }

    /// The sensor opposite the facing side
    pub fn back(&self, facing: f32) -> &Sensor {
        if facing < 0.0 {
            &self.right
        } else {
            &self.left
        }
    }

    /// Directional reading on the facing side
    pub fn a_front(&self, grid: &TileGrid, x: f32, y: f32, facing: f32) -> f32 {
        if facing < 0.0 {
            self.left.left(grid, x, y)
        } else {
            self.right.right(grid, x, y)
        }
    }

    /// Directional reading opposite the facing side
    pub fn a_back(&self, grid: &TileGrid, x: f32, y: f32, facing: f32) -> f32 {
        if facing < 0.0 {
            self.right.right(grid, x, y)
        } else {
            self.left.left(grid, x, y)
        }
    }
}
