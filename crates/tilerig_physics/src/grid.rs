//! Static collision map
//!
//! A dense boolean occupancy grid addressed by integer cell or by world
//! coordinate. Built once at level init by direct stamping, read-only
//! during simulation.

/// Dense boolean tile grid with a fixed cell size in world units.
///
/// Out-of-bounds reads return `false` (unoccupied) rather than erroring,
/// so sensors can probe past the level edges safely.
#[derive(Clone, Debug)]
pub struct TileGrid {
    width: i32,
    height: i32,
    cell_size: f32,
    cells: Vec<bool>,
}

impl TileGrid {
    /// Create an empty grid of `width * height` cells
    pub fn new(width: i32, height: i32, cell_size: f32) -> Self {
        Self {
            width,
            height,
            cell_size,
            cells: vec![false; (width * height).max(0) as usize],
        }
    }

    /// Grid width in cells
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in cells
    pub fn height(&self) -> i32 {
        self.height
    }

    /// World units per cell
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Occupancy at cell `(ix, iy)`; `false` when out of bounds
    pub fn get(&self, ix: i32, iy: i32) -> bool {
        if ix < 0 || ix >= self.width || iy < 0 || iy >= self.height {
            return false;
        }
        self.cells[(iy * self.width + ix) as usize]
    }

    /// Set occupancy at cell `(ix, iy)`; out-of-bounds writes are ignored
    pub fn set(&mut self, ix: i32, iy: i32, value: bool) {
        if ix < 0 || ix >= self.width || iy < 0 || iy >= self.height {
            return;
        }
        self.cells[(iy * self.width + ix) as usize] = value;
    }

    /// Occupancy at world coordinate `(wx, wy)`
    ///
    /// Floor-divides by the cell size, then reads the cell. The floor
    /// matters for negative coordinates: `-0.5` lands in cell `-1`,
    /// which is out of bounds and therefore unoccupied.
    pub fn get_world(&self, wx: f32, wy: f32) -> bool {
        let ix = (wx / self.cell_size).floor() as i32;
        let iy = (wy / self.cell_size).floor() as i32;
        self.get(ix, iy)
    }
}
