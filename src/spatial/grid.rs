//! Occupancy grid storage and aligned placement
//!
//! The grid holds one byte per cell: 0 for empty, 1..=4 for a placed tile
//! code. Placement copies a stamp into an aligned footprint without touching
//! cells that are already filled, so overlapping stamps blend instead of
//! clobbering each other.

use crate::io::configuration::{GRID_SIZE, LATTICE_ORIGIN, TILE_SIZE};
use crate::spatial::pattern::Stamp;
use ndarray::Array2;

/// Top-left corner of a block footprint in grid cells, as `[x, y]`
pub type BlockPos = [i32; 2];

/// Check that a full stamp footprint starting at `pos` fits inside the grid
pub const fn footprint_in_bounds(pos: BlockPos) -> bool {
    pos[0] >= 0
        && pos[1] >= 0
        && pos[0] + TILE_SIZE as i32 <= GRID_SIZE as i32
        && pos[1] + TILE_SIZE as i32 <= GRID_SIZE as i32
}

/// Check that a single coordinate sits on the placement lattice
pub const fn is_aligned(v: i32) -> bool {
    (v - LATTICE_ORIGIN as i32) % TILE_SIZE as i32 == 0
}

/// Fixed-size output grid holding placed tile codes
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    cells: Array2<u8>,
}

impl Default for OccupancyGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl OccupancyGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            cells: Array2::zeros((GRID_SIZE, GRID_SIZE)),
        }
    }

    /// Read the cell at column `x`, row `y`
    ///
    /// Out-of-bounds coordinates read as empty, which keeps border scans in
    /// the adjacency test simple.
    pub fn get(&self, x: i32, y: i32) -> u8 {
        if x < 0 || y < 0 {
            return 0;
        }
        self.cells
            .get([y as usize, x as usize])
            .copied()
            .unwrap_or(0)
    }

    /// Copy a stamp into the footprint at `pos`
    ///
    /// Only currently-empty destination cells are written; the first writer
    /// at a cell keeps it. The caller guarantees an aligned in-bounds
    /// position.
    pub fn place(&mut self, pos: BlockPos, stamp: &Stamp) {
        for (r, stamp_row) in stamp.iter().enumerate() {
            for (c, &code) in stamp_row.iter().enumerate() {
                let row = pos[1] as usize + r;
                let col = pos[0] as usize + c;
                if let Some(cell) = self.cells.get_mut([row, col]) {
                    if *cell == 0 {
                        *cell = code;
                    }
                }
            }
        }
    }

    /// Count filled cells across the whole grid
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|&&code| code != 0).count()
    }

    /// Side length of the grid
    pub const fn side(&self) -> usize {
        GRID_SIZE
    }
}
