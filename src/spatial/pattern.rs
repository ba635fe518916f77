//! Source pattern generation and stamp sampling

use crate::io::configuration::{PATTERN_COLS, PATTERN_ROWS, TILE_CODE_COUNT, TILE_SIZE};
use ndarray::Array2;
use rand::{Rng, rngs::StdRng};

/// A square block of tile codes copied out of the source pattern
pub type Stamp = [[u8; TILE_SIZE]; TILE_SIZE];

/// Small matrix of tile codes that every placement stamp is sampled from
///
/// Filled once per session from the shared RNG and immutable afterwards.
#[derive(Debug, Clone)]
pub struct SourcePattern {
    cells: Array2<u8>,
}

impl SourcePattern {
    /// Fill the pattern uniformly with codes 1..=4
    ///
    /// Cells are drawn in row-major order; the order is part of the
    /// reproducible RNG stream.
    pub fn generate(rng: &mut StdRng) -> Self {
        let mut cells = Array2::zeros((PATTERN_ROWS, PATTERN_COLS));
        for row in 0..PATTERN_ROWS {
            for col in 0..PATTERN_COLS {
                if let Some(cell) = cells.get_mut([row, col]) {
                    *cell = rng.random_range(1..=TILE_CODE_COUNT);
                }
            }
        }
        Self { cells }
    }

    /// Copy a stamp from a uniformly random valid window
    ///
    /// The row offset is drawn before the column offset. The pattern itself
    /// is never mutated.
    pub fn sample_stamp(&self, rng: &mut StdRng) -> Stamp {
        let row0 = rng.random_range(0..=PATTERN_ROWS - TILE_SIZE);
        let col0 = rng.random_range(0..=PATTERN_COLS - TILE_SIZE);

        let mut stamp = [[0u8; TILE_SIZE]; TILE_SIZE];
        for (r, stamp_row) in stamp.iter_mut().enumerate() {
            for (c, cell) in stamp_row.iter_mut().enumerate() {
                *cell = self
                    .cells
                    .get([row0 + r, col0 + c])
                    .copied()
                    .unwrap_or(0);
            }
        }
        stamp
    }

    /// Read a single pattern cell
    pub fn code(&self, row: usize, col: usize) -> u8 {
        self.cells.get([row, col]).copied().unwrap_or(0)
    }
}
