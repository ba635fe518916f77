//! Generation constants and runtime configuration defaults

/// Rows in the random source pattern
pub const PATTERN_ROWS: usize = 8;
/// Columns in the random source pattern
pub const PATTERN_COLS: usize = 13;

/// Side length of the square occupancy grid
pub const GRID_SIZE: usize = 225;

/// Side length of a square placement stamp
pub const TILE_SIZE: usize = 4;

/// Number of distinct tile codes; filled cells hold 1 through this value, 0 is empty
pub const TILE_CODE_COUNT: u8 = 4;

/// Lattice offset: aligned coordinates satisfy (v - origin) % tile size == 0
pub const LATTICE_ORIGIN: usize = 5;

/// Lattice columns (and rows) whose full footprint fits inside the grid
pub const LATTICE_SIDE: usize = (GRID_SIZE - LATTICE_ORIGIN + TILE_SIZE - 1) / TILE_SIZE;

/// Aligned position that receives the unconditional seed block
pub const SEED_POSITION: [i32; 2] = [LATTICE_ORIGIN as i32, LATTICE_ORIGIN as i32];

// Default values for configurable parameters
/// Default placement budget
pub const DEFAULT_MAX_BLOCKS: usize = 1200;
/// Default percentage chance to place when visiting a frontier cell
pub const DEFAULT_PLACE_PROBABILITY: u8 = 70;
