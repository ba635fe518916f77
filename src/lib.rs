//! Frontier-driven ASCII map generation from sampled tile stamps
//!
//! The system grows a connected region of aligned 4x4 stamps sampled from a
//! small random source pattern: a seeded random walk pops frontier candidates,
//! gates each on a probability roll and an adjacency test, places accepted
//! stamps without overwriting filled cells, and expands the frontier from
//! every acceptance until the placement budget or the frontier runs out.

#![forbid(unsafe_code)]

/// Core growth algorithm: frontier queue, adjacency testing, and the driver
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Spatial data structures: occupancy grid and source pattern
pub mod spatial;

pub use io::error::{GenerationError, Result};
