//! Spatial data structures for the generation session
//!
//! This module contains spatial-related functionality including:
//! - Occupancy grid storage and aligned placement
//! - Source pattern generation and stamp sampling

/// Occupancy grid storage and aligned placement
pub mod grid;
/// Source pattern generation and stamp sampling
pub mod pattern;

pub use grid::OccupancyGrid;
