//! Growth driver orchestrating seeding, frontier expansion, and placement
//!
//! A session owns every piece of mutable state for one run: the source
//! pattern, the occupancy grid, the frontier queue with its seen set, the
//! RNG, and the placement counter. Independent sessions can therefore run
//! side by side without shared state.

use crate::algorithm::adjacency::touches_existing;
use crate::algorithm::frontier::FrontierQueue;
use crate::io::configuration::{
    DEFAULT_MAX_BLOCKS, SEED_POSITION, TILE_SIZE,
};
use crate::spatial::grid::{BlockPos, OccupancyGrid};
use crate::spatial::pattern::SourcePattern;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Parameters controlling a single generation run
#[derive(Clone, Copy, Debug)]
pub struct GrowthConfig {
    /// Upper bound on accepted placements, seed block included
    pub max_blocks: usize,
    /// Percentage chance to place when visiting a frontier cell
    pub place_probability: u8,
    /// Seed for the session RNG
    pub seed: u64,
}

impl GrowthConfig {
    /// Build a sanitized config from raw operator input
    ///
    /// Non-positive budgets fall back to the default and the probability is
    /// clamped to 0..=100. Bad values are recovered locally, never fatal.
    pub fn sanitized(max_blocks: i64, place_probability: i64, seed: u64) -> Self {
        let max_blocks = if max_blocks > 0 {
            max_blocks as usize
        } else {
            DEFAULT_MAX_BLOCKS
        };
        let place_probability = place_probability.clamp(0, 100) as u8;
        Self {
            max_blocks,
            place_probability,
            seed,
        }
    }
}

/// Resolve an operator-supplied seed; 0 derives one from wall-clock time
pub fn resolve_seed(seed: u64) -> u64 {
    if seed != 0 {
        return seed;
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(1, |elapsed| elapsed.as_secs().max(1))
}

/// Single generation run over the occupancy grid
///
/// All random draws come from one sequential RNG shared by pattern
/// generation, stamp sampling, frontier selection, and probability rolls.
/// The draw order is fixed and part of the reproducible output: pattern
/// fill row-major, then per placement the stamp offsets, then per loop
/// iteration the frontier index before the probability roll.
pub struct GrowthSession {
    config: GrowthConfig,
    pattern: SourcePattern,
    grid: OccupancyGrid,
    frontier: FrontierQueue,
    rng: StdRng,
    placed: usize,
}

impl GrowthSession {
    /// Create a session and place the seed block
    ///
    /// The seed block bypasses the probability and adjacency gates, counts
    /// as the first placement, and primes the frontier with its four lattice
    /// neighbours.
    pub fn new(config: GrowthConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let pattern = SourcePattern::generate(&mut rng);
        let mut grid = OccupancyGrid::new();
        let mut frontier = FrontierQueue::new();

        let stamp = pattern.sample_stamp(&mut rng);
        grid.place(SEED_POSITION, &stamp);
        frontier.mark_seen(SEED_POSITION);
        push_neighbours(&mut frontier, SEED_POSITION);

        Self {
            config,
            pattern,
            grid,
            frontier,
            rng,
            placed: 1,
        }
    }

    /// Process one frontier entry
    ///
    /// Returns `false` once the budget is reached or the frontier is
    /// exhausted. A popped entry that fails the probability roll or the
    /// adjacency test is discarded for good; its lattice cell stays a
    /// permanent gap.
    pub fn step(&mut self) -> bool {
        if self.placed >= self.config.max_blocks {
            return false;
        }
        let Some(pos) = self.frontier.pop_random(&mut self.rng) else {
            return false;
        };

        let roll: u8 = self.rng.random_range(0..100);
        if roll < self.config.place_probability && touches_existing(&self.grid, pos) {
            let stamp = self.pattern.sample_stamp(&mut self.rng);
            self.grid.place(pos, &stamp);
            self.placed += 1;
            push_neighbours(&mut self.frontier, pos);
        }
        true
    }

    /// Run the growth loop to completion
    pub fn run(&mut self) {
        while self.step() {}
    }

    /// Count of accepted placements, seed block included
    pub const fn placed(&self) -> usize {
        self.placed
    }

    /// The session's occupancy grid
    pub const fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// The session's configuration
    pub const fn config(&self) -> GrowthConfig {
        self.config
    }

    /// Count of frontier entries not yet processed
    pub fn frontier_unprocessed(&self) -> usize {
        self.frontier.unprocessed()
    }
}

fn push_neighbours(frontier: &mut FrontierQueue, pos: BlockPos) {
    let step = TILE_SIZE as i32;
    frontier.push([pos[0] + step, pos[1]]);
    frontier.push([pos[0] - step, pos[1]]);
    frontier.push([pos[0], pos[1] + step]);
    frontier.push([pos[0], pos[1] - step]);
}
