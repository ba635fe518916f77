//! Frontier queue and seen-set membership over the placement lattice
//!
//! The queue is an append-only buffer with a head cursor. Random removal
//! swaps the chosen entry into the head slot and advances the head, which
//! randomizes processing order with O(1) removal and no auxiliary shuffle.
//! Seen bits are permanent for the run, so every lattice position is
//! enqueued at most once and total work is bounded by the lattice size.

use crate::io::configuration::{LATTICE_ORIGIN, LATTICE_SIDE, TILE_SIZE};
use crate::spatial::grid::{BlockPos, footprint_in_bounds, is_aligned};
use bitvec::prelude::*;
use rand::{Rng, rngs::StdRng};

/// Growable queue of unvisited aligned candidate positions
#[derive(Debug, Clone)]
pub struct FrontierQueue {
    entries: Vec<BlockPos>,
    head: usize,
    seen: BitVec,
}

impl Default for FrontierQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl FrontierQueue {
    /// Create an empty queue with a cleared seen set
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            head: 0,
            seen: bitvec![0; LATTICE_SIDE * LATTICE_SIDE],
        }
    }

    /// Map an aligned position to its lattice index, if it has one
    ///
    /// Positions left of or above the lattice origin have no index even when
    /// their coordinates happen to be aligned (truncating division sends them
    /// negative), so they can never enter the queue.
    fn lattice_index(pos: BlockPos) -> Option<usize> {
        let gx = (pos[0] - LATTICE_ORIGIN as i32) / TILE_SIZE as i32;
        let gy = (pos[1] - LATTICE_ORIGIN as i32) / TILE_SIZE as i32;
        if gx < 0 || gy < 0 {
            return None;
        }
        let (gx, gy) = (gx as usize, gy as usize);
        (gx < LATTICE_SIDE && gy < LATTICE_SIDE).then(|| gy * LATTICE_SIDE + gx)
    }

    /// Enqueue a candidate position
    ///
    /// No-op for positions that are misaligned, whose footprint leaves the
    /// grid, that fall outside the lattice, or that were already seen.
    /// Otherwise the position is marked seen and appended at the tail.
    pub fn push(&mut self, pos: BlockPos) {
        if !footprint_in_bounds(pos) || !is_aligned(pos[0]) || !is_aligned(pos[1]) {
            return;
        }
        let Some(index) = Self::lattice_index(pos) else {
            return;
        };
        if self.seen.get(index).as_deref() == Some(&true) {
            return;
        }
        self.seen.set(index, true);
        self.entries.push(pos);
    }

    /// Mark a position seen without enqueueing it
    ///
    /// Used for the seed block, which is placed directly and must never be
    /// revisited by the frontier.
    pub fn mark_seen(&mut self, pos: BlockPos) {
        if let Some(index) = Self::lattice_index(pos) {
            self.seen.set(index, true);
        }
    }

    /// Test whether a position has ever been enqueued or marked
    pub fn has_seen(&self, pos: BlockPos) -> bool {
        Self::lattice_index(pos)
            .is_some_and(|index| self.seen.get(index).as_deref() == Some(&true))
    }

    /// Count entries not yet processed
    pub fn unprocessed(&self) -> usize {
        self.entries.len() - self.head
    }

    /// Remove and return a uniformly random unprocessed entry
    ///
    /// Draws exactly one RNG value when entries remain; the draw is part of
    /// the reproducible stream.
    pub fn pop_random(&mut self, rng: &mut StdRng) -> Option<BlockPos> {
        let remaining = self.unprocessed();
        if remaining == 0 {
            return None;
        }
        let pick = self.head + rng.random_range(0..remaining);
        self.entries.swap(self.head, pick);
        let pos = self.entries.get(self.head).copied()?;
        self.head += 1;
        Some(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn push_rejects_misaligned_positions() {
        let mut queue = FrontierQueue::new();
        queue.push([6, 5]);
        queue.push([5, 7]);
        assert_eq!(queue.unprocessed(), 0);
    }

    #[test]
    fn push_rejects_positions_off_the_lattice() {
        let mut queue = FrontierQueue::new();
        // Aligned coordinate value but left of the lattice origin
        queue.push([1, 5]);
        queue.push([5, 1]);
        assert_eq!(queue.unprocessed(), 0);
        assert!(!queue.has_seen([1, 5]));
    }

    #[test]
    fn push_rejects_footprints_leaving_the_grid() {
        let mut queue = FrontierQueue::new();
        queue.push([225, 5]);
        queue.push([5, 225]);
        assert_eq!(queue.unprocessed(), 0);

        // The last valid lattice position is accepted
        queue.push([221, 221]);
        assert_eq!(queue.unprocessed(), 1);
    }

    #[test]
    fn duplicate_push_is_a_no_op() {
        let mut queue = FrontierQueue::new();
        queue.push([9, 5]);
        queue.push([9, 5]);
        assert_eq!(queue.unprocessed(), 1);
    }

    #[test]
    fn mark_seen_blocks_later_push() {
        let mut queue = FrontierQueue::new();
        queue.mark_seen([5, 5]);
        queue.push([5, 5]);
        assert_eq!(queue.unprocessed(), 0);
        assert!(queue.has_seen([5, 5]));
    }

    #[test]
    fn pop_random_drains_each_entry_exactly_once() {
        let mut queue = FrontierQueue::new();
        let positions = [[5, 5], [9, 5], [5, 9], [13, 13], [221, 221]];
        for pos in positions {
            queue.push(pos);
        }

        let mut rng = StdRng::seed_from_u64(11);
        let mut popped = HashSet::new();
        while let Some(pos) = queue.pop_random(&mut rng) {
            assert!(popped.insert(pos), "entry popped twice: {pos:?}");
        }
        assert_eq!(popped.len(), positions.len());
        assert_eq!(queue.unprocessed(), 0);
    }

    #[test]
    fn pop_random_on_empty_queue_returns_none() {
        let mut queue = FrontierQueue::new();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(queue.pop_random(&mut rng).is_none());
    }
}
