//! Allocator counters and occupancy figures.
//!
//! [`AllocatorStats`] combines cumulative event counters kept by the
//! [`MemoryManager`](crate::MemoryManager) with a point-in-time scan of
//! the block table.

use wordheap_core::WordCount;

/// Counters and occupancy snapshot returned by `MemoryManager::stats()`.
///
/// Event counters are cumulative over the manager's lifetime and survive
/// `shutdown` / `initialize`. Occupancy fields describe the current arena
/// and are zero when none is initialized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllocatorStats {
    /// Successful allocations.
    pub allocations: u64,
    /// Successful frees.
    pub frees: u64,
    /// Allocations rejected as `NoFit` or `ZeroSize`.
    pub failed_allocations: u64,
    /// Frees rejected as `InvalidFreeAddress`.
    pub invalid_frees: u64,
    /// Strategy answers rejected as `InvalidStrategyResult`.
    pub contract_violations: u64,
    /// Hole merges performed while freeing.
    pub coalesce_merges: u64,
    /// Blocks in the table (holes and allocations).
    pub block_count: usize,
    /// Holes in the table.
    pub hole_count: usize,
    /// Free words across all holes.
    pub free_words: usize,
    /// Words inside allocated blocks.
    pub allocated_words: usize,
    /// Size of the largest hole.
    pub largest_hole: WordCount,
}

impl AllocatorStats {
    /// Fraction of free space lying outside the largest hole:
    /// `1 - largest_hole / free_words`. Zero when nothing is free.
    pub fn external_fragmentation(&self) -> f64 {
        if self.free_words == 0 {
            return 0.0;
        }
        1.0 - self.largest_hole.get() as f64 / self.free_words as f64
    }
}
