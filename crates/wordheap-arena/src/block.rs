//! The block table: an ordered partition of the arena into runs.
//!
//! [`BlockTable`] maps each block's starting [`WordOffset`] to a
//! [`Block`] descriptor. Between any two public calls it upholds:
//!
//! - the blocks partition `[0, capacity)`: offsets strictly increase,
//!   each block covers `[offset, offset + size)`, no gaps, no overlaps;
//! - no block has size zero;
//! - no two neighbouring blocks are both holes.
//!
//! Allocated neighbours are never merged; each stays separately
//! releasable. Every mutation validates its preconditions before touching
//! the map, so a rejected call leaves the table unchanged.

use std::collections::BTreeMap;
use std::ops::Bound;

use tracing::trace;
use wordheap_core::{Hole, WordCount, WordOffset};

use crate::error::ArenaError;

/// Metadata for one contiguous run of words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    /// Length of the run in words.
    pub size: WordCount,
    /// `true` for a free run, `false` for a live allocation.
    pub is_hole: bool,
}

impl Block {
    /// A free run of `size` words.
    pub fn hole(size: WordCount) -> Self {
        Self {
            size,
            is_hole: true,
        }
    }

    /// A live allocation of `size` words.
    pub fn allocated(size: WordCount) -> Self {
        Self {
            size,
            is_hole: false,
        }
    }
}

/// Outcome of [`BlockTable::release`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Release {
    /// The hole containing the released block after coalescing.
    pub hole: Hole,
    /// Number of neighbouring holes absorbed (0, 1 or 2).
    pub merges: u32,
}

/// Ordered offset → block mapping covering the whole arena.
#[derive(Clone, Debug, Default)]
pub struct BlockTable {
    blocks: BTreeMap<WordOffset, Block>,
    capacity: WordCount,
}

impl BlockTable {
    /// Create an empty table describing a zero-word arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table holding one hole that spans `capacity` words.
    pub fn with_capacity(capacity: WordCount) -> Self {
        let mut table = Self::new();
        table.reset(capacity);
        table
    }

    /// Discard every block and start over with a single hole of
    /// `capacity` words. A zero capacity leaves the table empty.
    pub fn reset(&mut self, capacity: WordCount) {
        self.blocks.clear();
        self.capacity = capacity;
        if !capacity.is_zero() {
            self.blocks.insert(WordOffset::ZERO, Block::hole(capacity));
        }
    }

    /// Remove every block and set the capacity to zero.
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.capacity = WordCount(0);
    }

    /// Total words covered by the table.
    pub fn capacity(&self) -> WordCount {
        self.capacity
    }

    /// Number of blocks (holes and allocations).
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the table has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The block starting exactly at `offset`, if any.
    pub fn get(&self, offset: WordOffset) -> Option<Block> {
        self.blocks.get(&offset).copied()
    }

    /// Iterate all blocks in ascending-offset order.
    pub fn iter(&self) -> impl Iterator<Item = (WordOffset, Block)> + '_ {
        self.blocks.iter().map(|(&offset, &block)| (offset, block))
    }

    /// Iterate holes in ascending-offset order.
    pub fn holes(&self) -> impl Iterator<Item = Hole> + '_ {
        self.iter()
            .filter(|(_, block)| block.is_hole)
            .map(|(offset, block)| Hole {
                offset,
                size: block.size,
            })
    }

    /// The block immediately after the one starting at `offset`.
    pub fn next_block(&self, offset: WordOffset) -> Option<(WordOffset, Block)> {
        self.blocks
            .range((Bound::Excluded(offset), Bound::Unbounded))
            .next()
            .map(|(&o, &b)| (o, b))
    }

    /// The block immediately before the one starting at `offset`.
    pub fn prev_block(&self, offset: WordOffset) -> Option<(WordOffset, Block)> {
        self.blocks
            .range(..offset)
            .next_back()
            .map(|(&o, &b)| (o, b))
    }

    /// Carve `request` words from the front of the hole at `offset`.
    ///
    /// An exact fit flips the hole to allocated. Otherwise the hole shrinks
    /// to an allocated prefix of `request` words and a new hole holding the
    /// remainder is inserted directly after it.
    pub fn claim(&mut self, offset: WordOffset, request: WordCount) -> Result<(), ArenaError> {
        if request.is_zero() {
            return Err(ArenaError::EmptyClaim);
        }
        let block = self
            .blocks
            .get_mut(&offset)
            .ok_or(ArenaError::UnknownBlock { offset })?;
        if !block.is_hole {
            return Err(ArenaError::NotAHole { offset });
        }
        if block.size < request {
            return Err(ArenaError::HoleTooSmall {
                offset,
                size: block.size,
                requested: request,
            });
        }
        if block.size == request {
            block.is_hole = false;
            return Ok(());
        }

        // offset + size <= capacity <= u16::MAX, so neither sum can overflow.
        let remainder = WordCount(block.size.0 - request.0);
        *block = Block::allocated(request);
        let tail = WordOffset(offset.0 + request.0);
        self.blocks.insert(tail, Block::hole(remainder));
        Ok(())
    }

    /// Turn the allocation at `offset` back into a hole and coalesce it
    /// with its immediate neighbours.
    ///
    /// The following hole (if any) is absorbed first, then the result is
    /// folded into the preceding hole (if any), so a single call merges up
    /// to three runs. Fails without side effects when `offset` is not the
    /// start of an allocated block.
    pub fn release(&mut self, offset: WordOffset) -> Result<Release, ArenaError> {
        let mut size = {
            let block = self
                .blocks
                .get_mut(&offset)
                .ok_or(ArenaError::UnknownBlock { offset })?;
            if block.is_hole {
                return Err(ArenaError::NotAllocated { offset });
            }
            block.is_hole = true;
            block.size
        };
        let mut start = offset;
        let mut merges = 0;

        // Captured before the forward merge; removing the next entry does
        // not change what precedes `offset`.
        let prev = self.prev_block(offset);

        if let Some((next_offset, next)) = self.next_block(offset) {
            if next.is_hole {
                self.blocks.remove(&next_offset);
                size = WordCount(size.0 + next.size.0);
                self.blocks.insert(offset, Block::hole(size));
                merges += 1;
                trace!(
                    offset = offset.0,
                    absorbed = next_offset.0,
                    size = size.0,
                    "coalesced forward"
                );
            }
        }

        if let Some((prev_offset, prev)) = prev {
            if prev.is_hole {
                self.blocks.remove(&offset);
                size = WordCount(prev.size.0 + size.0);
                self.blocks.insert(prev_offset, Block::hole(size));
                start = prev_offset;
                merges += 1;
                trace!(
                    offset = prev_offset.0,
                    absorbed = offset.0,
                    size = size.0,
                    "coalesced backward"
                );
            }
        }

        Ok(Release {
            hole: Hole {
                offset: start,
                size,
            },
            merges,
        })
    }
}
