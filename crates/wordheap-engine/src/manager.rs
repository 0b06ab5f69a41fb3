//! The allocator core.
//!
//! [`MemoryManager`] owns an optional [`Arena`] and its [`BlockTable`] and
//! keeps them in step. Allocation asks the diagnostics layer for the
//! current hole list, hands it to the active [`PlacementStrategy`],
//! validates the answer, and carves the block. Freeing translates the
//! address back to a word offset, checks it names a live allocation, and
//! coalesces with both neighbours.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self`; byte views returned by
//! [`bytes()`](MemoryManager::bytes) borrow from `self`, so the borrow
//! checker prevents freeing a block while a view into it is alive.
//! There is no internal locking; callers sharing a manager across
//! threads must serialize access themselves.
//!
//! # Failure atomicity
//!
//! Every error path returns before the block table is touched.

use std::io::Write;
use std::mem;
use std::path::Path;

use tracing::{debug, warn};
use wordheap_arena::{Arena, ArenaConfig, Block, BlockTable};
use wordheap_core::{Address, AllocError, HoleList, PlacementStrategy, WordCount, WordOffset};
use wordheap_diag::{Bitmap, DumpError};

use crate::config::{AllocatorConfig, ConfigError};
use crate::stats::AllocatorStats;

#[derive(Clone, Copy, Debug, Default)]
struct Counters {
    allocations: u64,
    frees: u64,
    failed_allocations: u64,
    invalid_frees: u64,
    contract_violations: u64,
    coalesce_merges: u64,
}

/// Word-quantized allocator over one fixed-size arena.
///
/// # Example
///
/// ```
/// use wordheap_engine::{AllocatorConfig, MemoryManager};
///
/// let mut mm = MemoryManager::new(AllocatorConfig::new(4).with_capacity(64)).unwrap();
/// let a = mm.allocate(10).unwrap();          // 3 words
/// mm.bytes_mut(a).unwrap().fill(0xAB);
/// assert_eq!(mm.bytes(a).unwrap().len(), 12);
/// mm.free(a).unwrap();
/// assert_eq!(mm.hole_list().len(), 1);
/// ```
pub struct MemoryManager {
    word_size: usize,
    strategy: Box<dyn PlacementStrategy>,
    arena: Option<Arena>,
    table: BlockTable,
    counters: Counters,
}

impl MemoryManager {
    /// Create a manager from a validated [`AllocatorConfig`].
    ///
    /// If `initial_capacity_words` is set, an arena is initialized
    /// immediately.
    pub fn new(config: AllocatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut manager = Self {
            word_size: config.word_size,
            strategy: config.strategy,
            arena: None,
            table: BlockTable::new(),
            counters: Counters::default(),
        };
        if let Some(words) = config.initial_capacity_words {
            manager.initialize(words);
        }
        Ok(manager)
    }

    // ── Lifecycle ──────────────────────────────────────────────────

    /// Create a zeroed arena of `capacity_words` words (clamped to
    /// 65535), replacing any existing arena.
    ///
    /// The block table is reset to one hole spanning the whole arena.
    /// Addresses handed out by a previous arena become invalid.
    pub fn initialize(&mut self, capacity_words: usize) {
        if self.arena.is_some() {
            self.shutdown();
        }
        let config = ArenaConfig::new(capacity_words).with_word_size(self.word_size);
        let capacity = config.clamped();
        if capacity.get() < capacity_words {
            debug!(
                requested = capacity_words,
                clamped = capacity.0,
                "arena capacity clamped"
            );
        }
        let arena = Arena::new(&config);
        self.table.reset(capacity);
        debug!(
            words = capacity.0,
            bytes = arena.capacity_bytes(),
            word_size = self.word_size,
            "arena initialized"
        );
        self.arena = Some(arena);
    }

    /// Release the arena and clear the block table. No-op without one.
    pub fn shutdown(&mut self) {
        if self.arena.take().is_none() {
            return;
        }
        self.table.clear();
        debug!("arena shut down");
    }

    /// Whether an arena is currently initialized.
    pub fn is_initialized(&self) -> bool {
        self.arena.is_some()
    }

    // ── Allocation ─────────────────────────────────────────────────

    /// Allocate `size_in_bytes` bytes, rounded up to whole words.
    ///
    /// # Errors
    ///
    /// - [`AllocError::NoArena`] before `initialize` or after `shutdown`.
    /// - [`AllocError::ZeroSize`] for a zero-byte request.
    /// - [`AllocError::NoFit`] when the strategy finds no hole.
    /// - [`AllocError::InvalidStrategyResult`] when the strategy names an
    ///   offset that is not a hole of sufficient size.
    ///
    /// The block table is unchanged on every error.
    pub fn allocate(&mut self, size_in_bytes: usize) -> Result<Address, AllocError> {
        let Some(arena) = &self.arena else {
            return Err(AllocError::NoArena);
        };
        if size_in_bytes == 0 {
            self.counters.failed_allocations += 1;
            return Err(AllocError::ZeroSize);
        }

        let words = WordCount::words_for_bytes(size_in_bytes, self.word_size);
        let holes = wordheap_diag::hole_list(&self.table);
        let placed = WordCount::from_usize(words)
            .and_then(|request| Some((request, self.strategy.place(request, &holes)?)));
        let Some((request, offset)) = placed else {
            self.counters.failed_allocations += 1;
            debug!(requested = words, largest_hole = holes.largest().0, "no fit");
            return Err(AllocError::NoFit {
                requested: words,
                largest_hole: holes.largest(),
            });
        };

        if let Err(reason) = self.table.claim(offset, request) {
            self.counters.contract_violations += 1;
            warn!(
                strategy = self.strategy.name(),
                offset = offset.0,
                requested = request.0,
                %reason,
                "placement strategy returned an invalid offset"
            );
            return Err(AllocError::InvalidStrategyResult {
                strategy: self.strategy.name().to_string(),
                offset,
                requested: request,
            });
        }

        self.counters.allocations += 1;
        debug!(offset = offset.0, words = request.0, "allocated");
        Ok(arena.address_of(offset))
    }

    /// Return the block starting at `address` to the free pool and merge
    /// it with adjacent holes.
    ///
    /// # Errors
    ///
    /// - [`AllocError::NoArena`] before `initialize` or after `shutdown`.
    /// - [`AllocError::InvalidFreeAddress`] if `address` is outside the
    ///   arena, not word-aligned, inside a block rather than at its start,
    ///   or names a hole. No table entry is created in that case.
    pub fn free(&mut self, address: Address) -> Result<(), AllocError> {
        let Some(arena) = &self.arena else {
            return Err(AllocError::NoArena);
        };
        let released = arena
            .offset_of(address)
            .ok_or(None)
            .and_then(|offset| self.table.release(offset).map_err(Some));

        match released {
            Ok(release) => {
                self.counters.frees += 1;
                self.counters.coalesce_merges += u64::from(release.merges);
                debug!(
                    hole_offset = release.hole.offset.0,
                    hole_size = release.hole.size.0,
                    merges = release.merges,
                    "freed"
                );
                Ok(())
            }
            Err(reason) => {
                self.counters.invalid_frees += 1;
                match reason {
                    Some(reason) => warn!(%address, %reason, "rejected free"),
                    None => warn!(%address, "rejected free of address outside the arena"),
                }
                Err(AllocError::InvalidFreeAddress { address })
            }
        }
    }

    /// Swap the active placement strategy, returning the previous one.
    pub fn set_strategy(
        &mut self,
        strategy: Box<dyn PlacementStrategy>,
    ) -> Box<dyn PlacementStrategy> {
        debug!(from = self.strategy.name(), to = strategy.name(), "strategy changed");
        mem::replace(&mut self.strategy, strategy)
    }

    /// Name of the active placement strategy.
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    // ── Byte access ────────────────────────────────────────────────

    /// The bytes of the live allocation starting at `address`.
    pub fn bytes(&self, address: Address) -> Result<&[u8], AllocError> {
        let (offset, size) = self.live_block(address)?;
        let arena = self.arena.as_ref().ok_or(AllocError::NoArena)?;
        Ok(arena.slice(offset, size))
    }

    /// Mutable bytes of the live allocation starting at `address`.
    pub fn bytes_mut(&mut self, address: Address) -> Result<&mut [u8], AllocError> {
        let (offset, size) = self.live_block(address)?;
        let arena = self.arena.as_mut().ok_or(AllocError::NoArena)?;
        Ok(arena.slice_mut(offset, size))
    }

    fn live_block(&self, address: Address) -> Result<(WordOffset, WordCount), AllocError> {
        let arena = self.arena.as_ref().ok_or(AllocError::NoArena)?;
        arena
            .offset_of(address)
            .and_then(|offset| match self.table.get(offset) {
                Some(block) if !block.is_hole => Some((offset, block.size)),
                _ => None,
            })
            .ok_or(AllocError::UnknownAllocation { address })
    }

    // ── Getters ────────────────────────────────────────────────────

    /// Allocation granularity in bytes.
    pub fn word_size(&self) -> usize {
        self.word_size
    }

    /// Address of the arena's first byte, if an arena exists.
    pub fn memory_start(&self) -> Option<Address> {
        self.arena.as_ref().map(Arena::base)
    }

    /// Arena capacity in bytes (zero without an arena).
    pub fn memory_limit(&self) -> usize {
        self.arena.as_ref().map_or(0, Arena::capacity_bytes)
    }

    /// Arena capacity in words (zero without an arena).
    pub fn capacity_words(&self) -> WordCount {
        self.table.capacity()
    }

    /// Read-only view of the block table.
    pub fn table(&self) -> &BlockTable {
        &self.table
    }

    /// All blocks in ascending-offset order.
    pub fn blocks(&self) -> impl Iterator<Item = (WordOffset, Block)> + '_ {
        self.table.iter()
    }

    // ── Diagnostics ────────────────────────────────────────────────

    /// Snapshot of the current holes (empty without an arena).
    pub fn hole_list(&self) -> HoleList {
        wordheap_diag::hole_list(&self.table)
    }

    /// The flat `[count, off, size, ...]` hole encoding, or `None` when
    /// there are no holes.
    pub fn encoded_hole_list(&self) -> Option<Vec<u16>> {
        wordheap_diag::encode_holes(&self.table)
    }

    /// Word-occupancy bitmap (header only without an arena).
    pub fn bitmap(&self) -> Bitmap {
        Bitmap::from_table(&self.table)
    }

    /// Write the `"[off, size] - ..."` hole listing to `sink`.
    pub fn dump_memory_map(&self, sink: &mut dyn Write) -> Result<(), DumpError> {
        if self.arena.is_none() {
            return Err(DumpError::NoArena);
        }
        wordheap_diag::write_dump(&self.table, sink)
    }

    /// Write the hole listing to the file at `path`, creating or
    /// truncating it.
    pub fn dump_memory_map_to_path(&self, path: impl AsRef<Path>) -> Result<(), DumpError> {
        if self.arena.is_none() {
            return Err(DumpError::NoArena);
        }
        wordheap_diag::dump_to_path(&self.table, path)
    }

    /// Event counters plus a scan of the current table.
    pub fn stats(&self) -> AllocatorStats {
        let c = self.counters;
        let mut stats = AllocatorStats {
            allocations: c.allocations,
            frees: c.frees,
            failed_allocations: c.failed_allocations,
            invalid_frees: c.invalid_frees,
            contract_violations: c.contract_violations,
            coalesce_merges: c.coalesce_merges,
            ..Default::default()
        };
        for (_, block) in self.table.iter() {
            stats.block_count += 1;
            if block.is_hole {
                stats.hole_count += 1;
                stats.free_words += block.size.get();
                stats.largest_hole = stats.largest_hole.max(block.size);
            } else {
                stats.allocated_words += block.size.get();
            }
        }
        stats
    }
}
