//! Allocator core for wordheap.
//!
//! [`MemoryManager`] partitions a single fixed-size arena into allocated
//! blocks and holes, delegating placement to a swappable
//! [`PlacementStrategy`](wordheap_core::PlacementStrategy):
//!
//! ```text
//! allocate(bytes)
//!   -> words = ceil(bytes / word_size)
//!   -> holes = hole_list(table)            (wordheap-diag)
//!   -> offset = strategy.place(words, &holes)
//!   -> table.claim(offset, words)          (validated split or flip)
//!   -> arena.base + offset * word_size
//!
//! free(address)
//!   -> offset = (address - base) / word_size   (must be a live block start)
//!   -> table.release(offset)               (flip + coalesce both sides)
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod manager;
pub mod stats;

pub use config::{AllocatorConfig, ConfigError};
pub use manager::MemoryManager;
pub use stats::AllocatorStats;
