//! Arena storage and block bookkeeping for wordheap.
//!
//! Two independent pieces live here:
//!
//! ```text
//! Arena       (owns the zeroed byte buffer, fixed word size)
//! BlockTable  (offset -> Block metadata, partitions [0, capacity))
//! ```
//!
//! The table never stores pointers, only word offsets and sizes, so its
//! lifetime is independent of the buffer. The allocator in
//! `wordheap-engine` owns one of each and keeps them in step.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod block;
pub mod config;
pub mod error;

pub use arena::Arena;
pub use block::{Block, BlockTable, Release};
pub use config::ArenaConfig;
pub use error::ArenaError;
