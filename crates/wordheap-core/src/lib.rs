//! Core types and traits for the wordheap allocator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate in the workspace: typed
//! word offsets and addresses, the hole-list snapshot handed to
//! placement strategies, the [`PlacementStrategy`] trait itself, and the
//! allocation error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hole;
pub mod id;
pub mod traits;

pub use error::{AllocError, HoleListError};
pub use hole::{Hole, HoleList};
pub use id::{Address, WordCount, WordOffset, MAX_ARENA_WORDS};
pub use traits::PlacementStrategy;
