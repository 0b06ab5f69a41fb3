//! wordheap: a word-quantized allocator over one fixed-size arena.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all wordheap sub-crates. For most users, adding `wordheap` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use wordheap::prelude::*;
//!
//! // 100 one-byte words, best-fit placement.
//! let config = AllocatorConfig::new(1).with_capacity(100);
//! let mut mm = MemoryManager::new(config).unwrap();
//!
//! let a = mm.allocate(10).unwrap();
//! let b = mm.allocate(90).unwrap();
//! assert!(mm.hole_list().is_empty());
//! assert!(matches!(mm.allocate(1), Err(AllocError::NoFit { .. })));
//!
//! mm.free(a).unwrap();
//! mm.free(b).unwrap();
//! assert_eq!(mm.encoded_hole_list(), Some(vec![1, 0, 100]));
//!
//! // Swap in a different strategy at runtime.
//! mm.set_strategy(Box::new(WorstFit));
//! assert_eq!(mm.strategy_name(), "worst-fit");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `wordheap-core` | Offsets, addresses, holes, `PlacementStrategy`, errors |
//! | [`arena`] | `wordheap-arena` | Byte buffer and block table |
//! | [`strategy`] | `wordheap-strategy` | Best-fit, worst-fit, first-fit, registry |
//! | [`diag`] | `wordheap-diag` | Hole list, bitmap, textual dump |
//! | [`engine`] | `wordheap-engine` | `MemoryManager`, config, stats |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, the strategy trait, and errors (`wordheap-core`).
pub use wordheap_core as types;

/// Arena buffer and block table (`wordheap-arena`).
///
/// Most users only touch these through [`engine::MemoryManager`].
pub use wordheap_arena as arena;

/// Reference placement strategies (`wordheap-strategy`).
pub use wordheap_strategy as strategy;

/// Read-only diagnostics: [`diag::Bitmap`], hole list, dump (`wordheap-diag`).
pub use wordheap_diag as diag;

/// The allocator core (`wordheap-engine`).
pub use wordheap_engine as engine;

/// Common imports for typical wordheap usage.
///
/// ```rust
/// use wordheap::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use wordheap_core::{
        Address, AllocError, Hole, HoleList, PlacementStrategy, WordCount, WordOffset,
    };

    // Strategies
    pub use wordheap_strategy::{BestFit, FirstFit, FnStrategy, StrategyRegistry, WorstFit};

    // Diagnostics
    pub use wordheap_diag::{Bitmap, DumpError};

    // Engine
    pub use wordheap_engine::{AllocatorConfig, AllocatorStats, ConfigError, MemoryManager};
}
