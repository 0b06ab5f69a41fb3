//! Reference placement strategies for wordheap.
//!
//! Every strategy implements [`PlacementStrategy`](wordheap_core::PlacementStrategy)
//! and is a pure function of the request size and the hole list:
//!
//! | Strategy | Picks | Ties |
//! |----------|-------|------|
//! | [`BestFit`] | smallest hole that fits | lowest offset |
//! | [`WorstFit`] | largest hole that fits | lowest offset |
//! | [`FirstFit`] | lowest-offset hole that fits | n/a |
//!
//! [`FnStrategy`] adapts a closure, and [`StrategyRegistry`] resolves
//! strategies by name.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod best_fit;
pub mod first_fit;
pub mod func;
pub mod registry;
pub mod worst_fit;

pub use best_fit::BestFit;
pub use first_fit::FirstFit;
pub use func::FnStrategy;
pub use registry::StrategyRegistry;
pub use worst_fit::WorstFit;
