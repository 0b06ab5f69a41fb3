//! Benchmark workloads for the wordheap allocator.
//!
//! Provides deterministic request streams and pre-fragmented managers so
//! every strategy is measured against the same sequence:
//!
//! - [`request_sizes`]: repeating mixed-size byte requests
//! - [`fragmented`]: a full-size arena with every other block freed
//! - [`churn`]: one allocate/free cycle over a request stream

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::error::Error;
use std::fmt;

use wordheap_core::{Address, AllocError};
use wordheap_engine::{AllocatorConfig, ConfigError, MemoryManager};

/// A workload could not be set up or replayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkloadError {
    /// The manager could not be configured.
    Config(ConfigError),
    /// An allocate or free the workload expects to succeed failed.
    Alloc(AllocError),
}

impl fmt::Display for WorkloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "workload config: {e}"),
            Self::Alloc(e) => write!(f, "workload step failed: {e}"),
        }
    }
}

impl Error for WorkloadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Alloc(e) => Some(e),
        }
    }
}

impl From<ConfigError> for WorkloadError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<AllocError> for WorkloadError {
    fn from(e: AllocError) -> Self {
        Self::Alloc(e)
    }
}

/// Byte sizes cycled through by [`request_sizes`].
const SIZE_PATTERN: [usize; 8] = [8, 64, 24, 128, 16, 40, 256, 32];

/// `count` byte sizes drawn cyclically from a fixed mixed pattern.
pub fn request_sizes(count: usize) -> Vec<usize> {
    SIZE_PATTERN.iter().copied().cycle().take(count).collect()
}

/// A 65535-word manager using `strategy`, filled with 64-word blocks and
/// then with every other block freed.
pub fn fragmented(strategy: &str) -> Result<MemoryManager, WorkloadError> {
    let config = AllocatorConfig::new(1)
        .with_capacity(usize::from(u16::MAX))
        .with_strategy_name(strategy)?;
    let mut mm = MemoryManager::new(config)?;
    let mut live = Vec::new();
    while let Ok(addr) = mm.allocate(64) {
        live.push(addr);
    }
    for addr in live.iter().step_by(2) {
        mm.free(*addr)?;
    }
    Ok(mm)
}

/// Allocate every size in `sizes`, then free every allocation that
/// succeeded, oldest first. Returns the number of successful allocations.
///
/// Failed allocations are part of the workload; a failed free is not and
/// stops the cycle with an error.
pub fn churn(mm: &mut MemoryManager, sizes: &[usize]) -> Result<usize, WorkloadError> {
    let live: Vec<Address> = sizes.iter().filter_map(|&s| mm.allocate(s).ok()).collect();
    for &addr in &live {
        mm.free(addr)?;
    }
    Ok(live.len())
}
