//! Error types for allocation and hole-list decoding.
//!
//! Every variant is recoverable except
//! [`AllocError::InvalidStrategyResult`], which signals a bug in a
//! supplied placement strategy. Failed operations never modify the
//! block table.

use std::error::Error;
use std::fmt;

use crate::id::{Address, WordCount, WordOffset};

/// Errors returned by `allocate` and `free`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// No arena is initialized (before `initialize` or after `shutdown`).
    NoArena,
    /// A zero-byte allocation was requested.
    ZeroSize,
    /// No hole is large enough for the request.
    NoFit {
        /// Requested size in words (may exceed the 16-bit size field).
        requested: usize,
        /// Size of the largest hole at the time of the request.
        largest_hole: WordCount,
    },
    /// The placement strategy returned an offset that is not the start of
    /// a hole with at least `requested` words.
    InvalidStrategyResult {
        /// Name of the offending strategy.
        strategy: String,
        /// The offset it returned.
        offset: WordOffset,
        /// The request it was answering.
        requested: WordCount,
    },
    /// The address is not the start of a currently allocated block.
    InvalidFreeAddress {
        /// The rejected address.
        address: Address,
    },
    /// The address is not the start of a live allocation, so no byte view
    /// can be produced for it.
    UnknownAllocation {
        /// The rejected address.
        address: Address,
    },
}

impl AllocError {
    /// Whether this error reports a broken placement strategy rather than
    /// an ordinary runtime condition.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::InvalidStrategyResult { .. })
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoArena => write!(f, "no arena is initialized"),
            Self::ZeroSize => write!(f, "zero-byte allocation requested"),
            Self::NoFit {
                requested,
                largest_hole,
            } => {
                write!(
                    f,
                    "no hole fits {requested} words (largest hole {largest_hole} words)"
                )
            }
            Self::InvalidStrategyResult {
                strategy,
                offset,
                requested,
            } => {
                write!(
                    f,
                    "strategy '{strategy}' chose offset {offset}, \
                     which is not a hole of at least {requested} words"
                )
            }
            Self::InvalidFreeAddress { address } => {
                write!(f, "address {address} is not the start of an allocated block")
            }
            Self::UnknownAllocation { address } => {
                write!(f, "no live allocation starts at address {address}")
            }
        }
    }
}

impl Error for AllocError {}

/// Errors from decoding a `u16` hole-list buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HoleListError {
    /// The buffer is empty or shorter than its count header claims.
    Truncated {
        /// Number of `u16` values the header implies.
        expected: usize,
        /// Number of `u16` values present.
        found: usize,
    },
    /// A hole starts at or before the end of the previous one.
    Unordered {
        /// Index of the offending hole.
        index: usize,
    },
    /// A hole has size zero.
    ZeroSizeHole {
        /// Index of the offending hole.
        index: usize,
    },
    /// A hole extends past the 16-bit word range.
    OutOfRange {
        /// Index of the offending hole.
        index: usize,
    },
}

impl fmt::Display for HoleListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated { expected, found } => {
                write!(
                    f,
                    "hole list truncated: expected {expected} values, found {found}"
                )
            }
            Self::Unordered { index } => {
                write!(f, "hole {index} overlaps or precedes the previous hole")
            }
            Self::ZeroSizeHole { index } => write!(f, "hole {index} has zero size"),
            Self::OutOfRange { index } => {
                write!(f, "hole {index} extends past the addressable word range")
            }
        }
    }
}

impl Error for HoleListError {}
