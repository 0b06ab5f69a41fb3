//! Block-table precondition failures.

use std::error::Error;
use std::fmt;

use wordheap_core::{WordCount, WordOffset};

/// Errors from [`BlockTable`](crate::BlockTable) mutations.
///
/// A failed mutation leaves the table exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// No block starts at this offset.
    UnknownBlock {
        /// The offset that was looked up.
        offset: WordOffset,
    },
    /// The block at this offset is allocated, not a hole.
    NotAHole {
        /// Start of the allocated block.
        offset: WordOffset,
    },
    /// The hole at this offset is smaller than the request.
    HoleTooSmall {
        /// Start of the hole.
        offset: WordOffset,
        /// Size of the hole in words.
        size: WordCount,
        /// Requested size in words.
        requested: WordCount,
    },
    /// The block at this offset is already a hole.
    NotAllocated {
        /// Start of the hole.
        offset: WordOffset,
    },
    /// A zero-word claim was attempted.
    EmptyClaim,
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBlock { offset } => write!(f, "no block starts at offset {offset}"),
            Self::NotAHole { offset } => write!(f, "block at offset {offset} is allocated"),
            Self::HoleTooSmall {
                offset,
                size,
                requested,
            } => {
                write!(
                    f,
                    "hole at offset {offset} has {size} words, {requested} requested"
                )
            }
            Self::NotAllocated { offset } => {
                write!(f, "block at offset {offset} is already a hole")
            }
            Self::EmptyClaim => write!(f, "cannot claim zero words"),
        }
    }
}

impl Error for ArenaError {}
