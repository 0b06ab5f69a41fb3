//! Error types for dump output.

use std::fmt;
use std::io;

/// Errors from writing a textual dump.
///
/// A failed dump never changes allocator state.
#[derive(Debug)]
pub enum DumpError {
    /// No arena is initialized.
    NoArena,
    /// The sink could not be opened or written.
    Io(io::Error),
}

impl fmt::Display for DumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoArena => write!(f, "no arena is initialized"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for DumpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::NoArena => None,
        }
    }
}

impl From<io::Error> for DumpError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Errors from decoding an encoded [`Bitmap`](crate::Bitmap).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BitmapError {
    /// The buffer is shorter than its 2-byte header or than the length the
    /// header declares.
    Truncated {
        /// Total bytes required.
        expected: usize,
        /// Bytes present.
        found: usize,
    },
}

impl fmt::Display for BitmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated { expected, found } => {
                write!(f, "bitmap truncated: expected {expected} bytes, found {found}")
            }
        }
    }
}

impl std::error::Error for BitmapError {}
