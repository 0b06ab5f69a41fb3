//! Diagnostic views over a [`BlockTable`](wordheap_arena::BlockTable).
//!
//! All views are read-only snapshots:
//!
//! - [`hole_list`]: the typed [`HoleList`](wordheap_core::HoleList) that
//!   placement strategies consume, plus its flat `u16` encoding.
//! - [`Bitmap`]: one bit per word, `1` = allocated, with a 2-byte
//!   little-endian length header.
//! - [`write_dump`] / [`dump_to_path`]: the `"[off, size] - [off, size]"`
//!   text listing of holes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bitmap;
pub mod dump;
pub mod error;
pub mod holes;

#[cfg(all(test, not(miri)))]
mod test_tables;

pub use bitmap::Bitmap;
pub use dump::{dump_to_path, format_dump, write_dump};
pub use error::{BitmapError, DumpError};
pub use holes::{encode_holes, hole_list};
