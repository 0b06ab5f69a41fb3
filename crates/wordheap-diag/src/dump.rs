//! Textual hole dump: `[offset, size] - [offset, size] - ...`.
//!
//! Only holes are listed, in ascending-offset order, with no trailing
//! separator. A fully allocated arena dumps as the empty string.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use wordheap_arena::BlockTable;

use crate::error::DumpError;

const SEPARATOR: &str = " - ";

/// Render the hole listing for `table`.
pub fn format_dump(table: &BlockTable) -> String {
    table
        .holes()
        .map(|h| format!("[{}, {}]", h.offset, h.size))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Write the hole listing to `sink`.
pub fn write_dump(table: &BlockTable, sink: &mut dyn Write) -> Result<(), DumpError> {
    sink.write_all(format_dump(table).as_bytes())?;
    sink.flush()?;
    Ok(())
}

/// Create (or truncate) the file at `path` and write the hole listing.
pub fn dump_to_path(table: &BlockTable, path: impl AsRef<Path>) -> Result<(), DumpError> {
    let mut file = File::create(path)?;
    write_dump(table, &mut file)
}
