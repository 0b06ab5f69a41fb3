//! Hole-list export.

use wordheap_arena::BlockTable;
use wordheap_core::HoleList;

/// Snapshot every hole in `table`, in ascending-offset order.
pub fn hole_list(table: &BlockTable) -> HoleList {
    // The table partitions [0, capacity) with no empty blocks, so its
    // holes are already ordered, non-empty and in range.
    HoleList::from_sorted_unchecked(table.holes())
}

/// The flat `[count, off, size, ...]` encoding of the table's holes.
///
/// Returns `None` when there are no holes; callers treat that as "no fit".
pub fn encode_holes(table: &BlockTable) -> Option<Vec<u16>> {
    let list = hole_list(table);
    if list.is_empty() {
        None
    } else {
        Some(list.encode())
    }
}
