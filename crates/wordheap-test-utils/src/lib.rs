//! Test utilities for wordheap development.
//!
//! Provides a block-table invariant checker and placement strategies that
//! deliberately break the strategy contract, for exercising the
//! allocator's validation paths.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use wordheap_arena::BlockTable;

/// Check that `table` partitions `[0, capacity)` with no empty blocks and
/// no two adjacent holes.
///
/// Returns a description of the first violation found.
pub fn check_partition(table: &BlockTable) -> Result<(), String> {
    let mut cursor = 0usize;
    let mut prev_hole = false;
    for (offset, block) in table.iter() {
        if offset.get() != cursor {
            return Err(format!(
                "block at {offset} does not start at expected word {cursor}"
            ));
        }
        if block.size.is_zero() {
            return Err(format!("empty block at {offset}"));
        }
        if prev_hole && block.is_hole {
            return Err(format!("adjacent holes ending at {offset}"));
        }
        prev_hole = block.is_hole;
        cursor += block.size.get();
    }
    if cursor != table.capacity().get() {
        return Err(format!(
            "blocks cover {cursor} words, capacity is {}",
            table.capacity()
        ));
    }
    Ok(())
}

/// Panicking wrapper around [`check_partition`].
#[track_caller]
pub fn assert_partition(table: &BlockTable) {
    if let Err(violation) = check_partition(table) {
        panic!("block table invariant violated: {violation}");
    }
}

/// `(offset, size, is_hole)` triples for compact layout assertions.
pub fn layout(table: &BlockTable) -> Vec<(u16, u16, bool)> {
    table
        .iter()
        .map(|(offset, block)| (offset.0, block.size.0, block.is_hole))
        .collect()
}
