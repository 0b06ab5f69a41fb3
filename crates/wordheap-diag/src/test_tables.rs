//! Randomly fragmented block tables for property tests.

use proptest::prelude::*;
use wordheap_arena::BlockTable;
use wordheap_core::{WordCount, WordOffset};

/// Replay a script of claims (first hole that fits) and releases (by
/// index into the live allocations) against a fresh table.
fn scripted(capacity: u16, ops: &[(bool, u16)]) -> BlockTable {
    let mut table = BlockTable::with_capacity(WordCount(capacity));
    let mut live: Vec<WordOffset> = Vec::new();
    for &(is_claim, n) in ops {
        if is_claim {
            let request = WordCount(n);
            let target = table.holes().find(|h| h.fits(request));
            if let Some(hole) = target {
                table.claim(hole.offset, request).unwrap();
                live.push(hole.offset);
            }
        } else if !live.is_empty() {
            let offset = live.swap_remove(n as usize % live.len());
            table.release(offset).unwrap();
        }
    }
    table
}

/// A table of 1..600 words after up to 80 random claims and releases.
pub(crate) fn arb_table() -> impl Strategy<Value = BlockTable> {
    (
        1u16..600,
        proptest::collection::vec((any::<bool>(), 1u16..48), 0..80),
    )
        .prop_map(|(capacity, ops)| scripted(capacity, &ops))
}
