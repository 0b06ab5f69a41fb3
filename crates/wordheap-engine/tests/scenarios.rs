//! Integration tests: end-to-end allocate/free scenarios.
//!
//! Each test drives a `MemoryManager` through a short script and checks
//! the resulting block layout word for word.

use wordheap_core::{Address, AllocError, WordCount, WordOffset};
use wordheap_engine::{AllocatorConfig, MemoryManager};
use wordheap_strategy::{BestFit, WorstFit};
use wordheap_test_utils::{assert_partition, layout};

fn manager(words: usize) -> MemoryManager {
    MemoryManager::new(AllocatorConfig::new(1).with_capacity(words)).unwrap()
}

fn word_offset(mm: &MemoryManager, addr: Address) -> usize {
    (addr.get() - mm.memory_start().unwrap().get()) / mm.word_size()
}

// ── Split, fill, and coalesce back ──────────────────────────────────

#[test]
fn allocate_until_full_then_free_back_to_one_hole() {
    let mut mm = manager(100);
    assert_eq!(layout(mm.table()), vec![(0, 100, true)]);

    let first = mm.allocate(10).unwrap();
    assert_eq!(word_offset(&mm, first), 0);
    assert_eq!(layout(mm.table()), vec![(0, 10, false), (10, 90, true)]);

    let second = mm.allocate(90).unwrap();
    assert_eq!(word_offset(&mm, second), 10);
    assert_eq!(layout(mm.table()), vec![(0, 10, false), (10, 90, false)]);
    assert!(mm.hole_list().is_empty());

    mm.free(first).unwrap();
    assert_eq!(layout(mm.table()), vec![(0, 10, true), (10, 90, false)]);

    mm.free(second).unwrap();
    assert_eq!(layout(mm.table()), vec![(0, 100, true)]);
}

#[test]
fn freeing_between_two_holes_merges_all_three() {
    let mut mm = manager(30);
    let a = mm.allocate(10).unwrap();
    let b = mm.allocate(10).unwrap();
    let c = mm.allocate(10).unwrap();
    mm.free(a).unwrap();
    mm.free(c).unwrap();
    assert_eq!(
        layout(mm.table()),
        vec![(0, 10, true), (10, 10, false), (20, 10, true)]
    );

    mm.free(b).unwrap();
    assert_eq!(layout(mm.table()), vec![(0, 30, true)]);
    assert_partition(mm.table());
}

#[test]
fn adjacent_allocations_stay_separate() {
    let mut mm = manager(30);
    let a = mm.allocate(10).unwrap();
    let b = mm.allocate(10).unwrap();
    assert_eq!(layout(mm.table()), vec![(0, 10, false), (10, 10, false), (20, 10, true)]);
    mm.free(b).unwrap();
    assert_eq!(layout(mm.table()), vec![(0, 10, false), (10, 20, true)]);
    mm.free(a).unwrap();
    assert_eq!(layout(mm.table()), vec![(0, 30, true)]);
}

// ── Failure paths leave the table untouched ─────────────────────────

#[test]
fn oversized_request_fails_and_changes_nothing() {
    let mut mm = manager(50);
    let a = mm.allocate(20).unwrap();
    mm.allocate(10).unwrap();
    mm.free(a).unwrap();
    let before = layout(mm.table());

    // Holes are 20 and 20 words; 21 fits neither.
    let err = mm.allocate(21).unwrap_err();
    assert_eq!(
        err,
        AllocError::NoFit {
            requested: 21,
            largest_hole: WordCount(20),
        }
    );
    assert_eq!(layout(mm.table()), before);
}

#[test]
fn misaligned_free_is_reported_without_phantom_block() {
    let mut mm = MemoryManager::new(AllocatorConfig::new(8).with_capacity(16)).unwrap();
    let a = mm.allocate(16).unwrap();
    let before = layout(mm.table());
    let block_count = mm.table().len();

    // Inside the block, on a word boundary.
    let mid = Address(a.get() + 8);
    assert_eq!(
        mm.free(mid),
        Err(AllocError::InvalidFreeAddress { address: mid })
    );
    // Not on a word boundary at all.
    let odd = Address(a.get() + 3);
    assert_eq!(
        mm.free(odd),
        Err(AllocError::InvalidFreeAddress { address: odd })
    );

    assert_eq!(layout(mm.table()), before);
    assert_eq!(mm.table().len(), block_count);
    assert!(mm.table().get(WordOffset(1)).is_none());
}

#[test]
fn addresses_from_a_previous_arena_are_rejected_after_shutdown() {
    let mut mm = manager(10);
    let a = mm.allocate(4).unwrap();
    mm.shutdown();
    assert_eq!(mm.free(a), Err(AllocError::NoArena));
    assert_eq!(mm.allocate(4), Err(AllocError::NoArena));
}

// ── Round trip ──────────────────────────────────────────────────────

#[test]
fn allocate_then_free_restores_hole_set() {
    let mut mm = manager(64);
    let keep = mm.allocate(8).unwrap();
    let tmp = mm.allocate(8).unwrap();
    mm.allocate(8).unwrap();
    mm.free(tmp).unwrap();
    let holes_before = mm.hole_list();

    let probe = mm.allocate(5).unwrap();
    mm.free(probe).unwrap();
    assert_eq!(mm.hole_list(), holes_before);

    mm.free(keep).unwrap();
    assert_partition(mm.table());
}

// ── Strategy selection through the allocator ────────────────────────

/// Holes of 10, 30 and 20 words separated by single-word allocations.
fn three_holes(mm: &mut MemoryManager) {
    let a = mm.allocate(10).unwrap();
    mm.allocate(1).unwrap();
    let b = mm.allocate(30).unwrap();
    mm.allocate(1).unwrap();
    let c = mm.allocate(20).unwrap();
    mm.allocate(1).unwrap();
    mm.free(a).unwrap();
    mm.free(b).unwrap();
    mm.free(c).unwrap();
}

#[test]
fn best_and_worst_fit_choose_different_holes() {
    let mut mm = manager(63);
    three_holes(&mut mm);
    assert_eq!(mm.encoded_hole_list(), Some(vec![3, 0, 10, 11, 30, 42, 20]));

    mm.set_strategy(Box::new(BestFit));
    let best = mm.allocate(15).unwrap();
    assert_eq!(word_offset(&mm, best), 42);
    mm.free(best).unwrap();

    mm.set_strategy(Box::new(WorstFit));
    let worst = mm.allocate(15).unwrap();
    assert_eq!(word_offset(&mm, worst), 11);
}

#[test]
fn strategy_selected_by_name() {
    let config = AllocatorConfig::new(1)
        .with_capacity(63)
        .with_strategy_name("first-fit")
        .unwrap();
    let mut mm = MemoryManager::new(config).unwrap();
    three_holes(&mut mm);
    let first = mm.allocate(5).unwrap();
    assert_eq!(word_offset(&mm, first), 0);
}

// ── Diagnostics through the allocator ───────────────────────────────

#[test]
fn dump_and_bitmap_reflect_table() {
    let mut mm = manager(16);
    let a = mm.allocate(3).unwrap();
    mm.allocate(5).unwrap();
    mm.free(a).unwrap();

    let mut out: Vec<u8> = Vec::new();
    mm.dump_memory_map(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "[0, 3] - [8, 8]");

    let bitmap = mm.bitmap();
    assert_eq!(bitmap.encode(), vec![2, 0, 0b1111_1000, 0]);
    assert_eq!(bitmap.allocated_words(), 5);
}

#[test]
fn dump_to_file() {
    let mut mm = manager(10);
    mm.allocate(4).unwrap();
    let path = std::env::temp_dir().join(format!(
        "wordheap-engine-dump-{}.txt",
        std::process::id()
    ));
    mm.dump_memory_map_to_path(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(text, "[4, 6]");
}
