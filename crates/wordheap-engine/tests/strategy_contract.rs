//! Integration tests: the allocator rejects strategies that break the
//! placement contract, and distinguishes that from an ordinary no-fit.

use wordheap_core::{AllocError, WordCount, WordOffset};
use wordheap_engine::{AllocatorConfig, MemoryManager};
use wordheap_test_utils::fixtures::{FixedOffset, IgnoresSize, NeverFits};
use wordheap_test_utils::layout;

fn manager_with(strategy: impl wordheap_core::PlacementStrategy) -> MemoryManager {
    MemoryManager::new(
        AllocatorConfig::new(1)
            .with_capacity(40)
            .with_strategy(strategy),
    )
    .unwrap()
}

#[test]
fn offset_of_allocated_block_is_rejected() {
    let mut mm = manager_with(FixedOffset(WordOffset(0)));
    mm.allocate(10).unwrap();
    let before = layout(mm.table());

    let err = mm.allocate(5).unwrap_err();
    assert_eq!(
        err,
        AllocError::InvalidStrategyResult {
            strategy: "fixed-offset".into(),
            offset: WordOffset(0),
            requested: WordCount(5),
        }
    );
    assert!(err.is_contract_violation());
    assert_eq!(layout(mm.table()), before);
}

#[test]
fn offset_past_the_arena_is_rejected() {
    let mut mm = manager_with(FixedOffset(WordOffset(500)));
    let err = mm.allocate(1).unwrap_err();
    assert!(err.is_contract_violation());
    assert_eq!(layout(mm.table()), vec![(0, 40, true)]);
}

#[test]
fn undersized_hole_is_rejected() {
    let mut mm = manager_with(IgnoresSize);
    let a = mm.allocate(4).unwrap();
    mm.allocate(1).unwrap();
    mm.free(a).unwrap();
    // Smallest hole is 4 words at offset 0.
    let err = mm.allocate(6).unwrap_err();
    assert!(err.is_contract_violation());
    assert_eq!(mm.stats().contract_violations, 1);
    assert_eq!(mm.stats().failed_allocations, 0);
}

#[test]
fn no_fit_is_not_a_contract_violation() {
    let mut mm = manager_with(NeverFits);
    let err = mm.allocate(1).unwrap_err();
    assert!(matches!(err, AllocError::NoFit { .. }));
    assert!(!err.is_contract_violation());
    assert_eq!(mm.stats().failed_allocations, 1);
}
