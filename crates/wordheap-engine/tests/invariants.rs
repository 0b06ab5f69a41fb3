//! Property tests: random allocate/free scripts against every built-in
//! strategy keep the block table a gapless partition with no adjacent
//! holes, and freeing everything restores a single hole.

use proptest::prelude::*;
use wordheap_core::{Address, AllocError};
use wordheap_engine::{AllocatorConfig, MemoryManager};
use wordheap_test_utils::{check_partition, layout};

#[derive(Clone, Debug)]
enum Op {
    Alloc(usize),
    Free(usize),
    BogusFree(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (1usize..64).prop_map(Op::Alloc),
        3 => any::<usize>().prop_map(Op::Free),
        1 => (1usize..8).prop_map(Op::BogusFree),
    ]
}

fn strategy_name() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("best-fit"), Just("worst-fit"), Just("first-fit")]
}

proptest! {
    #[test]
    fn table_stays_partitioned(
        name in strategy_name(),
        word_size in 1usize..9,
        capacity in 1usize..300,
        ops in proptest::collection::vec(op(), 1..120),
    ) {
        let config = AllocatorConfig::new(word_size)
            .with_capacity(capacity)
            .with_strategy_name(name)
            .unwrap();
        let mut mm = MemoryManager::new(config).unwrap();
        let mut live: Vec<Address> = Vec::new();

        for op in ops {
            match op {
                Op::Alloc(bytes) => match mm.allocate(bytes) {
                    Ok(addr) => live.push(addr),
                    Err(AllocError::NoFit { .. }) => {}
                    Err(other) => prop_assert!(false, "unexpected error {other}"),
                },
                Op::Free(pick) => {
                    if !live.is_empty() {
                        let addr = live.swap_remove(pick % live.len());
                        prop_assert!(mm.free(addr).is_ok());
                    }
                }
                Op::BogusFree(delta) => {
                    if let Some(&addr) = live.first() {
                        let before = layout(mm.table());
                        let bogus = Address(addr.get() + delta);
                        // A bogus address may coincide with another live block
                        // start; only check the cases that cannot.
                        if !live.contains(&bogus) {
                            prop_assert!(mm.free(bogus).is_err());
                            prop_assert_eq!(layout(mm.table()), before);
                        }
                    }
                }
            }
            if let Err(violation) = check_partition(mm.table()) {
                prop_assert!(false, "{}", violation);
            }
            let stats = mm.stats();
            prop_assert_eq!(stats.free_words + stats.allocated_words, mm.capacity_words().get());
        }

        for addr in live.drain(..) {
            prop_assert!(mm.free(addr).is_ok());
        }
        let expected = vec![(0u16, mm.capacity_words().0, true)];
        prop_assert_eq!(layout(mm.table()), expected);
    }

    #[test]
    fn allocate_free_round_trip_restores_holes(
        sizes in proptest::collection::vec(1usize..32, 1..20),
        probe in 1usize..32,
    ) {
        let mut mm = MemoryManager::new(AllocatorConfig::new(1).with_capacity(256)).unwrap();
        let mut live = Vec::new();
        for (i, size) in sizes.into_iter().enumerate() {
            if let Ok(addr) = mm.allocate(size) {
                live.push((i, addr));
            }
        }
        // Punch holes in every other allocation.
        for (_, addr) in live.iter().filter(|(i, _)| i % 2 == 0) {
            mm.free(*addr).unwrap();
        }
        let before = mm.hole_list();
        if let Ok(addr) = mm.allocate(probe) {
            mm.free(addr).unwrap();
            prop_assert_eq!(mm.hole_list(), before);
        }
    }
}
