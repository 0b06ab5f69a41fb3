//! Criterion micro-benchmarks for allocate/free churn per placement strategy.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use wordheap_bench::{churn, fragmented, request_sizes};
use wordheap_engine::{AllocatorConfig, MemoryManager};

const STRATEGIES: [&str; 3] = ["best-fit", "worst-fit", "first-fit"];

/// Benchmark: 256 mixed allocations then 256 frees on a fresh 16K-word arena.
fn bench_churn_fresh(c: &mut Criterion) {
    let sizes = request_sizes(256);
    for name in STRATEGIES {
        let config = AllocatorConfig::new(1)
            .with_capacity(16_384)
            .with_strategy_name(name)
            .unwrap();
        let mut mm = MemoryManager::new(config).unwrap();
        c.bench_function(&format!("churn_fresh_{name}"), |b| {
            b.iter(|| black_box(churn(&mut mm, &sizes).unwrap()));
        });
    }
}

/// Benchmark: one allocate + free on a heavily fragmented full-size arena.
fn bench_single_alloc_fragmented(c: &mut Criterion) {
    for name in STRATEGIES {
        let mut mm = fragmented(name).unwrap();
        c.bench_function(&format!("alloc_fragmented_{name}"), |b| {
            b.iter(|| {
                let addr = mm.allocate(black_box(48)).unwrap();
                mm.free(addr).unwrap();
            });
        });
    }
}

criterion_group!(benches, bench_churn_fresh, bench_single_alloc_fragmented);
criterion_main!(benches);
