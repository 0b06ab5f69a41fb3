//! wordheap quickstart: allocate, fragment, inspect, and coalesce.
//!
//! Demonstrates:
//!   1. Building a MemoryManager from an AllocatorConfig
//!   2. Allocating and writing into blocks
//!   3. Inspecting the hole list, bitmap, dump, and stats
//!   4. Switching placement strategy at runtime
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example quickstart

use wordheap_engine::{AllocatorConfig, MemoryManager};
use wordheap_strategy::WorstFit;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 4-byte words, 64-word arena, best-fit placement.
    let config = AllocatorConfig::new(4).with_capacity(64);
    let mut mm = MemoryManager::new(config)?;
    println!(
        "arena: {} bytes at {}, strategy {}",
        mm.memory_limit(),
        mm.memory_start().ok_or("no arena")?,
        mm.strategy_name()
    );

    // ─── Fragment the arena ─────────────────────────────────────
    let blocks: Vec<_> = [16, 40, 8, 24, 12]
        .into_iter()
        .map(|bytes| mm.allocate(bytes))
        .collect::<Result<_, _>>()?;
    mm.bytes_mut(blocks[0])?.copy_from_slice(b"wordheap, hello!");
    mm.free(blocks[1])?;
    mm.free(blocks[3])?;

    let mut dump: Vec<u8> = Vec::new();
    mm.dump_memory_map(&mut dump)?;
    println!("holes:  {}", String::from_utf8_lossy(&dump));
    println!("encoded: {:?}", mm.encoded_hole_list());
    println!("bitmap:  {:02x?}", mm.bitmap().encode());

    // ─── Compare strategies ─────────────────────────────────────
    let best = mm.allocate(20)?;
    println!("best-fit placed 20 bytes at {best}");
    mm.free(best)?;

    mm.set_strategy(Box::new(WorstFit));
    let worst = mm.allocate(20)?;
    println!("worst-fit placed 20 bytes at {worst}");

    // ─── Coalesce everything back ───────────────────────────────
    for addr in [blocks[0], blocks[2], blocks[4], worst] {
        mm.free(addr)?;
    }
    let stats = mm.stats();
    println!(
        "after teardown: {} hole(s), {} free words, {} merges total",
        stats.hole_count, stats.free_words, stats.coalesce_merges
    );
    Ok(())
}
