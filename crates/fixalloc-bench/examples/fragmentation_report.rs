//! Replay seeded churn workloads and print how fragmented the arena gets.
//!
//! Run with `cargo run -p fixalloc-bench --example fragmentation_report`.

use fixalloc_arena::FixedBlockArena;
use fixalloc_bench::{churn_workload, ChurnOp};
use fixalloc_core::MemoryResource;
use fixalloc_test_utils::assert_partition;

fn main() {
    for seed in [1u64, 7, 42] {
        let mut arena = FixedBlockArena::new(16 * 1024).unwrap();
        let ops = churn_workload(seed, 5_000, 512);
        let mut live = Vec::new();
        let mut worst = 0.0f64;

        for op in ops {
            match op {
                ChurnOp::Alloc { size, alignment } => {
                    if let Ok(p) = MemoryResource::allocate(&mut arena, size, alignment) {
                        live.push(p);
                    }
                }
                ChurnOp::Free { pick } => {
                    if !live.is_empty() {
                        let p = live.swap_remove(pick % live.len());
                        arena.deallocate(p, 0, 0);
                    }
                }
            }
            worst = worst.max(arena.stats().fragmentation());
        }

        assert_partition(&arena);
        println!(
            "seed {seed:>3}: {} | worst fragmentation {:.2}",
            arena.stats(),
            worst
        );
    }
}
