//! Workload generators and profiles for benchmarking the fixalloc arena.
//!
//! - [`churn_workload`]: seeded, reproducible mix of allocations and frees
//! - [`run_churn`]: replay a workload against any [`MemoryResource`]
//! - [`container_growth`]: the doubling pattern of a growable vector

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::ptr::NonNull;

use fixalloc_core::MemoryResource;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One step of a churn workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChurnOp {
    /// Allocate `size` bytes at `alignment`.
    Alloc { size: usize, alignment: usize },
    /// Free the live allocation at `pick % live_count`, if any.
    Free { pick: usize },
}

/// Outcome counters from [`run_churn`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChurnReport {
    pub allocated: usize,
    pub failed: usize,
    pub freed: usize,
    /// Allocations still live when the workload ended.
    pub live: usize,
}

/// Generate a deterministic workload of `len` operations.
///
/// Roughly 60% allocations with sizes in `1..=max_size` and alignments in
/// `{1, 2, 4, 8, 16}`; the rest are frees. The same seed always yields
/// the same sequence.
pub fn churn_workload(seed: u64, len: usize, max_size: usize) -> Vec<ChurnOp> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let max_size = max_size.max(1) as u64;
    (0..len)
        .map(|_| {
            let roll = rng.next_u64();
            if roll % 10 < 6 {
                ChurnOp::Alloc {
                    size: (rng.next_u64() % max_size) as usize + 1,
                    alignment: 1 << (rng.next_u64() % 5),
                }
            } else {
                ChurnOp::Free {
                    pick: rng.next_u64() as usize,
                }
            }
        })
        .collect()
}

/// Replay `ops` against `resource`, then free whatever is still live.
pub fn run_churn<R: MemoryResource>(resource: &mut R, ops: &[ChurnOp]) -> ChurnReport {
    let mut live: Vec<(NonNull<u8>, usize, usize)> = Vec::new();
    let mut report = ChurnReport::default();

    for &op in ops {
        match op {
            ChurnOp::Alloc { size, alignment } => match resource.allocate(size, alignment) {
                Ok(ptr) => {
                    live.push((ptr, size, alignment));
                    report.allocated += 1;
                }
                Err(_) => report.failed += 1,
            },
            ChurnOp::Free { pick } => {
                if !live.is_empty() {
                    let (ptr, size, alignment) = live.swap_remove(pick % live.len());
                    resource.deallocate(ptr, size, alignment);
                    report.freed += 1;
                }
            }
        }
    }

    report.live = live.len();
    for (ptr, size, alignment) in live {
        resource.deallocate(ptr, size, alignment);
    }
    report
}

/// Simulate a growable vector of `elem_size`-byte elements pushed `pushes`
/// times: capacity doubles from 1, each growth allocates the new buffer
/// before freeing the old one.
///
/// Returns the number of growth steps that succeeded.
pub fn container_growth<R: MemoryResource>(
    resource: &mut R,
    elem_size: usize,
    alignment: usize,
    pushes: usize,
) -> usize {
    let mut current: Option<(NonNull<u8>, usize)> = None;
    let mut capacity = 0usize;
    let mut growths = 0;

    for len in 1..=pushes {
        if len <= capacity {
            continue;
        }
        let new_capacity = (capacity * 2).max(1);
        let bytes = new_capacity * elem_size;
        let Ok(ptr) = resource.allocate(bytes, alignment) else {
            break;
        };
        if let Some((old, old_bytes)) = current.take() {
            resource.deallocate(old, old_bytes, alignment);
        }
        current = Some((ptr, bytes));
        capacity = new_capacity;
        growths += 1;
    }

    if let Some((ptr, bytes)) = current {
        resource.deallocate(ptr, bytes, alignment);
    }
    growths
}
