//! Test utilities and mock memory resources for fixalloc development.
//!
//! Provides the partition-invariant checker used by scenario and property
//! tests ([`check_partition`], [`assert_partition`]), a compact span view
//! of an arena ([`spans`]), and wrapper resources in [`fixtures`] for
//! exercising [`MemoryResource`] consumers.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use fixalloc_arena::{Block, FixedBlockArena};
use fixalloc_core::MemoryResource;

pub use fixtures::{filled_arena, CountingResource, FailingResource};

/// `(start, end, free)` for each block, in address order.
pub type Span = (usize, usize, bool);

/// Check that `blocks` partitions `[0, capacity)` with no empty blocks and
/// no two adjacent free blocks.
///
/// Returns a description of the first violation found.
pub fn check_partition(capacity: usize, blocks: &[Block]) -> Result<(), String> {
    let mut cursor = 0;
    let mut prev_free = false;
    for (i, block) in blocks.iter().enumerate() {
        if block.offset() != cursor {
            return Err(format!(
                "block {i} {block} starts at {}, expected {cursor}",
                block.offset()
            ));
        }
        if block.size() == 0 {
            return Err(format!("block {i} is empty at offset {cursor}"));
        }
        if prev_free && block.is_free() {
            return Err(format!("block {i} {block} is free and follows a free block"));
        }
        prev_free = block.is_free();
        cursor = block.end();
    }
    if cursor != capacity {
        return Err(format!("blocks cover [0, {cursor}), capacity is {capacity}"));
    }
    Ok(())
}

/// Panic with a readable message if the arena's block list is malformed.
pub fn assert_partition(arena: &FixedBlockArena) {
    if let Err(msg) = check_partition(arena.capacity(), arena.blocks()) {
        panic!("arena partition violated: {msg}\nblocks: {:?}", arena.blocks());
    }
}

/// The arena's block list as `(start, end, free)` triples.
pub fn spans(arena: &FixedBlockArena) -> Vec<Span> {
    arena
        .blocks()
        .iter()
        .map(|b| (b.offset(), b.end(), b.is_free()))
        .collect()
}

/// Allocate and immediately release through any resource; returns whether
/// the allocation succeeded.
pub fn probe<R: MemoryResource>(resource: &mut R, size: usize, alignment: usize) -> bool {
    match resource.allocate(size, alignment) {
        Ok(ptr) => {
            resource.deallocate(ptr, size, alignment);
            true
        }
        Err(_) => false,
    }
}
