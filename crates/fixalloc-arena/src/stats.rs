//! Point-in-time usage summaries.

use std::fmt;

use crate::block::Block;

/// Usage summary of an arena, computed from its block list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArenaStats {
    /// Capacity of the backing buffer in bytes.
    pub total_bytes: usize,
    /// Bytes currently lent to callers.
    pub used_bytes: usize,
    /// Bytes available for allocation, across all free blocks.
    pub free_bytes: usize,
    /// Size of the largest single free block.
    ///
    /// An unaligned request larger than this always fails, however large
    /// `free_bytes` is.
    pub largest_free_block: usize,
    /// Number of block records.
    pub block_count: usize,
    /// Number of free block records.
    pub free_block_count: usize,
}

impl ArenaStats {
    pub(crate) fn from_blocks(total_bytes: usize, blocks: &[Block]) -> Self {
        let mut stats = Self {
            total_bytes,
            block_count: blocks.len(),
            ..Self::default()
        };
        for block in blocks {
            if block.is_free() {
                stats.free_bytes += block.size();
                stats.free_block_count += 1;
                stats.largest_free_block = stats.largest_free_block.max(block.size());
            } else {
                stats.used_bytes += block.size();
            }
        }
        stats
    }

    /// Fraction of free bytes that lie outside the largest free block.
    ///
    /// 0.0 when all free space is one block (or there is none), approaching
    /// 1.0 as free space is scattered into many small blocks.
    pub fn fragmentation(&self) -> f64 {
        if self.free_bytes == 0 {
            return 0.0;
        }
        1.0 - self.largest_free_block as f64 / self.free_bytes as f64
    }
}

impl fmt::Display for ArenaStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} bytes used, {} free in {} blocks (largest {})",
            self.used_bytes,
            self.total_bytes,
            self.free_bytes,
            self.free_block_count,
            self.largest_free_block
        )
    }
}
