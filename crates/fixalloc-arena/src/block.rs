//! Block records describing how the arena buffer is partitioned.
//!
//! A [`Block`] is plain metadata: an offset into the buffer, a length, and
//! a free/used flag. Blocks never own memory, so merging or dropping a
//! record needs no teardown.

use std::fmt;
use std::ops::Range;

/// A contiguous span of the arena buffer, tagged free or used.
///
/// Offsets are relative to the start of the arena's buffer, which lets
/// every record be validated against the arena's bounds. A block with
/// `free == false` is lent to a caller and must not be handed out again
/// until it is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    /// Byte offset of the first byte of the span.
    pub(crate) offset: usize,
    /// Length of the span in bytes. Never zero.
    pub(crate) size: usize,
    /// Whether the span is available for allocation.
    pub(crate) free: bool,
}

impl Block {
    /// A free block covering `[offset, offset + size)`.
    pub(crate) fn free(offset: usize, size: usize) -> Self {
        Self {
            offset,
            size,
            free: true,
        }
    }

    /// A used block covering `[offset, offset + size)`.
    pub(crate) fn used(offset: usize, size: usize) -> Self {
        Self {
            offset,
            size,
            free: false,
        }
    }

    /// Byte offset of the start of the span.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the span in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// One past the last byte of the span.
    pub fn end(&self) -> usize {
        self.offset + self.size
    }

    /// Whether the span is available for allocation.
    pub fn is_free(&self) -> bool {
        self.free
    }

    /// The span as a byte range.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    /// Whether `next` starts exactly where `self` ends.
    pub fn is_adjacent_to(&self, next: &Block) -> bool {
        self.end() == next.offset
    }

    /// Absorb the adjacent block `next` into `self`.
    pub(crate) fn absorb(&mut self, next: &Block) {
        debug_assert!(self.is_adjacent_to(next));
        self.size += next.size;
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.free { "free" } else { "used" };
        write!(f, "[{}, {}) {state}", self.offset, self.end())
    }
}
