//! Error types for fixalloc allocators.
//!
//! One enum covers the whole taxonomy: construction failure, exhaustion,
//! malformed requests, and (for callers that ask) unknown-pointer frees.

use std::error::Error;
use std::fmt;

/// Errors that can occur while constructing or using an allocator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The backing reservation could not be made.
    ///
    /// Fatal to the allocator being constructed: no partial instance is
    /// produced.
    ReservationFailed {
        /// Number of bytes that were requested from the system allocator.
        bytes: usize,
        /// Alignment requested for the backing buffer.
        align: usize,
    },
    /// No free block can satisfy the request.
    ///
    /// Recoverable: allocator state is unchanged, so the caller may retry
    /// after releasing memory.
    OutOfMemory {
        /// Number of bytes requested (after zero-size coercion).
        requested: usize,
        /// Alignment requested (after default-alignment coercion).
        alignment: usize,
        /// Size of the largest free block at the time of the request.
        largest_free: usize,
    },
    /// The alignment is not a power of two.
    InvalidAlignment {
        /// The rejected alignment.
        alignment: usize,
    },
    /// A pointer handed back for deallocation does not start any used
    /// block of this allocator.
    UnknownPointer {
        /// The address that was passed in.
        address: usize,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReservationFailed { bytes, align } => {
                write!(
                    f,
                    "failed to reserve {bytes} bytes (align {align}) for the arena buffer"
                )
            }
            Self::OutOfMemory {
                requested,
                alignment,
                largest_free,
            } => {
                write!(
                    f,
                    "arena out of memory: requested {requested} bytes at alignment {alignment}, \
                     largest free block {largest_free} bytes"
                )
            }
            Self::InvalidAlignment { alignment } => {
                write!(f, "alignment {alignment} is not a power of two")
            }
            Self::UnknownPointer { address } => {
                write!(f, "pointer {address:#x} was not allocated by this arena")
            }
        }
    }
}

impl Error for AllocError {}
