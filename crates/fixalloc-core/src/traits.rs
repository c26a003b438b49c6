//! Core abstraction traits for allocator-aware consumers.

use std::ptr::NonNull;

use crate::error::AllocError;

/// A source of raw memory that allocator-aware containers grow into.
///
/// Containers call [`allocate`](MemoryResource::allocate) to obtain backing
/// storage and [`deallocate`](MemoryResource::deallocate) when shrinking,
/// dropping, or moving to a larger buffer. They are responsible for
/// constructing values into the returned memory and dropping them before
/// handing it back.
///
/// # Caller obligations
///
/// The resource must outlive every pointer it hands out. Using a pointer
/// after the resource is dropped, or deallocating through a different
/// resource, is undefined and not detected.
pub trait MemoryResource {
    /// Obtain `size` bytes aligned to `alignment`.
    ///
    /// A `size` of 0 is served as 1 byte; an `alignment` of 0 means the
    /// implementation's default alignment.
    fn allocate(&mut self, size: usize, alignment: usize) -> Result<NonNull<u8>, AllocError>;

    /// Return memory previously obtained from [`allocate`](MemoryResource::allocate)
    /// on this same resource.
    ///
    /// `size` and `alignment` should match the original request; an
    /// implementation may ignore them if it records sizes itself.
    fn deallocate(&mut self, ptr: NonNull<u8>, size: usize, alignment: usize);

    /// Whether memory from `self` can be released through `other` and
    /// vice versa.
    ///
    /// Containers use this to decide whether a move between two owners can
    /// hand over the buffer or must copy into the destination's resource.
    fn is_same(&self, other: &Self) -> bool;
}
