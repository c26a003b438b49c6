//! Reusable arena fixtures and wrapper resources.
//!
//! - [`filled_arena`] — an arena with a known sequence of allocations.
//! - [`CountingResource`] — forwards to an inner resource and counts calls.
//! - [`FailingResource`] — fails allocation deterministically after N calls.

use std::ptr::NonNull;

use fixalloc_arena::FixedBlockArena;
use fixalloc_core::{AllocError, MemoryResource};

/// Build an arena of `total` bytes and allocate `sizes` in order at
/// alignment 1.
///
/// # Panics
///
/// Panics if any allocation fails; fixtures are expected to fit.
pub fn filled_arena(total: usize, sizes: &[usize]) -> (FixedBlockArena, Vec<NonNull<u8>>) {
    let mut arena = FixedBlockArena::new(total).expect("fixture arena reservation");
    let ptrs = sizes
        .iter()
        .map(|&size| {
            arena
                .allocate(size, 1)
                .unwrap_or_else(|e| panic!("fixture allocation of {size} bytes failed: {e}"))
        })
        .collect();
    (arena, ptrs)
}

/// Forwards to an inner resource and counts every call.
///
/// Useful for asserting how a consumer drives its resource: how many
/// allocations it made, how many it returned, how many bytes are live.
pub struct CountingResource<R> {
    pub inner: R,
    allocations: usize,
    failed_allocations: usize,
    deallocations: usize,
    live_bytes: usize,
}

impl<R: MemoryResource> CountingResource<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            allocations: 0,
            failed_allocations: 0,
            deallocations: 0,
            live_bytes: 0,
        }
    }

    /// Successful `allocate` calls.
    pub fn allocations(&self) -> usize {
        self.allocations
    }

    /// `allocate` calls that returned an error.
    pub fn failed_allocations(&self) -> usize {
        self.failed_allocations
    }

    /// `deallocate` calls.
    pub fn deallocations(&self) -> usize {
        self.deallocations
    }

    /// Sum of sizes passed to successful `allocate` minus sizes passed to
    /// `deallocate`, as reported by the caller.
    pub fn live_bytes(&self) -> usize {
        self.live_bytes
    }
}

impl<R: MemoryResource> MemoryResource for CountingResource<R> {
    fn allocate(&mut self, size: usize, alignment: usize) -> Result<NonNull<u8>, AllocError> {
        let result = self.inner.allocate(size, alignment);
        match result {
            Ok(_) => {
                self.allocations += 1;
                self.live_bytes += size;
            }
            Err(_) => self.failed_allocations += 1,
        }
        result
    }

    fn deallocate(&mut self, ptr: NonNull<u8>, size: usize, alignment: usize) {
        self.deallocations += 1;
        self.live_bytes = self.live_bytes.saturating_sub(size);
        self.inner.deallocate(ptr, size, alignment);
    }

    fn is_same(&self, other: &Self) -> bool {
        self.inner.is_same(&other.inner)
    }
}

/// Fails every allocation after `succeed_count` successful ones.
///
/// Useful for testing that consumers propagate allocation errors instead
/// of panicking, independent of arena capacity.
pub struct FailingResource<R> {
    pub inner: R,
    pub succeed_count: usize,
    call_count: usize,
}

impl<R: MemoryResource> FailingResource<R> {
    /// Wrap `inner` so that it succeeds `succeed_count` times then fails.
    pub fn new(inner: R, succeed_count: usize) -> Self {
        Self {
            inner,
            succeed_count,
            call_count: 0,
        }
    }

    /// How many times `allocate` has been called.
    pub fn calls(&self) -> usize {
        self.call_count
    }
}

impl<R: MemoryResource> MemoryResource for FailingResource<R> {
    fn allocate(&mut self, size: usize, alignment: usize) -> Result<NonNull<u8>, AllocError> {
        let n = self.call_count;
        self.call_count += 1;
        if n >= self.succeed_count {
            return Err(AllocError::OutOfMemory {
                requested: size,
                alignment,
                largest_free: 0,
            });
        }
        self.inner.allocate(size, alignment)
    }

    fn deallocate(&mut self, ptr: NonNull<u8>, size: usize, alignment: usize) {
        self.inner.deallocate(ptr, size, alignment);
    }

    fn is_same(&self, other: &Self) -> bool {
        self.inner.is_same(&other.inner)
    }
}
