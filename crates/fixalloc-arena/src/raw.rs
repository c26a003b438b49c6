//! Low-level primitives for arena memory operations.
//!
//! This is the only module in the crate allowed to use `unsafe`. It owns
//! the backing buffer: one aligned, zero-initialised allocation from the
//! system allocator, released exactly once on drop. Everything above this
//! module works in offsets and safe slices.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::ptr::NonNull;

use fixalloc_core::AllocError;

/// An owned, fixed-size, aligned byte buffer.
pub(crate) struct RawBuffer {
    ptr: NonNull<u8>,
    len: usize,
    align: usize,
}

impl RawBuffer {
    /// Reserve `len` zeroed bytes aligned to `align`.
    ///
    /// A zero-length buffer performs no system allocation; its base is a
    /// dangling pointer with the requested alignment.
    pub(crate) fn reserve(len: usize, align: usize) -> Result<Self, AllocError> {
        let failed = AllocError::ReservationFailed { bytes: len, align };
        let layout = Layout::from_size_align(len, align).map_err(|_| failed.clone())?;

        if len == 0 {
            let ptr = NonNull::new(std::ptr::without_provenance_mut::<u8>(align))
                .ok_or_else(|| failed.clone())?;
            return Ok(Self { ptr, len, align });
        }

        // SAFETY: `layout` has a non-zero size (checked above) and was
        // validated by `Layout::from_size_align`.
        let raw = unsafe { alloc::alloc_zeroed(layout) };
        let ptr = NonNull::new(raw).ok_or(failed)?;
        Ok(Self { ptr, len, align })
    }

    /// Base address of the buffer.
    pub(crate) fn base(&self) -> NonNull<u8> {
        self.ptr
    }

    /// Length of the buffer in bytes.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Pointer to the byte at `offset`.
    ///
    /// `offset` may equal `len` (one past the end) but no further.
    pub(crate) fn ptr_at(&self, offset: usize) -> NonNull<u8> {
        assert!(offset <= self.len, "offset {offset} past buffer end {}", self.len);
        // SAFETY: `offset <= len`, so the result stays within (or one past)
        // the allocation and cannot wrap to null.
        unsafe { self.ptr.add(offset) }
    }

    /// Shared view of `len` bytes starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the range exceeds the buffer.
    pub(crate) fn slice(&self, offset: usize, len: usize) -> &[u8] {
        let end = offset.checked_add(len).expect("slice range overflows usize");
        assert!(end <= self.len, "slice end {end} past buffer end {}", self.len);
        // SAFETY: the range lies inside the allocation, which is fully
        // initialised (zeroed at reservation) and lives as long as `self`.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr().add(offset), len) }
    }

    /// Mutable view of `len` bytes starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the range exceeds the buffer.
    pub(crate) fn slice_mut(&mut self, offset: usize, len: usize) -> &mut [u8] {
        let end = offset.checked_add(len).expect("slice range overflows usize");
        assert!(end <= self.len, "slice end {end} past buffer end {}", self.len);
        // SAFETY: as in `slice`, and `&mut self` guarantees no other safe
        // view of the buffer is live.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr().add(offset), len) }
    }
}

impl Drop for RawBuffer {
    fn drop(&mut self) {
        if self.len == 0 {
            return;
        }
        // SAFETY: the buffer was allocated in `reserve` with exactly this
        // size and alignment, and is freed only here.
        unsafe {
            let layout = Layout::from_size_align_unchecked(self.len, self.align);
            alloc::dealloc(self.ptr.as_ptr(), layout);
        }
    }
}
