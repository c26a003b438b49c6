//! Alignment arithmetic shared by allocator implementations.
//!
//! All helpers assume power-of-two alignments; [`normalize_request`] is the
//! single place where that precondition is checked and a request's zero
//! size or zero alignment is coerced to a usable value.

use crate::error::AllocError;

/// Platform maximum fundamental alignment in bytes.
///
/// Used as the default when a caller passes an alignment of zero.
pub const MAX_FUNDAMENTAL_ALIGN: usize = 16;

/// Round `addr` up to the next multiple of `align`.
///
/// Returns `None` if the result would overflow `usize`. `align` must be a
/// power of two.
#[inline]
pub fn align_up(addr: usize, align: usize) -> Option<usize> {
    debug_assert!(align.is_power_of_two());
    let mask = align - 1;
    addr.checked_add(mask).map(|a| a & !mask)
}

/// Number of padding bytes needed to move `addr` onto an `align` boundary.
#[inline]
pub fn padding_for(addr: usize, align: usize) -> Option<usize> {
    align_up(addr, align).map(|aligned| aligned - addr)
}

/// Whether `addr` sits on an `align` boundary.
#[inline]
pub fn is_aligned(addr: usize, align: usize) -> bool {
    debug_assert!(align.is_power_of_two());
    addr & (align - 1) == 0
}

/// Coerce a raw `(size, alignment)` request into the form the allocator
/// actually serves.
///
/// - A size of 0 becomes 1 so every successful allocation has a unique,
///   non-null address.
/// - An alignment of 0 becomes `default_alignment`.
/// - Any other alignment must be a power of two.
pub fn normalize_request(
    size: usize,
    alignment: usize,
    default_alignment: usize,
) -> Result<(usize, usize), AllocError> {
    let size = size.max(1);
    let alignment = if alignment == 0 {
        default_alignment
    } else {
        alignment
    };
    if !alignment.is_power_of_two() {
        return Err(AllocError::InvalidAlignment { alignment });
    }
    Ok((size, alignment))
}
