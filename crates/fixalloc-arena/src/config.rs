//! Arena configuration parameters.

use fixalloc_core::align::MAX_FUNDAMENTAL_ALIGN;
use fixalloc_core::AllocError;

/// What [`FixedBlockArena::deallocate`](crate::FixedBlockArena::deallocate)
/// does with a pointer that does not start a used block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownPointerPolicy {
    /// Log a warning and return without touching the block list.
    #[default]
    Ignore,
    /// Treat the call as a fatal contract violation and panic.
    Panic,
}

/// Configuration for a [`FixedBlockArena`](crate::FixedBlockArena).
///
/// Controls the buffer size, alignment defaults, and how contract
/// violations on deallocation are handled. Validated at construction; all
/// values are immutable after creation.
#[derive(Clone, Debug)]
pub struct ArenaConfig {
    /// Total capacity of the backing buffer in bytes.
    ///
    /// Reserved in full at construction. Zero is allowed and yields an
    /// arena that fails every allocation.
    pub total_bytes: usize,

    /// Alignment of the backing buffer's base address.
    ///
    /// Default: 16. Must be a power of two. Requests with an alignment up
    /// to this value are placed at the same offsets regardless of where
    /// the system allocator put the buffer.
    pub base_alignment: usize,

    /// Alignment used when a request passes an alignment of 0.
    ///
    /// Default: 16 (the platform maximum fundamental alignment). Must be a
    /// power of two.
    pub default_alignment: usize,

    /// Handling of unknown pointers passed to `deallocate`.
    ///
    /// Default: [`UnknownPointerPolicy::Ignore`].
    pub unknown_pointer: UnknownPointerPolicy,
}

impl ArenaConfig {
    /// Default base alignment of the backing buffer.
    pub const DEFAULT_BASE_ALIGNMENT: usize = MAX_FUNDAMENTAL_ALIGN;

    /// Default alignment substituted for a requested alignment of 0.
    pub const DEFAULT_ALIGNMENT: usize = MAX_FUNDAMENTAL_ALIGN;

    /// Create a new arena config for a buffer of `total_bytes`.
    ///
    /// Uses default values for all other parameters.
    pub fn new(total_bytes: usize) -> Self {
        Self {
            total_bytes,
            base_alignment: Self::DEFAULT_BASE_ALIGNMENT,
            default_alignment: Self::DEFAULT_ALIGNMENT,
            unknown_pointer: UnknownPointerPolicy::default(),
        }
    }

    /// Builder-style override of [`unknown_pointer`](Self::unknown_pointer).
    pub fn with_unknown_pointer(mut self, policy: UnknownPointerPolicy) -> Self {
        self.unknown_pointer = policy;
        self
    }

    /// Check that both alignments are powers of two.
    pub fn validate(&self) -> Result<(), AllocError> {
        for alignment in [self.base_alignment, self.default_alignment] {
            if !alignment.is_power_of_two() {
                return Err(AllocError::InvalidAlignment { alignment });
            }
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
