//! Strongly-typed identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`ArenaInstanceId`] allocation.
static ARENA_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for an allocator object.
///
/// Allocated from a monotonic atomic counter via [`ArenaInstanceId::next`].
/// Two distinct arenas always have different IDs, even if they have the
/// same capacity and block layout. Unlike an address comparison, the ID
/// travels with the arena when it is moved, and a new arena constructed at
/// the address of a dropped one never inherits its identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArenaInstanceId(u64);

impl ArenaInstanceId {
    /// Allocate a fresh, unique instance ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(ARENA_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ArenaInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
