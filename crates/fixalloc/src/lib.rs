//! fixalloc: a fixed-capacity block allocator with first-fit splitting and
//! coalescing.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the fixalloc sub-crates. For most users, adding `fixalloc` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use fixalloc::prelude::*;
//!
//! let mut arena = FixedBlockArena::new(30).unwrap();
//! let a = arena.allocate(10, 1).unwrap();
//! let b = arena.allocate(10, 1).unwrap();
//! let c = arena.allocate(10, 1).unwrap();
//!
//! // Freeing B then A leaves one free block spanning [0, 20).
//! arena.deallocate(b, 10, 1);
//! arena.deallocate(a, 10, 1);
//! assert_eq!(arena.blocks()[0].range(), 0..20);
//!
//! // The arena is full again once C is back.
//! arena.deallocate(c, 10, 1);
//! assert_eq!(arena.stats().free_bytes, 30);
//! assert!(matches!(arena.allocate(31, 1), Err(AllocError::OutOfMemory { .. })));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `fixalloc-arena` | `FixedBlockArena`, `Block`, `ArenaConfig`, `ArenaStats` |
//! | [`types`] | `fixalloc-core` | `AllocError`, `ArenaInstanceId`, alignment helpers, `MemoryResource` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The block arena and its configuration (`fixalloc-arena`).
pub use fixalloc_arena as arena;

/// Core types, traits, and alignment arithmetic (`fixalloc-core`).
///
/// Contains the error taxonomy and the [`types::MemoryResource`] trait
/// implemented by every allocator.
pub use fixalloc_core as types;

/// Common imports for typical fixalloc usage.
///
/// ```rust
/// use fixalloc::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use fixalloc_arena::{
        ArenaConfig, ArenaStats, Block, FixedBlockArena, UnknownPointerPolicy,
    };

    // Core types and traits
    pub use fixalloc_core::{AllocError, ArenaInstanceId, MemoryResource};
}
