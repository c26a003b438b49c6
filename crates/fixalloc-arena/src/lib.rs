//! Fixed-capacity block arena with first-fit splitting and coalescing.
//!
//! One buffer is reserved at construction and carved into variable-sized
//! blocks on demand. This crate is the only one in the workspace that
//! contains `unsafe` code, and all of it lives in `raw.rs`.
//!
//! # Architecture
//!
//! ```text
//! FixedBlockArena
//! ├── RawBuffer (aligned, zeroed, reserved once, freed on drop)
//! ├── Vec<Block> (address-ordered partition of the buffer)
//! ├── ArenaConfig (capacity, alignments, unknown-pointer policy)
//! └── ArenaInstanceId (identity for allocator-aware containers)
//! ```
//!
//! # Allocation
//!
//! `allocate` scans blocks in address order and takes the first free block
//! that can hold the request at its alignment, splitting it into
//! `[free head] [used] [free tail]`. `deallocate` frees the block and
//! merges it with a free predecessor and a free successor, so the list
//! never holds two adjacent free blocks between calls.
//!
//! ```
//! use fixalloc_arena::FixedBlockArena;
//!
//! let mut arena = FixedBlockArena::new(30).unwrap();
//! let a = arena.allocate(10, 1).unwrap();
//! let b = arena.allocate(10, 1).unwrap();
//! arena.deallocate(b, 10, 1);
//! arena.deallocate(a, 10, 1);
//! assert_eq!(arena.blocks().len(), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod arena;
pub mod block;
pub mod config;
mod raw;
pub mod stats;

// Public re-exports for the primary API surface.
pub use arena::FixedBlockArena;
pub use block::Block;
pub use config::{ArenaConfig, UnknownPointerPolicy};
pub use fixalloc_core::{AllocError, ArenaInstanceId, MemoryResource};
pub use stats::ArenaStats;
