//! Core types and traits for the fixalloc block allocator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by allocator implementations and their
//! consumers: the [`AllocError`] taxonomy, [`ArenaInstanceId`] for
//! allocator identity, alignment arithmetic in [`align`], and the
//! [`MemoryResource`] trait that allocator-aware containers program
//! against.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod align;
pub mod error;
pub mod id;
pub mod traits;

pub use error::AllocError;
pub use id::ArenaInstanceId;
pub use traits::MemoryResource;
