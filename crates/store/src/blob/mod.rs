//! Whole-blob persistence boundary.
//!
//! This module defines a storage-facing abstraction for reading and
//! rewriting the serialized item collection without making any storage
//! assumptions.

pub mod file;
pub mod in_memory;
pub mod r#trait;

pub use file::FileBlobStore;
pub use in_memory::InMemoryBlobStore;
pub use r#trait::{BlobError, BlobStore};
