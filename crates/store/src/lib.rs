//! `wardrobe-store` — the Item Store.
//!
//! Durable CRUD over the clothing-item collection, backed by a single
//! serialized blob behind an injected [`blob::BlobStore`] handle. All access
//! to the persisted collection funnels through [`ItemStore`]; no other
//! component touches the blob directly.

pub mod blob;
pub mod store;

pub use blob::{BlobError, BlobStore, FileBlobStore, InMemoryBlobStore};
pub use store::{ItemStore, StoreError};
