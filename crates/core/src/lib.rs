//! `wardrobe-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** types (no IO, no storage concerns).

pub mod error;
pub mod id;
pub mod item;

pub use error::{DomainError, DomainResult};
pub use id::ItemId;
pub use item::{ClothingItem, ClothingKind, ItemDraft, DEFAULT_CATEGORY, UNKNOWN_COLOR};
