//! Durable CRUD over the clothing-item collection.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;

use wardrobe_core::{ClothingItem, ClothingKind, ItemDraft, ItemId};

use crate::blob::BlobStore;

/// Item store operation error.
///
/// Read failures never surface here: an unreadable or corrupt blob is
/// recovered locally as the empty collection, so a fresh or damaged store
/// behaves as "no items" instead of failing its callers. Write failures
/// always escalate, since silently dropping a user-initiated add/remove
/// would be silent data loss.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("closet write failed: {0}")]
    Write(String),
}

/// The Item Store: whole-collection read-modify-write CRUD over one blob.
///
/// Constructed once at process start with an injected persistence handle and
/// shared by consumers. Mutations are serialized through an internal lock so
/// back-to-back add/remove calls cannot interleave their read-modify-write
/// cycles and lose an update; reads take no lock.
///
/// The whole-collection rewrite trades write amplification for simplicity,
/// which is fine for an inventory of at most a few hundred items.
pub struct ItemStore {
    blob: Arc<dyn BlobStore>,
    mutation: Mutex<()>,
}

impl ItemStore {
    pub fn new(blob: Arc<dyn BlobStore>) -> Self {
        Self {
            blob,
            mutation: Mutex::new(()),
        }
    }

    /// Add a clothing item, assigning it a fresh unique id.
    ///
    /// Appends to the current collection and rewrites the blob in full.
    pub async fn add_item(&self, draft: ItemDraft) -> Result<ClothingItem, StoreError> {
        let _guard = self.mutation.lock().await;

        let mut items = self.load_items().await;
        let item = ClothingItem::from_draft(draft);
        items.push(item.clone());
        self.persist(&items).await?;

        tracing::debug!(id = %item.id, kind = %item.kind, "added closet item");
        Ok(item)
    }

    /// The full collection, in insertion order.
    ///
    /// Fail-soft: a missing, unreadable, or corrupt blob reads as empty.
    pub async fn all_items(&self) -> Vec<ClothingItem> {
        self.load_items().await
    }

    /// The subsequence of items of one kind, preserving insertion order.
    ///
    /// A pure filter over the full listing; there is no per-kind index.
    pub async fn items_by_kind(&self, kind: ClothingKind) -> Vec<ClothingItem> {
        let mut items = self.load_items().await;
        items.retain(|item| item.kind == kind);
        items
    }

    /// Remove the item with the given id, if present.
    ///
    /// Idempotent: removing an absent id is a no-op, not an error.
    pub async fn remove_item(&self, id: ItemId) -> Result<(), StoreError> {
        let _guard = self.mutation.lock().await;

        let mut items = self.load_items().await;
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            // Nothing matched; the collection is unchanged, skip the rewrite.
            return Ok(());
        }
        self.persist(&items).await?;

        tracing::debug!(%id, "removed closet item");
        Ok(())
    }

    async fn load_items(&self) -> Vec<ClothingItem> {
        let bytes = match self.blob.read().await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::error!("failed to read closet blob: {err}");
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(items) => items,
            Err(err) => {
                tracing::error!("corrupt closet blob, treating as empty: {err}");
                Vec::new()
            }
        }
    }

    async fn persist(&self, items: &[ClothingItem]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(items)
            .map_err(|err| StoreError::Write(format!("serialize: {err}")))?;

        self.blob.write(bytes).await.map_err(|err| {
            tracing::error!("failed to write closet blob: {err}");
            StoreError::Write(err.to_string())
        })
    }
}
