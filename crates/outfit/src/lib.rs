//! `wardrobe-outfit` — the Outfit Composer.
//!
//! Draws one uniformly random item per clothing category from the Item Store
//! and assembles an ephemeral [`Outfit`]. The composer never fails on its
//! own: an empty category leaves its slot unset, and an empty inventory
//! yields an all-unset outfit. No partial failure, only partial results.

use std::sync::Arc;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use wardrobe_core::ClothingKind;
use wardrobe_store::ItemStore;

/// A composed outfit: up to one image reference per clothing category.
///
/// Ephemeral — produced fresh on each composition request, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outfit {
    pub top: Option<String>,
    pub bottom: Option<String>,
    pub shoes: Option<String>,
}

impl Outfit {
    /// True when no slot is populated (nothing to show).
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none() && self.shoes.is_none()
    }

    /// The image reference composed for one category, if any.
    pub fn slot(&self, kind: ClothingKind) -> Option<&str> {
        match kind {
            ClothingKind::Top => self.top.as_deref(),
            ClothingKind::Bottom => self.bottom.as_deref(),
            ClothingKind::Shoes => self.shoes.as_deref(),
        }
    }
}

/// Composes randomized outfits from the current inventory.
pub struct OutfitComposer {
    store: Arc<ItemStore>,
}

impl OutfitComposer {
    pub fn new(store: Arc<ItemStore>) -> Self {
        Self { store }
    }

    /// Compose one outfit: for each category, fetch that category's items and
    /// pick one uniformly at random; an empty category leaves the slot unset.
    pub async fn compose_random_outfit(&self) -> Outfit {
        let outfit = Outfit {
            top: self.pick(ClothingKind::Top).await,
            bottom: self.pick(ClothingKind::Bottom).await,
            shoes: self.pick(ClothingKind::Shoes).await,
        };

        if outfit.is_empty() {
            tracing::debug!("composed an empty outfit; closet has no items");
        }
        outfit
    }

    async fn pick(&self, kind: ClothingKind) -> Option<String> {
        let items = self.store.items_by_kind(kind).await;
        items
            .choose(&mut rand::thread_rng())
            .map(|item| item.uri.clone())
    }
}
