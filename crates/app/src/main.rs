//! Composition root: build the store once at process start, wire the
//! composer, print one composed outfit. The surrounding UI is an external
//! collaborator; this binary stands in for it.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use wardrobe_outfit::OutfitComposer;
use wardrobe_store::{FileBlobStore, ItemStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    wardrobe_observability::init();

    let blob = match std::env::var_os("WARDROBE_DATA") {
        Some(path) => FileBlobStore::new(PathBuf::from(path)),
        None => FileBlobStore::at_default_location()
            .context("failed to resolve the default closet location")?,
    };
    tracing::info!(path = %blob.path().display(), "opening closet");

    let store = Arc::new(ItemStore::new(Arc::new(blob)));
    let composer = OutfitComposer::new(store.clone());

    let items = store.all_items().await;
    tracing::info!(count = items.len(), "closet loaded");

    let outfit = composer.compose_random_outfit().await;
    if outfit.is_empty() {
        tracing::warn!("closet is empty; add some clothes first");
    }
    println!("{}", serde_json::to_string_pretty(&outfit)?);

    Ok(())
}
