use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::r#trait::{BlobError, BlobStore};

/// File name of the persisted collection under the data directory.
const BLOB_FILE: &str = "closet_items.json";

/// File-backed blob store: one JSON file, rewritten in full on every write.
///
/// Writes go through a temp-file-then-rename step so a crashed or failed
/// rewrite never leaves a truncated blob behind.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    path: PathBuf,
}

impl FileBlobStore {
    /// Blob store over an explicit file path (tests, overrides).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Blob store at the platform default location:
    /// `{app_data_dir}/wardrobe/closet_items.json`.
    pub fn at_default_location() -> Result<Self, BlobError> {
        let dir = default_data_dir()?;
        Ok(Self::new(dir.join(BLOB_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl BlobStore for FileBlobStore {
    async fn read(&self) -> Result<Option<Vec<u8>>, BlobError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(BlobError::Read(format!("{}: {err}", self.path.display()))),
        }
    }

    async fn write(&self, bytes: Vec<u8>) -> Result<(), BlobError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| BlobError::Write(format!("{}: {err}", parent.display())))?;
        }

        // Write to a sibling temp file, then rename over the blob. Rename is
        // atomic within one filesystem, so readers see either the old blob or
        // the new one, never a partial write.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|err| BlobError::Write(format!("{}: {err}", tmp.display())))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|err| BlobError::Write(format!("{}: {err}", self.path.display())))?;

        Ok(())
    }
}

/// Resolve the data directory for the persisted collection:
/// `{app_data_dir}/wardrobe`.
fn default_data_dir() -> Result<PathBuf, BlobError> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .ok_or_else(|| {
            BlobError::Write(
                "failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share"
                    .to_string(),
            )
        })?;

    Ok(base.join("wardrobe"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::new(dir.path().join("closet_items.json"));
        assert!(store.read().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn write_then_read_returns_the_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::new(dir.path().join("closet_items.json"));

        store.write(b"[]".to_vec()).await.unwrap();
        assert_eq!(store.read().await.unwrap().unwrap(), b"[]");

        // Full rewrite replaces, not appends.
        store.write(b"[1]".to_vec()).await.unwrap();
        assert_eq!(store.read().await.unwrap().unwrap(), b"[1]");
    }

    #[tokio::test]
    async fn write_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::new(dir.path().join("nested/deeper/closet_items.json"));

        store.write(b"[]".to_vec()).await.unwrap();
        assert!(store.read().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn unreadable_path_is_a_read_error() {
        // A directory at the blob path cannot be read as a file.
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::new(dir.path());
        assert!(matches!(store.read().await, Err(BlobError::Read(_))));
    }
}
