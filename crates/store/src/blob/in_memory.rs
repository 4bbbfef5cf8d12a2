use std::sync::RwLock;

use async_trait::async_trait;

use super::r#trait::{BlobError, BlobStore};

/// In-memory blob store.
///
/// Intended for tests/dev. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryBlobStore {
    blob: RwLock<Option<Vec<u8>>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn read(&self) -> Result<Option<Vec<u8>>, BlobError> {
        let blob = self
            .blob
            .read()
            .map_err(|_| BlobError::Read("lock poisoned".to_string()))?;
        Ok(blob.clone())
    }

    async fn write(&self, bytes: Vec<u8>) -> Result<(), BlobError> {
        let mut blob = self
            .blob
            .write()
            .map_err(|_| BlobError::Write("lock poisoned".to_string()))?;
        *blob = Some(bytes);
        Ok(())
    }
}
