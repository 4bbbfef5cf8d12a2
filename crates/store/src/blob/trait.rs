use async_trait::async_trait;
use thiserror::Error;

/// Blob persistence error.
///
/// These are **infrastructure errors** (storage IO) as opposed to domain
/// errors (validation). The store layer decides the propagation policy:
/// read failures are recovered locally, write failures escalate.
#[derive(Debug, Error)]
pub enum BlobError {
    #[error("blob read failed: {0}")]
    Read(String),

    #[error("blob write failed: {0}")]
    Write(String),
}

/// Whole-blob persistence handle.
///
/// The persisted collection lives under exactly one key/location as a single
/// serialized blob. Implementations make no assumptions about its content;
/// the store layer owns the encoding.
///
/// ## Semantics
///
/// - `read()` returns `Ok(None)` when no blob has been written yet (fresh
///   store), the full blob otherwise.
/// - `write()` replaces the blob in full. Implementations should make the
///   replacement atomic so a failed rewrite never leaves a half-written blob
///   behind.
///
/// Both operations are suspension points; neither holds any shared resource
/// across a whole store operation.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Read the entire blob, or `None` if it does not exist yet.
    async fn read(&self) -> Result<Option<Vec<u8>>, BlobError>;

    /// Replace the entire blob.
    async fn write(&self, bytes: Vec<u8>) -> Result<(), BlobError>;
}
