//! Storage abstraction trait
//!
//! This module defines the Storage trait that blob store backends implement.

use async_trait::async_trait;
use std::pin::Pin;
use thiserror::Error;
use tokio::io::AsyncRead;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Blob already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// Reading the incoming byte stream failed. The partial blob has been removed.
    #[error("Upload stream interrupted: {0}")]
    StreamInterrupted(#[source] std::io::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Byte source consumed by [`Storage::upload_stream`].
pub type BlobReader<'a> = Pin<Box<dyn AsyncRead + Send + Unpin + 'a>>;

/// Location of a blob after a successful write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub storage_key: String,
    /// Backend-specific location handle (a filesystem path for local storage)
    pub storage_path: String,
    pub size_bytes: u64,
}

/// Storage abstraction trait
///
/// Uploads never overwrite: writing to a key that already exists fails with
/// [`StorageError::AlreadyExists`]. A failed upload leaves no blob behind.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write the reader's content under `storage_key`, consuming it until EOF.
    async fn upload_stream(
        &self,
        storage_key: &str,
        content_type: &str,
        reader: BlobReader<'_>,
    ) -> StorageResult<StoredObject>;

    /// Delete a blob. Deleting a missing blob is not an error.
    async fn delete(&self, storage_key: &str) -> StorageResult<()>;

    /// Check if a blob exists
    async fn exists(&self, storage_key: &str) -> StorageResult<bool>;

    /// Public URL path for a key
    fn public_url(&self, storage_key: &str) -> String;
}
