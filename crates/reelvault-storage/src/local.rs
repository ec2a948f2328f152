use crate::traits::{BlobReader, Storage, StorageError, StorageResult, StoredObject};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Local filesystem storage: one flat directory, one file per key
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
    base_url: String,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Directory blobs are written to (e.g., "uploads")
    /// * `base_url` - URL prefix blobs are served under (e.g., "/uploads")
    pub async fn new(base_path: impl Into<PathBuf>, base_url: String) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage {
            base_path,
            base_url,
        })
    }

    /// Convert a storage key to a filesystem path inside the base directory
    fn key_to_path(&self, storage_key: &str) -> StorageResult<PathBuf> {
        if storage_key.is_empty()
            || storage_key.contains("..")
            || storage_key.contains('/')
            || storage_key.contains('\\')
        {
            return Err(StorageError::InvalidKey(
                "Storage key contains invalid characters".to_string(),
            ));
        }

        Ok(self.base_path.join(storage_key))
    }

    fn generate_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), key)
    }

    async fn remove_partial(path: &Path) {
        if let Err(e) = fs::remove_file(path).await {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to remove partial upload"
            );
        }
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn upload_stream(
        &self,
        storage_key: &str,
        _content_type: &str,
        mut reader: BlobReader<'_>,
    ) -> StorageResult<StoredObject> {
        let path = self.key_to_path(storage_key)?;
        let start = std::time::Instant::now();

        let mut file = match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                return Err(StorageError::AlreadyExists(storage_key.to_string()));
            }
            Err(e) => {
                return Err(StorageError::UploadFailed(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        let mut buf = vec![0u8; COPY_BUFFER_SIZE];
        let mut bytes_written: u64 = 0;
        loop {
            let n = match reader.read(&mut buf).await {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) => {
                    drop(file);
                    Self::remove_partial(&path).await;
                    return Err(StorageError::StreamInterrupted(e));
                }
            };

            if let Err(e) = file.write_all(&buf[..n]).await {
                drop(file);
                Self::remove_partial(&path).await;
                return Err(StorageError::UploadFailed(format!(
                    "Failed to write file {}: {}",
                    path.display(),
                    e
                )));
            }
            bytes_written += n as u64;
        }

        if let Err(e) = file.sync_all().await {
            drop(file);
            Self::remove_partial(&path).await;
            return Err(StorageError::UploadFailed(format!(
                "Failed to sync file {}: {}",
                path.display(),
                e
            )));
        }

        tracing::info!(
            path = %path.display(),
            key = %storage_key,
            size_bytes = bytes_written,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage stream upload successful"
        );

        Ok(StoredObject {
            storage_key: storage_key.to_string(),
            storage_path: path.display().to_string(),
            size_bytes: bytes_written,
        })
    }

    async fn delete(&self, storage_key: &str) -> StorageResult<()> {
        let path = self.key_to_path(storage_key)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(());
        }

        fs::remove_file(&path).await.map_err(|e| {
            StorageError::DeleteFailed(format!("Failed to delete file {}: {}", path.display(), e))
        })?;

        tracing::info!(key = %storage_key, "Local storage delete successful");

        Ok(())
    }

    async fn exists(&self, storage_key: &str) -> StorageResult<bool> {
        let path = self.key_to_path(storage_key)?;
        Ok(fs::try_exists(&path).await?)
    }

    fn public_url(&self, storage_key: &str) -> String {
        self.generate_url(storage_key)
    }
}
