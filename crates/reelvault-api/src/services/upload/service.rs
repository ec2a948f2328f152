//! Upload orchestration
//!
//! validate → name → stream to blob store → register. Staging (everything up
//! to the blob write) and committing (the registry append) are separate steps
//! so callers that learn the title/description after the file bytes can still
//! register atomically.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use reelvault_core::constants::VIDEO_FIELD_NAME;
use reelvault_core::models::{description_or_default, title_or_default};
use reelvault_core::{AppError, NewUploadRecord, UploadRecord};
use reelvault_registry::MetadataRegistry;
use reelvault_storage::{BlobReader, Storage, StorageError};
use tokio::io::AsyncReadExt;

use super::naming;
use super::types::{IncomingFile, SizeLimitExceeded, StagedUpload, UploadSubmission};
use super::validator::{normalize_mime_type, IntakeValidator};

/// Video upload service
///
/// Owns the path from an incoming file to a registered [`UploadRecord`] and
/// the read paths over the registry. Cheap to clone.
#[derive(Clone)]
pub struct UploadService {
    storage: Arc<dyn Storage>,
    registry: MetadataRegistry,
    validator: IntakeValidator,
}

impl UploadService {
    pub fn new(storage: Arc<dyn Storage>, registry: MetadataRegistry, max_upload_bytes: u64) -> Self {
        Self {
            storage,
            registry,
            validator: IntakeValidator::new(max_upload_bytes),
        }
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.validator.max_bytes()
    }

    /// Complete upload: stage the file, then register it.
    ///
    /// On any error the registry is untouched and no blob is left behind.
    pub async fn submit(&self, submission: UploadSubmission<'_>) -> Result<UploadRecord, AppError> {
        let file = submission.file.ok_or(AppError::MissingFile)?;
        let staged = self.stage(file).await?;
        Ok(self
            .commit(staged, submission.title, submission.description)
            .await)
    }

    /// Validate, name and write the file without registering it.
    ///
    /// The byte stream is capped at the configured maximum while it is
    /// written; a stream that runs past it is aborted and its blob removed.
    pub async fn stage(&self, file: IncomingFile<'_>) -> Result<StagedUpload, AppError> {
        self.validator
            .check(&file.content_type, file.declared_size)?;

        let storage_name = naming::storage_name(VIDEO_FIELD_NAME, &file.original_name);
        let max_bytes = self.validator.max_bytes();
        let start = Instant::now();

        // One byte past the limit is enough to tell "exactly max" from "over".
        let capped: BlobReader<'_> = Box::pin(file.reader.take(max_bytes.saturating_add(1)));

        let stored = self
            .storage
            .upload_stream(&storage_name, &file.content_type, capped)
            .await
            .map_err(|e| self.storage_error(&storage_name, e))?;

        if let Err(e) = self.validator.check_size(stored.size_bytes) {
            self.remove_blob(&stored.storage_key).await;
            return Err(e);
        }

        tracing::info!(
            storage_name = %stored.storage_key,
            original_name = %file.original_name,
            size_bytes = stored.size_bytes,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Video staged"
        );

        Ok(StagedUpload {
            original_name: file.original_name,
            mime_type: normalize_mime_type(&file.content_type).to_string(),
            stored,
            staged_at: Utc::now(),
        })
    }

    /// Register a staged upload and return the stored record.
    pub async fn commit(
        &self,
        staged: StagedUpload,
        title: Option<String>,
        description: Option<String>,
    ) -> UploadRecord {
        let url = self.storage.public_url(&staged.stored.storage_key);
        let record = self
            .registry
            .append(NewUploadRecord {
                title: title_or_default(title),
                description: description_or_default(description),
                storage_name: staged.stored.storage_key,
                original_name: staged.original_name,
                size_bytes: staged.stored.size_bytes,
                mime_type: staged.mime_type,
                storage_path: staged.stored.storage_path,
                url,
                uploaded_at: staged.staged_at,
            })
            .await;

        tracing::info!(
            id = record.id,
            storage_name = %record.storage_name,
            "Video uploaded successfully"
        );

        record
    }

    /// Drop a staged upload without registering it.
    pub async fn discard(&self, staged: StagedUpload) {
        tracing::debug!(storage_name = %staged.stored.storage_key, "Discarding staged upload");
        self.remove_blob(&staged.stored.storage_key).await;
    }

    /// All records, oldest first
    pub async fn list_all(&self) -> Vec<UploadRecord> {
        self.registry.list().await
    }

    pub async fn get_one(&self, id: u64) -> Result<UploadRecord, AppError> {
        self.registry
            .get_by_id(id)
            .await
            .ok_or_else(|| AppError::NotFound("Video not found".to_string()))
    }

    pub async fn count(&self) -> usize {
        self.registry.len().await
    }

    fn storage_error(&self, storage_name: &str, err: StorageError) -> AppError {
        match err {
            StorageError::StreamInterrupted(e) => {
                let cut_by_transport = e
                    .get_ref()
                    .is_some_and(|inner| inner.is::<SizeLimitExceeded>());
                if cut_by_transport {
                    tracing::debug!(storage_name = %storage_name, "Upload stream hit the transport limit");
                    AppError::PayloadTooLarge {
                        max_bytes: self.validator.max_bytes(),
                    }
                } else {
                    tracing::warn!(storage_name = %storage_name, error = %e, "Upload stream interrupted");
                    AppError::InvalidInput(format!("Failed to read file data: {}", e))
                }
            }
            other => {
                tracing::error!(storage_name = %storage_name, error = %other, "Failed to write video to storage");
                AppError::StorageFailure(other.to_string())
            }
        }
    }

    async fn remove_blob(&self, storage_key: &str) {
        if let Err(e) = self.storage.delete(storage_key).await {
            tracing::warn!(storage_key = %storage_key, error = %e, "Failed to remove unregistered blob");
        }
    }
}
