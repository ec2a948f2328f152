//! Types used by the upload service

use chrono::{DateTime, Utc};
use reelvault_storage::{BlobReader, StoredObject};

/// A file part as it arrives from the client, not yet validated
pub struct IncomingFile<'a> {
    /// Client-supplied filename (untrusted)
    pub original_name: String,
    /// Declared MIME type
    pub content_type: String,
    /// Declared length, when the transport knows it up front
    pub declared_size: Option<u64>,
    pub reader: BlobReader<'a>,
}

/// Everything a single upload request carries
pub struct UploadSubmission<'a> {
    pub file: Option<IncomingFile<'a>>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// A blob that has been validated and written but not yet registered.
///
/// Must be either committed or discarded; dropping it leaves an
/// unreferenced blob on disk.
#[derive(Debug)]
pub struct StagedUpload {
    pub original_name: String,
    pub mime_type: String,
    pub stored: StoredObject,
    pub staged_at: DateTime<Utc>,
}

/// Stream error marker: the transport cut the body off at its size limit.
#[derive(Debug, thiserror::Error)]
#[error("upload exceeded the transport size limit")]
pub struct SizeLimitExceeded;
