use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::DEFAULT_TITLE;

/// Metadata for one accepted upload.
///
/// Records are immutable once registered; `id` is assigned by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadRecord {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Generated blob name, unique per upload.
    pub storage_name: String,
    /// Client-supplied filename. Untrusted, display only.
    pub original_name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    /// Blob store location handle.
    pub storage_path: String,
    /// Public URL path the blob is served under.
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
}

/// An upload record before the registry has assigned its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUploadRecord {
    pub title: String,
    pub description: String,
    pub storage_name: String,
    pub original_name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub storage_path: String,
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
}

impl NewUploadRecord {
    /// Attach the registry-assigned id.
    pub fn with_id(self, id: u64) -> UploadRecord {
        UploadRecord {
            id,
            title: self.title,
            description: self.description,
            storage_name: self.storage_name,
            original_name: self.original_name,
            size_bytes: self.size_bytes,
            mime_type: self.mime_type,
            storage_path: self.storage_path,
            url: self.url,
            uploaded_at: self.uploaded_at,
        }
    }
}

/// Title to store for the given client value: `"Untitled"` when absent or empty.
pub fn title_or_default(title: Option<String>) -> String {
    title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

/// Description to store for the given client value: empty when absent.
pub fn description_or_default(description: Option<String>) -> String {
    description.unwrap_or_default()
}
