//! Metadata registry for uploaded videos

use reelvault_core::{NewUploadRecord, UploadRecord};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Ordered, append-only collection of upload records.
///
/// Ids are `len + 1` at insertion time. Id assignment and the push happen
/// under one write lock, so concurrent appends never share an id. There is
/// no update or delete; records are immutable once appended.
#[derive(Clone, Default)]
pub struct MetadataRegistry {
    records: Arc<RwLock<Vec<UploadRecord>>>,
}

impl MetadataRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the next id, append the record and return the stored copy.
    pub async fn append(&self, record: NewUploadRecord) -> UploadRecord {
        let mut records = self.records.write().await;

        let id = records.len() as u64 + 1;
        let stored = record.with_id(id);
        records.push(stored.clone());

        tracing::debug!(
            id,
            storage_name = %stored.storage_name,
            "Upload record registered"
        );

        stored
    }

    /// All records, oldest first
    pub async fn list(&self) -> Vec<UploadRecord> {
        self.records.read().await.clone()
    }

    /// Look up a record by id
    pub async fn get_by_id(&self, id: u64) -> Option<UploadRecord> {
        let records = self.records.read().await;
        records.iter().find(|r| r.id == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
