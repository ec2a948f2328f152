use crate::{LocalStorage, Storage, StorageResult};
use reelvault_core::Config;
use std::sync::Arc;

/// Create the blob store described by the configuration
pub async fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    let storage =
        LocalStorage::new(&config.upload_dir, config.upload_public_path.clone()).await?;
    Ok(Arc::new(storage))
}
