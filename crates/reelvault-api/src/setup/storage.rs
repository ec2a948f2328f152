//! Storage setup and initialization

use anyhow::{Context, Result};
use reelvault_core::Config;
use reelvault_storage::{create_storage, Storage};
use std::sync::Arc;

pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!(upload_dir = %config.upload_dir.display(), "Initializing storage...");

    let storage = create_storage(config)
        .await
        .context("Failed to initialize upload storage")?;

    tracing::info!(
        public_path = %config.upload_public_path,
        "Storage initialized successfully"
    );
    Ok(storage)
}
