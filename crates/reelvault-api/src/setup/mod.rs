//! Application setup and initialization
//!
//! Everything `main` needs to turn a [`Config`] into a running router lives
//! here, so tests can build the same state and routes without a listener.

pub mod routes;
pub mod server;
pub mod storage;

use crate::services::upload::UploadService;
use crate::state::AppState;
use anyhow::{Context, Result};
use reelvault_core::Config;
use reelvault_registry::MetadataRegistry;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry(&config.environment)?;

    config
        .validate()
        .context("Configuration validation failed")?;
    tracing::info!("Configuration loaded and validated successfully");

    let state = build_state(config).await?;
    let router = routes::setup_routes(state.clone())?;

    Ok((state, router))
}

/// Storage, an empty registry and the upload service over them.
pub async fn build_state(config: Config) -> Result<Arc<AppState>> {
    let storage = storage::setup_storage(&config).await?;
    let uploads = UploadService::new(
        storage.clone(),
        MetadataRegistry::new(),
        config.max_upload_bytes,
    );

    Ok(Arc::new(AppState {
        config,
        uploads,
        storage,
    }))
}
