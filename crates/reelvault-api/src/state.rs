//! Shared application state handed to every handler.

use crate::services::upload::UploadService;
use reelvault_core::Config;
use reelvault_storage::Storage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub uploads: UploadService,
    /// Same blob store the upload service writes to; used by health checks.
    pub storage: Arc<dyn Storage>,
}
