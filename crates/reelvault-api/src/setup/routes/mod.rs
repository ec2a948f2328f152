//! Route configuration and setup.
//!
//! Video endpoints live here; health checks in [health](health).

mod health;

use crate::handlers;
use crate::middleware::request_id_middleware;
use crate::state::AppState;
use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use reelvault_core::Config;
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Room for multipart boundaries, part headers and the text fields.
const MULTIPART_ENVELOPE_BYTES: u64 = 1024 * 1024;

/// Setup all application routes
pub fn setup_routes(state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let config = &state.config;
    // Overlapping paths make axum panic while building the router.
    config
        .validate()
        .context("Refusing to build routes from an invalid configuration")?;
    let cors = setup_cors(config)?;

    // Enforced by the multipart extractor, so an oversized body surfaces as
    // our own "File too large" error instead of a bare 413.
    let body_limit = usize::try_from(
        config
            .max_upload_bytes
            .saturating_add(MULTIPART_ENVELOPE_BYTES),
    )
    .unwrap_or(usize::MAX);

    let public_path = config.upload_public_path.trim_end_matches('/');
    tracing::info!(
        public_path = %public_path,
        upload_dir = %config.upload_dir.display(),
        "Serving uploaded files"
    );

    tracing::info!(
        http_concurrency_limit = config.http_concurrency_limit,
        "HTTP concurrency limit layer enabled"
    );

    let app = video_routes()
        .layer(DefaultBodyLimit::max(body_limit))
        .merge(health::health_routes())
        .route(
            "/api/openapi.json",
            get(|| async { Json(crate::api_doc::get_openapi_spec()) }),
        )
        .nest_service(public_path, ServeDir::new(&config.upload_dir))
        .merge(utoipa_rapidoc::RapiDoc::new("/api/openapi.json").path("/docs"))
        .layer(ConcurrencyLimitLayer::new(config.http_concurrency_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_id_middleware))
        .with_state(state.clone());

    Ok(app)
}

fn video_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/upload", post(handlers::video_upload::upload_video))
        .route("/videos", get(handlers::video_get::list_videos))
        .route("/video/{id}", get(handlers::video_get::get_video))
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins
            .iter()
            .map(|o| o.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?;
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::build_state;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_public_path_over_api_route_is_an_error() {
        let dir = tempdir().unwrap();
        let mut config = Config::with_upload_dir(dir.path().join("uploads"));
        config.upload_public_path = "/videos".to_string();

        let state = build_state(config).await.unwrap();

        assert!(setup_routes(state).is_err());
    }

    #[tokio::test]
    async fn test_routes_build_with_custom_public_path() {
        let dir = tempdir().unwrap();
        let mut config = Config::with_upload_dir(dir.path().join("uploads"));
        config.upload_public_path = "/media/files/".to_string();

        let state = build_state(config).await.unwrap();

        assert!(setup_routes(state).is_ok());
    }
}
