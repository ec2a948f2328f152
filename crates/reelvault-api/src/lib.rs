//! Reelvault API
//!
//! HTTP surface of the video upload service: multipart intake, the video
//! catalog endpoints, static serving of stored files, health and OpenAPI.

pub mod api_doc;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod utils;
