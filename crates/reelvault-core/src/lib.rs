//! Reelvault Core Library
//!
//! This crate provides the domain model, error types, configuration and shared
//! constants used by the storage, registry and API crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{NewUploadRecord, UploadRecord};
