//! Reelvault Registry
//!
//! In-memory catalog of upload metadata. The registry is created empty at
//! startup and never persisted.

pub mod registry;

pub use registry::MetadataRegistry;
