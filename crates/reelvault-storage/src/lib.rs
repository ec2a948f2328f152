//! Reelvault Storage Library
//!
//! Blob store abstraction and the local filesystem implementation.
//!
//! # Storage key format
//!
//! Blobs live in a single flat directory, so a storage key is a bare file
//! name. Keys must not be empty and must not contain path separators or `..`.

pub mod factory;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use local::LocalStorage;
pub use traits::{BlobReader, Storage, StorageError, StorageResult, StoredObject};
