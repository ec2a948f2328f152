//! Shared constants

/// Default maximum accepted upload size: 100 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

/// Multipart field carrying the video file; also the storage name prefix.
pub const VIDEO_FIELD_NAME: &str = "video";

/// Title stored when the client sends none (or an empty one).
pub const DEFAULT_TITLE: &str = "Untitled";

/// Required MIME type prefix for accepted uploads.
pub const VIDEO_MIME_PREFIX: &str = "video/";

/// First path segments owned by the API router. The public upload path must
/// not start with any of them.
pub const RESERVED_ROUTE_SEGMENTS: &[&str] =
    &["upload", "videos", "video", "health", "live", "docs", "api"];
