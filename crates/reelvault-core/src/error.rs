//! Error types module
//!
//! All upload and lookup failures are unified under the `AppError` enum. Each
//! variant describes its own HTTP presentation through `ErrorMetadata`, so the
//! API layer only has to render it.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_FAILURE")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden from clients
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No video uploaded")]
    MissingFile,

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("File too large: exceeds {max_bytes} bytes")]
    PayloadTooLarge { max_bytes: u64 },

    #[error("Storage failure: {0}")]
    StorageFailure(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Static metadata for each variant: (http_status, error_code, sensitive, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, bool, LogLevel) {
    match err {
        AppError::MissingFile => (400, "MISSING_FILE", false, LogLevel::Debug),
        AppError::UnsupportedMediaType(_) => {
            (400, "UNSUPPORTED_MEDIA_TYPE", false, LogLevel::Debug)
        }
        // The upload contract reports oversize files as a plain bad request.
        AppError::PayloadTooLarge { .. } => (400, "PAYLOAD_TOO_LARGE", false, LogLevel::Debug),
        AppError::StorageFailure(_) => (500, "STORAGE_FAILURE", true, LogLevel::Error),
        AppError::NotFound(_) => (404, "NOT_FOUND", false, LogLevel::Debug),
        AppError::InvalidInput(_) => (400, "INVALID_INPUT", false, LogLevel::Debug),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", true, LogLevel::Error),
    }
}

impl AppError {
    /// Get the error type name for detailed error responses
    pub fn error_type(&self) -> &str {
        match self {
            AppError::MissingFile => "MissingFile",
            AppError::UnsupportedMediaType(_) => "UnsupportedMediaType",
            AppError::PayloadTooLarge { .. } => "PayloadTooLarge",
            AppError::StorageFailure(_) => "StorageFailure",
            AppError::NotFound(_) => "NotFound",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::Internal(_) => "Internal",
        }
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).3
    }

    fn client_message(&self) -> String {
        match self {
            AppError::MissingFile => "No video uploaded".to_string(),
            AppError::UnsupportedMediaType(_) => "Only video files are allowed!".to_string(),
            AppError::PayloadTooLarge { .. } => "File too large".to_string(),
            AppError::StorageFailure(_) => "Failed to store video".to_string(),
            AppError::NotFound(ref msg) => msg.clone(),
            AppError::InvalidInput(ref msg) => msg.clone(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_metadata_missing_file() {
        let err = AppError::MissingFile;
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.error_code(), "MISSING_FILE");
        assert_eq!(err.client_message(), "No video uploaded");
        assert!(!err.is_sensitive());
    }

    #[test]
    fn test_error_metadata_payload_too_large_is_bad_request() {
        let err = AppError::PayloadTooLarge {
            max_bytes: 104_857_600,
        };
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.client_message(), "File too large");
        assert!(err.to_string().contains("104857600"));
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_error_metadata_not_found() {
        let err = AppError::NotFound("Video not found".to_string());
        assert_eq!(err.http_status_code(), 404);
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert_eq!(err.client_message(), "Video not found");
    }

    #[test]
    fn test_storage_failure_hides_internal_message() {
        let err = AppError::StorageFailure("disk full at /var/lib/uploads".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert!(err.is_sensitive());
        assert_eq!(err.log_level(), LogLevel::Error);
        assert!(!err.client_message().contains("/var/lib"));
    }

    #[test]
    fn test_unsupported_media_type_message() {
        let err = AppError::UnsupportedMediaType("image/png".to_string());
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.client_message(), "Only video files are allowed!");
        assert_eq!(err.error_type(), "UnsupportedMediaType");
    }
}
