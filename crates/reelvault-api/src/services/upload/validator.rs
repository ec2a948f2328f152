//! Intake validation: declared MIME type and size, checked before any byte is stored.
//!
//! Only the declared type is inspected; the content itself is not sniffed.

use reelvault_core::constants::VIDEO_MIME_PREFIX;
use reelvault_core::AppError;

/// Accept/reject decision for an incoming file, made on declared values only.
#[derive(Debug, Clone, Copy)]
pub struct IntakeValidator {
    max_bytes: u64,
}

impl IntakeValidator {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Check the declared type, then the declared size when one is known.
    ///
    /// A missing size is not a rejection; the byte stream is capped while it
    /// is written instead.
    pub fn check(&self, content_type: &str, declared_size: Option<u64>) -> Result<(), AppError> {
        self.check_content_type(content_type)?;
        if let Some(size) = declared_size {
            self.check_size(size)?;
        }
        Ok(())
    }

    pub fn check_content_type(&self, content_type: &str) -> Result<(), AppError> {
        let mime = normalize_mime_type(content_type);
        let is_video = mime
            .get(..VIDEO_MIME_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(VIDEO_MIME_PREFIX));

        if !is_video {
            tracing::debug!(content_type = %content_type, "Rejected non-video upload");
            return Err(AppError::UnsupportedMediaType(content_type.to_string()));
        }
        Ok(())
    }

    pub fn check_size(&self, size: u64) -> Result<(), AppError> {
        if size > self.max_bytes {
            tracing::debug!(size, max_bytes = self.max_bytes, "Rejected oversized upload");
            return Err(AppError::PayloadTooLarge {
                max_bytes: self.max_bytes,
            });
        }
        Ok(())
    }
}

/// Strip MIME parameters ("video/mp4; codecs=avc1" -> "video/mp4").
pub(crate) fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(str::trim)
        .unwrap_or(content_type)
}
