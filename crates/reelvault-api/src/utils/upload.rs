//! Multipart intake for the upload endpoint
//!
//! The `video` file part is streamed straight into the blob store as soon as
//! it is reached; `title` and `description` may arrive before or after it.
//! Registration happens only once the whole form has been read.

use std::io;

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;
use axum::http::{header, StatusCode};
use futures::StreamExt;
use reelvault_core::constants::VIDEO_FIELD_NAME;
use reelvault_core::{AppError, UploadRecord};
use tokio_util::io::StreamReader;

use crate::services::upload::{IncomingFile, SizeLimitExceeded, StagedUpload, UploadService};

#[derive(Default)]
struct UploadForm {
    staged: Option<StagedUpload>,
    title: Option<String>,
    description: Option<String>,
}

/// Read an upload form and register the video it carries.
///
/// If the form turns out to be invalid after the file was written, the blob
/// is removed again and nothing is registered.
pub async fn upload_from_multipart(
    service: &UploadService,
    mut multipart: Multipart,
) -> Result<UploadRecord, AppError> {
    let mut form = UploadForm::default();

    if let Err(e) = read_parts(service, &mut multipart, &mut form).await {
        if let Some(staged) = form.staged.take() {
            service.discard(staged).await;
        }
        return Err(e);
    }

    let staged = form.staged.ok_or(AppError::MissingFile)?;
    Ok(service.commit(staged, form.title, form.description).await)
}

async fn read_parts(
    service: &UploadService,
    multipart: &mut Multipart,
    form: &mut UploadForm,
) -> Result<(), AppError> {
    let max_bytes = service.max_upload_bytes();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_bytes))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();
        let is_file = field.file_name().is_some();

        match field_name.as_str() {
            VIDEO_FIELD_NAME if is_file => {
                if form.staged.is_some() {
                    return Err(AppError::InvalidInput(
                        "Multiple video fields are not allowed; send exactly one field named 'video'"
                            .to_string(),
                    ));
                }
                form.staged = Some(service.stage(incoming_file(field)).await?);
            }
            "title" if !is_file => {
                form.title = Some(field.text().await.map_err(|e| multipart_error(e, max_bytes))?);
            }
            "description" if !is_file => {
                form.description =
                    Some(field.text().await.map_err(|e| multipart_error(e, max_bytes))?);
            }
            _ if is_file => {
                return Err(AppError::InvalidInput(format!(
                    "Unexpected field: {}",
                    field_name
                )));
            }
            _ => {
                tracing::debug!(field = %field_name, "Ignoring unknown form field");
            }
        }
    }

    Ok(())
}

/// Adapt a multipart file part into a streaming intake source.
fn incoming_file(field: Field<'_>) -> IncomingFile<'_> {
    let original_name = field.file_name().unwrap_or("unknown").to_string();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();
    let declared_size = field
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());

    let chunks = field.map(|chunk| chunk.map_err(multipart_io_error));

    IncomingFile {
        original_name,
        content_type,
        declared_size,
        reader: Box::pin(StreamReader::new(chunks)),
    }
}

fn multipart_error(err: MultipartError, max_bytes: u64) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge { max_bytes }
    } else {
        AppError::InvalidInput(format!("Failed to read multipart: {}", err.body_text()))
    }
}

/// Body-limit cut-offs are tagged so the service reports them as oversize
/// rather than as a broken client stream.
fn multipart_io_error(err: MultipartError) -> io::Error {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        io::Error::other(SizeLimitExceeded)
    } else {
        io::Error::other(err.body_text())
    }
}
