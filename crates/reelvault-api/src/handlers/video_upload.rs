use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::upload_from_multipart;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::IntoResponse,
    Json,
};
use reelvault_core::{AppError, UploadRecord};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub message: String,
    pub video: UploadRecord,
}

#[utoipa::path(
    post,
    path = "/upload",
    tag = "videos",
    request_body(content = inline(Object), content_type = "multipart/form-data",
        description = "File part `video` plus optional `title` and `description` text parts"),
    responses(
        (status = 200, description = "Video uploaded successfully", body = UploadResponse),
        (status = 400, description = "Missing file, non-video file, or file too large", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, HttpAppError> {
    // A body that is not multipart carries no file part at all.
    let multipart = multipart.map_err(|rejection| {
        tracing::debug!(rejection = %rejection, "Upload request is not multipart");
        AppError::MissingFile
    })?;

    let video = upload_from_multipart(&state.uploads, multipart).await?;

    Ok(Json(UploadResponse {
        message: "Video uploaded successfully".to_string(),
        video,
    }))
}
