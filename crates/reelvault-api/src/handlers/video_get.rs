use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use reelvault_core::{AppError, UploadRecord};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/video/{id}",
    tag = "videos",
    params(
        ("id" = u64, Path, description = "Video ID as a plain decimal integer. Any other form, such as `1abc`, is answered with 404")
    ),
    responses(
        (status = 200, description = "Video found", body = UploadRecord),
        (status = 404, description = "Video not found", body = ErrorResponse)
    )
)]
pub async fn get_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    // An id that is not an integer cannot match any record.
    let id = id
        .parse::<u64>()
        .map_err(|_| AppError::NotFound("Video not found".to_string()))?;

    let video = state.uploads.get_one(id).await?;
    Ok(Json(video))
}

#[utoipa::path(
    get,
    path = "/videos",
    tag = "videos",
    responses(
        (status = 200, description = "All videos, oldest first", body = Vec<UploadRecord>)
    )
)]
pub async fn list_videos(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.uploads.list_all().await)
}
