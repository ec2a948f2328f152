//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use reelvault_core::models;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Reelvault API",
        version = "0.1.0",
        description = "Video upload service: multipart intake to local storage with an in-memory catalog of uploaded videos."
    ),
    paths(
        handlers::video_upload::upload_video,
        handlers::video_get::list_videos,
        handlers::video_get::get_video,
    ),
    components(schemas(
        models::UploadRecord,
        handlers::video_upload::UploadResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "videos", description = "Video upload and catalog")
    )
)]
pub struct ApiDoc;
