//! Shared setup for HTTP integration tests.

#![allow(dead_code)]

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use bytes::Bytes;
use reelvault_api::setup;
use reelvault_core::Config;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test application: the full router over a throwaway upload directory.
pub struct TestApp {
    pub server: TestServer,
    pub upload_dir: PathBuf,
    _temp_dir: TempDir,
}

impl TestApp {
    /// Get the HTTP test client
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Number of blobs currently on disk
    pub fn stored_files(&self) -> usize {
        std::fs::read_dir(&self.upload_dir)
            .expect("upload dir should exist")
            .count()
    }
}

pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(|_| {}).await
}

/// Same as [`setup_test_app`], with a hook to adjust the config first.
pub async fn setup_test_app_with(configure: impl FnOnce(&mut Config)) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let upload_dir = temp_dir.path().join("uploads");

    let mut config = Config::with_upload_dir(&upload_dir);
    configure(&mut config);

    let state = setup::build_state(config)
        .await
        .expect("Failed to build app state");
    let app = setup::routes::setup_routes(state).expect("Failed to setup routes");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        upload_dir,
        _temp_dir: temp_dir,
    }
}

pub fn video_part(file_name: &str, mime_type: &str, data: &[u8]) -> Part {
    Part::bytes(Bytes::copy_from_slice(data))
        .file_name(file_name.to_string())
        .mime_type(mime_type.to_string())
}

/// Upload form with a `video` part and a title.
pub fn video_form(file_name: &str, data: &[u8], title: &str) -> MultipartForm {
    MultipartForm::new()
        .add_part("video", video_part(file_name, "video/mp4", data))
        .add_text("title", title.to_string())
}

/// Upload a video and return the `video` object of the response.
pub async fn upload_video(client: &TestServer, file_name: &str, data: &[u8], title: &str) -> serde_json::Value {
    let response = client
        .post("/upload")
        .multipart(video_form(file_name, data, title))
        .await;
    assert_eq!(response.status_code(), 200, "upload failed: {}", response.text());

    let body: serde_json::Value = response.json();
    body["video"].clone()
}
