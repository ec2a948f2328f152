mod helpers;

use futures::future::join_all;
use helpers::{setup_test_app, upload_video, video_form};
use std::collections::BTreeSet;
use std::future::IntoFuture;

#[tokio::test]
async fn test_list_videos_empty() {
    let app = setup_test_app().await;

    let response = app.client().get("/videos").await;

    assert_eq!(response.status_code(), 200);
    let list: Vec<serde_json::Value> = response.json();
    assert!(list.is_empty());
}

#[tokio::test]
async fn test_list_videos_in_upload_order() {
    let app = setup_test_app().await;
    let client = app.client();

    for title in ["first", "second", "third"] {
        upload_video(client, "clip.mp4", title.as_bytes(), title).await;
    }

    let list: Vec<serde_json::Value> = client.get("/videos").await.json();
    let titles: Vec<&str> = list.iter().map(|v| v["title"].as_str().unwrap()).collect();
    let ids: Vec<u64> = list.iter().map(|v| v["id"].as_u64().unwrap()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_get_video_returns_uploaded_record() {
    let app = setup_test_app().await;
    let client = app.client();

    let uploaded = upload_video(client, "clip.mp4", b"bytes", "Mine").await;
    let id = uploaded["id"].as_u64().unwrap();

    let response = client.get(&format!("/video/{}", id)).await;

    assert_eq!(response.status_code(), 200);
    let fetched: serde_json::Value = response.json();
    assert_eq!(fetched, uploaded);
}

#[tokio::test]
async fn test_get_video_not_found() {
    let app = setup_test_app().await;

    let response = app.client().get("/video/999").await;

    assert_eq!(response.status_code(), 404);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Video not found");
}

#[tokio::test]
async fn test_get_video_with_non_numeric_id() {
    let app = setup_test_app().await;

    let response = app.client().get("/video/abc").await;

    assert_eq!(response.status_code(), 404);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Video not found");
}

#[tokio::test]
async fn test_get_video_with_trailing_garbage_id() {
    let app = setup_test_app().await;
    let client = app.client();
    upload_video(client, "clip.mp4", b"x", "One").await;

    let response = client.get("/video/1abc").await;

    assert_eq!(response.status_code(), 404);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Video not found");
    assert_eq!(client.get("/video/1").await.status_code(), 200);
}

#[tokio::test]
async fn test_concurrent_uploads_get_distinct_ids() {
    const N: usize = 16;
    let app = setup_test_app().await;
    let client = app.client();

    let requests = (0..N).map(|i| {
        client
            .post("/upload")
            .multipart(video_form(&format!("clip-{}.mp4", i), b"data", "parallel"))
            .into_future()
    });
    let responses = join_all(requests).await;

    let mut ids = BTreeSet::new();
    for response in responses {
        assert_eq!(response.status_code(), 200);
        let body: serde_json::Value = response.json();
        assert!(ids.insert(body["video"]["id"].as_u64().unwrap()));
    }
    assert_eq!(ids, (1..=N as u64).collect::<BTreeSet<_>>());
    assert_eq!(app.stored_files(), N);
}

#[tokio::test]
async fn test_health_reports_storage_and_count() {
    let app = setup_test_app().await;
    let client = app.client();

    upload_video(client, "clip.mp4", b"x", "One").await;

    let response = client.get("/health").await;
    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"], "healthy");
    assert_eq!(body["videos"], 1);

    let live = client.get("/live").await;
    assert_eq!(live.status_code(), 200);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/openapi.json").await;

    assert_eq!(response.status_code(), 200);
    let spec: serde_json::Value = response.json();
    assert!(spec["paths"]["/upload"].is_object());
    assert!(spec["paths"]["/video/{id}"].is_object());

    let id_param = &spec["paths"]["/video/{id}"]["get"]["parameters"][0];
    assert_eq!(id_param["name"], "id");
    assert!(id_param["description"].as_str().unwrap().contains("decimal integer"));
}
