mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::fixtures::{fake_mp4, video_form};
use helpers::{setup_failing_app, setup_test_app, setup_test_app_with_limit};
use serde_json::Value;
use std::collections::HashSet;
use vidup_storage::VideoStore;

#[tokio::test]
async fn test_upload_mp4_succeeds() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/upload")
        .multipart(video_form("holiday.mp4", fake_mp4(2048)))
        .await;

    assert_eq!(response.status_code(), 200);
    assert!(response
        .header("content-type")
        .to_str()
        .unwrap()
        .starts_with("application/json"));

    let data: Value = response.json();
    assert_eq!(data["original_filename"], "holiday.mp4");
    assert_eq!(data["file_size"], 2048);
    assert_eq!(data["status"], "uploaded");
    let video_id = data["video_id"].as_str().expect("video_id is a string");
    assert!(uuid::Uuid::parse_str(video_id).is_ok());
    assert!(chrono::DateTime::parse_from_rfc3339(data["upload_time"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_uploaded_metadata_matches_request() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/upload")
        .multipart(video_form("Family Trip.MP4", fake_mp4(512)))
        .await;
    assert_eq!(response.status_code(), 200);

    let data: Value = response.json();
    let key = format!("{}.mp4", data["video_id"].as_str().unwrap());
    let stored = app.store.stat(&key).await.expect("object was stored");

    assert_eq!(stored.size, 512);
    assert_eq!(stored.content_type.as_deref(), Some("video/mp4"));
    assert_eq!(
        stored.metadata.get("original-filename").map(String::as_str),
        Some("Family Trip.MP4")
    );
    assert_eq!(stored.metadata.get("file-size").map(String::as_str), Some("512"));
    assert!(stored.metadata.contains_key("upload-time"));
}

#[tokio::test]
async fn test_video_ids_are_unique() {
    let app = setup_test_app().await;
    let mut ids = HashSet::new();

    for _ in 0..5 {
        let response = app
            .client()
            .post("/upload")
            .multipart(video_form("same.mp4", fake_mp4(64)))
            .await;
        assert_eq!(response.status_code(), 200);
        let data: Value = response.json();
        ids.insert(data["video_id"].as_str().unwrap().to_string());
    }

    assert_eq!(ids.len(), 5);
}

#[tokio::test]
async fn test_non_mp4_is_rejected() {
    let app = setup_test_app().await;

    for filename in ["clip.avi", "clip.mp4.exe", "clip", "mp4", "a.mp4/"] {
        let response = app
            .client()
            .post("/upload")
            .multipart(video_form(filename, fake_mp4(64)))
            .await;

        assert_eq!(response.status_code(), 400, "filename {}", filename);
        assert_eq!(response.text(), "Only MP4 files are allowed\n");
    }
}

#[tokio::test]
async fn test_oversized_upload_is_rejected_with_413() {
    let app = setup_test_app_with_limit(1024).await;

    let response = app
        .client()
        .post("/upload")
        .multipart(video_form("big.mp4", fake_mp4(1025)))
        .await;

    assert_eq!(response.status_code(), 413);
    assert_eq!(response.text(), "File size exceeds the limit\n");
}

#[tokio::test]
async fn test_upload_at_ceiling_is_accepted() {
    let app = setup_test_app_with_limit(1024).await;

    let response = app
        .client()
        .post("/upload")
        .multipart(video_form("exact.mp4", fake_mp4(1024)))
        .await;

    assert_eq!(response.status_code(), 200);
    let data: Value = response.json();
    assert_eq!(data["file_size"], 1024);
}

#[tokio::test]
async fn test_oversized_wrong_extension_reports_size_first() {
    let app = setup_test_app_with_limit(16).await;

    let response = app
        .client()
        .post("/upload")
        .multipart(video_form("big.avi", fake_mp4(32)))
        .await;

    assert_eq!(response.status_code(), 413);
}

#[tokio::test]
async fn test_missing_video_field_is_bad_request() {
    let app = setup_test_app().await;

    let part = Part::bytes(fake_mp4(64))
        .file_name("clip.mp4")
        .mime_type("video/mp4");
    let form = MultipartForm::new()
        .add_text("title", "no video here")
        .add_part("file", part);

    let response = app.client().post("/upload").multipart(form).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.text(), "Failed to get file\n");
}

#[tokio::test]
async fn test_video_field_without_filename_is_bad_request() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_text("video", "not a file");

    let response = app.client().post("/upload").multipart(form).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.text(), "Failed to get file\n");
}

#[tokio::test]
async fn test_non_multipart_body_is_bad_request() {
    let app = setup_test_app().await;

    let response = app.client().post("/upload").text("just text").await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.text(), "Failed to get file\n");
}

#[tokio::test]
async fn test_extra_fields_are_ignored() {
    let app = setup_test_app().await;

    let part = Part::bytes(fake_mp4(128))
        .file_name("with-title.mp4")
        .mime_type("video/mp4");
    let form = MultipartForm::new()
        .add_text("title", "My video")
        .add_part("video", part);

    let response = app.client().post("/upload").multipart(form).await;

    assert_eq!(response.status_code(), 200);
    let data: Value = response.json();
    assert_eq!(data["original_filename"], "with-title.mp4");
}

#[tokio::test]
async fn test_storage_failure_returns_500() {
    let server = setup_failing_app().await;

    let response = server
        .post("/upload")
        .multipart(video_form("clip.mp4", fake_mp4(64)))
        .await;

    assert_eq!(response.status_code(), 500);
    let body = response.text();
    assert_eq!(body, "Upload failed\n");
    assert!(!body.contains("AccessDenied"));
}

#[tokio::test]
async fn test_rejected_upload_never_reaches_storage() {
    // The failing store would turn any write into a 500.
    let server = setup_failing_app().await;

    let response = server
        .post("/upload")
        .multipart(video_form("clip.mov", fake_mp4(64)))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.text(), "Only MP4 files are allowed\n");
}
