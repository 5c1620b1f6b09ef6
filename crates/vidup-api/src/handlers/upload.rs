use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::{header, Method, Uri},
    response::{IntoResponse, Response},
};
use vidup_core::AppError;

use crate::error::HttpAppError;
use crate::services::{StoreFailure, UploadService};
use crate::state::AppState;
use crate::telemetry::RequestLog;

/// `POST /upload`: accept one MP4 in the `video` form field and store it.
///
/// Responds with the stored video's id and metadata as JSON. Every rejection
/// is logged once, with the request's method and path, before the error
/// response is rendered.
pub async fn upload_video(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, HttpAppError> {
    let path = uri.path();
    let service = UploadService::new(state.storage.clone(), state.config.max_upload_size);

    let mut multipart = multipart.map_err(|rejection| {
        rejected(
            AppError::MultipartParse(rejection.body_text()),
            &method,
            path,
        )
    })?;

    let file = service
        .extract(&mut multipart)
        .await
        .map_err(|e| rejected(e, &method, path))?;

    service
        .validate(&file)
        .map_err(|e| rejected(e, &method, path))?;

    let response = service.store(file).await.map_err(
        |StoreFailure { video_id, error }| {
            let error = HttpAppError(error);
            error
                .record("Video upload failed")
                .with("video_id", video_id.to_string())
                .with_request(&method, path)
                .emit();
            error
        },
    )?;

    // The object is already stored; an encoding failure only loses the response.
    let body = serde_json::to_vec(&response).map_err(|e| {
        let error = HttpAppError::from(e);
        error
            .record("Error encoding JSON")
            .with("video_id", response.video_id.as_str())
            .with_request(&method, path)
            .emit();
        error
    })?;

    RequestLog::info("Video uploaded successfully")
        .with("video_id", response.video_id.as_str())
        .with("filename", response.original_filename.as_str())
        .with("size", response.file_size)
        .emit();

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

fn rejected(error: AppError, method: &Method, path: &str) -> HttpAppError {
    let message = match &error {
        AppError::PayloadTooLarge { .. } => "File size exceeds the limits",
        AppError::InvalidFileType { .. } => "Invalid file format",
        _ => "Failed to get file from form",
    };

    let error = HttpAppError(error);
    error.record(message).with_request(method, path).emit();
    error
}
