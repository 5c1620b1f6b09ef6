//! Video upload service
//!
//! Pipeline for `POST /upload`: extract → validate → store. Each step either
//! moves the upload forward or ends it with an [`AppError`]; nothing is
//! written to storage unless every earlier step passed.

use std::sync::Arc;

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;
use axum::http::StatusCode;
use bytes::{Bytes, BytesMut};
use uuid::Uuid;
use vidup_core::constants::UPLOAD_FIELD_NAME;
use vidup_core::models::video_storage_key;
use vidup_core::{AppError, UploadResponse, UploadValidator};
use vidup_storage::VideoStore;

/// The `video` part of an upload form, read fully into memory.
#[derive(Debug, Clone)]
pub struct ReceivedFile {
    pub filename: String,
    pub data: Bytes,
}

impl ReceivedFile {
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// A write the store rejected, with the id that was generated for it.
#[derive(Debug)]
pub struct StoreFailure {
    pub video_id: Uuid,
    pub error: AppError,
}

pub struct UploadService {
    storage: Arc<dyn VideoStore>,
    validator: UploadValidator,
}

impl UploadService {
    pub fn new(storage: Arc<dyn VideoStore>, max_upload_size: usize) -> Self {
        Self {
            storage,
            validator: UploadValidator::new(max_upload_size),
        }
    }

    /// Find the `video` part and read it.
    ///
    /// Other parts are skipped. A missing part, a part without a filename or a
    /// malformed form is a `MultipartParse` error. The read stops as soon as
    /// more than the size ceiling has arrived.
    pub async fn extract(&self, multipart: &mut Multipart) -> Result<ReceivedFile, AppError> {
        let max = self.validator.max_file_size();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| multipart_error(e, max))?
        {
            if field.name() != Some(UPLOAD_FIELD_NAME) {
                continue;
            }

            let filename = match field.file_name() {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => {
                    return Err(AppError::MultipartParse(format!(
                        "field '{}' has no filename",
                        UPLOAD_FIELD_NAME
                    )))
                }
            };

            let data = read_limited(field, max).await?;
            return Ok(ReceivedFile { filename, data });
        }

        Err(AppError::MultipartParse(format!(
            "no '{}' field in form",
            UPLOAD_FIELD_NAME
        )))
    }

    /// Size check first, then extension.
    pub fn validate(&self, file: &ReceivedFile) -> Result<(), AppError> {
        self.validator.validate(&file.filename, file.size())?;
        Ok(())
    }

    /// Write the file under a fresh id and build the response body.
    ///
    /// The response is only built after the store acknowledged the write.
    pub async fn store(&self, file: ReceivedFile) -> Result<UploadResponse, StoreFailure> {
        let video_id = Uuid::new_v4();
        let storage_key = video_storage_key(video_id);
        let file_size = file.size() as u64;

        self.storage
            .put_video(&storage_key, file.data, &file.filename, file_size)
            .await
            .map_err(|e| StoreFailure {
                video_id,
                error: e.into(),
            })?;

        Ok(UploadResponse::uploaded(video_id, file.filename, file_size))
    }
}

async fn read_limited(mut field: Field<'_>, max: usize) -> Result<Bytes, AppError> {
    let mut buffer = BytesMut::new();
    while let Some(chunk) = field.chunk().await.map_err(|e| multipart_error(e, max))? {
        if buffer.len() + chunk.len() > max {
            return Err(AppError::PayloadTooLarge {
                size: buffer.len() + chunk.len(),
                max,
            });
        }
        buffer.extend_from_slice(&chunk);
    }
    Ok(buffer.freeze())
}

/// Hitting the router's body limit is a 413; anything else is a malformed form.
fn multipart_error(err: MultipartError, max: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge { size: max + 1, max }
    } else {
        AppError::MultipartParse(err.body_text())
    }
}
