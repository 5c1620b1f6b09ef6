use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::constants::VIDEO_KEY_SUFFIX;

/// Outcome literal reported for an accepted upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Uploaded,
}

/// Response body for a successful `POST /upload`.
///
/// Only built after the object store acknowledged the write, so a `video_id`
/// always refers to a stored object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadResponse {
    pub video_id: String,
    pub original_filename: String,
    pub file_size: u64,
    pub status: UploadStatus,
    pub upload_time: String,
}

impl UploadResponse {
    pub fn uploaded(video_id: Uuid, original_filename: String, file_size: u64) -> Self {
        Self {
            video_id: video_id.to_string(),
            original_filename,
            file_size,
            status: UploadStatus::Uploaded,
            upload_time: rfc3339_now(),
        }
    }
}

/// Storage key for a video id: `{id}.mp4`.
pub fn video_storage_key(video_id: Uuid) -> String {
    format!("{}{}", video_id, VIDEO_KEY_SUFFIX)
}

/// What the object store holds for one uploaded video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredVideo {
    pub key: String,
    pub size: u64,
    pub content_type: Option<String>,
    pub metadata: HashMap<String, String>,
}

/// Current UTC time in RFC 3339 with second precision (`2024-01-02T03:04:05Z`).
pub fn rfc3339_now() -> String {
    to_rfc3339(Utc::now())
}

pub fn to_rfc3339(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_storage_key_has_mp4_suffix() {
        let id = Uuid::new_v4();
        let key = video_storage_key(id);
        assert_eq!(key, format!("{}.mp4", id));
    }

    #[test]
    fn test_upload_response_shape() {
        let id = Uuid::new_v4();
        let response = UploadResponse::uploaded(id, "holiday.mp4".to_string(), 42);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["video_id"], id.to_string());
        assert_eq!(json["original_filename"], "holiday.mp4");
        assert_eq!(json["file_size"], 42);
        assert_eq!(json["status"], "uploaded");
        assert!(DateTime::parse_from_rfc3339(json["upload_time"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn test_rfc3339_format() {
        let time = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(to_rfc3339(time), "2024-01-02T03:04:05Z");
    }
}
