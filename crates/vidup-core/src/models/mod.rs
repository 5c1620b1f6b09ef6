//! Domain models

pub mod upload;

pub use upload::{
    rfc3339_now, to_rfc3339, video_storage_key, StoredVideo, UploadResponse, UploadStatus,
};
