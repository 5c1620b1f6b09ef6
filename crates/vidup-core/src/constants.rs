//! Fixed values shared across crates.

/// Upload ceiling: 100 MiB.
pub const MAX_UPLOAD_SIZE: usize = 100 * 1024 * 1024;

/// Slack on top of [`MAX_UPLOAD_SIZE`] for multipart boundaries and part headers.
pub const MULTIPART_OVERHEAD: usize = 1024 * 1024;

/// The only accepted file extension (lowercase, without the dot).
pub const VIDEO_EXTENSION: &str = "mp4";

/// Suffix appended to the generated video id to form the storage key.
pub const VIDEO_KEY_SUFFIX: &str = ".mp4";

/// Content type attached to every stored video.
pub const VIDEO_CONTENT_TYPE: &str = "video/mp4";

/// Multipart field carrying the uploaded file.
pub const UPLOAD_FIELD_NAME: &str = "video";

/// Bucket used when `UPLOAD_BUCKET_NAME` is unset.
pub const DEFAULT_BUCKET_NAME: &str = "video-upload-zoaewe3s";

pub const DEFAULT_PORT: u16 = 3000;

pub const DEFAULT_REGION: &str = "us-east-1";

/// Version reported by `/version`.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Object metadata keys written alongside each video.
pub mod metadata_keys {
    pub const ORIGINAL_FILENAME: &str = "original-filename";
    pub const UPLOAD_TIME: &str = "upload-time";
    pub const FILE_SIZE: &str = "file-size";
}
