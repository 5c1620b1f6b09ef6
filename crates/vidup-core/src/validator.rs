use crate::constants::{MAX_UPLOAD_SIZE, VIDEO_EXTENSION};
use crate::error::AppError;

/// Validation errors for uploaded files
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("Invalid file extension: {filename} (allowed: {allowed})")]
    InvalidExtension {
        filename: String,
        allowed: &'static str,
    },
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::FileTooLarge { size, max } => AppError::PayloadTooLarge { size, max },
            ValidationError::InvalidExtension { filename, .. } => {
                AppError::InvalidFileType { filename }
            }
        }
    }
}

/// Upload validator
///
/// Advisory pre-filter run before any bytes reach storage. It looks at the
/// client-supplied filename and the received size only; content is never
/// inspected, so a mislabeled file passes.
#[derive(Debug, Clone)]
pub struct UploadValidator {
    max_file_size: usize,
}

impl Default for UploadValidator {
    fn default() -> Self {
        Self::new(MAX_UPLOAD_SIZE)
    }
}

impl UploadValidator {
    pub fn new(max_file_size: usize) -> Self {
        Self { max_file_size }
    }

    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    /// Validate file size. The ceiling itself is accepted.
    pub fn validate_size(&self, size: usize) -> Result<(), ValidationError> {
        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }
        Ok(())
    }

    /// Validate file extension (case-insensitive `.mp4`)
    pub fn validate_extension(&self, filename: &str) -> Result<(), ValidationError> {
        // Text after the last dot of whatever follows the last `/`. A trailing
        // `/` leaves an empty tail and therefore no extension.
        let tail = filename.rsplit('/').next().unwrap_or(filename);
        let extension = tail.rsplit_once('.').map(|(_, ext)| ext.to_lowercase());

        match extension {
            Some(ext) if ext == VIDEO_EXTENSION => Ok(()),
            _ => Err(ValidationError::InvalidExtension {
                filename: filename.to_string(),
                allowed: VIDEO_EXTENSION,
            }),
        }
    }

    /// Size first, then extension.
    pub fn validate(&self, filename: &str, size: usize) -> Result<(), ValidationError> {
        self.validate_size(size)?;
        self.validate_extension(filename)?;
        Ok(())
    }
}
