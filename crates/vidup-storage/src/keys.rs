//! Storage key checks shared by backends.

use crate::{StorageError, StorageResult};

/// Reject keys that are empty, contain `..`, or start with `/`.
pub fn validate_key(storage_key: &str) -> StorageResult<()> {
    if storage_key.is_empty() || storage_key.contains("..") || storage_key.starts_with('/') {
        return Err(StorageError::InvalidKey(storage_key.to_string()));
    }
    Ok(())
}
