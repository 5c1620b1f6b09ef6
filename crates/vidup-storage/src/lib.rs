//! Vidup Storage Library
//!
//! This crate provides the object store client used by the upload path: the
//! [`VideoStore`] trait and an implementation on top of `object_store` that
//! talks to S3 (or any S3-compatible endpoint) or to an in-memory store.
//!
//! # Storage key format
//!
//! Videos are stored flat at the bucket root as `{video_id}.mp4`. Keys must not
//! be empty, contain `..`, or start with `/`; see the `keys` module.

pub mod factory;
pub(crate) mod keys;
pub mod object;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use object::ObjectVideoStore;
pub use traits::{StorageError, StorageResult, VideoStore};
pub use vidup_core::StorageBackend;
