//! Structured request log records
//!
//! One record describes one thing that happened while serving a request: an
//! endpoint was hit, an upload was rejected, a video was stored. Each record
//! is serialized to a single JSON object with three fixed fields (`time`,
//! `level`, `message`) plus whatever context the caller attached, and is
//! emitted as exactly one `tracing` event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use vidup_core::models::to_rfc3339;

/// Target every request record is emitted under.
pub const REQUEST_LOG_TARGET: &str = "vidup::request";

const RESERVED_KEYS: [&str; 3] = ["time", "level", "message"];

/// Severity of a request record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecordLevel {
    Info,
    Warn,
    Error,
}

/// A single structured log record
#[derive(Debug, Clone, Serialize)]
pub struct RequestLog {
    #[serde(serialize_with = "serialize_time")]
    pub time: DateTime<Utc>,
    pub level: RecordLevel,
    pub message: String,
    #[serde(flatten)]
    pub context: BTreeMap<String, Value>,
}

fn serialize_time<S>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&to_rfc3339(*time))
}

impl RequestLog {
    pub fn new(level: RecordLevel, message: impl Into<String>) -> Self {
        Self {
            time: Utc::now(),
            level,
            message: message.into(),
            context: BTreeMap::new(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(RecordLevel::Info, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(RecordLevel::Warn, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(RecordLevel::Error, message)
    }

    /// Attach a context field. Keys that collide with `time`, `level` or
    /// `message` are dropped.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if !RESERVED_KEYS.contains(&key.as_str()) {
            self.context.insert(key, value.into());
        }
        self
    }

    /// Attach the request's `method` and `path`.
    pub fn with_request(self, method: &http::Method, path: &str) -> Self {
        self.with("method", method.as_str()).with("path", path)
    }

    /// Convert to JSON for logging
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Emit the record as one tracing event at its level.
    ///
    /// A record that fails to serialize is dropped; logging never fails a request.
    pub fn emit(&self) {
        let json = match self.to_json_string() {
            Ok(json) => json,
            Err(_) => return,
        };

        match self.level {
            RecordLevel::Info => tracing::info!(target: REQUEST_LOG_TARGET, "{}", json),
            RecordLevel::Warn => tracing::warn!(target: REQUEST_LOG_TARGET, "{}", json),
            RecordLevel::Error => tracing::error!(target: REQUEST_LOG_TARGET, "{}", json),
        }
    }
}
