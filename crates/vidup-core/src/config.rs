//! Configuration module
//!
//! Configuration is read once at startup and handed to the storage client and
//! the HTTP handlers through application state. Nothing reads the process
//! environment after [`Config::from_env`] returns.

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_BUCKET_NAME, DEFAULT_PORT, DEFAULT_REGION, MAX_UPLOAD_SIZE};
use crate::storage_types::StorageBackend;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    /// Emit logs with the JSON formatter instead of compact console output.
    pub log_json: bool,
    // Storage configuration
    pub storage_backend: StorageBackend,
    pub upload_bucket: String,
    pub aws_region: String,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO, etc.)
    /// Upload ceiling in bytes. Fixed, not read from the environment.
    pub max_upload_size: usize,
    /// `.env` file that was loaded at startup, if any.
    pub env_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            environment: "development".to_string(),
            log_json: false,
            storage_backend: StorageBackend::S3,
            upload_bucket: DEFAULT_BUCKET_NAME.to_string(),
            aws_region: DEFAULT_REGION.to_string(),
            s3_endpoint: None,
            max_upload_size: MAX_UPLOAD_SIZE,
            env_file: None,
        }
    }
}

impl Config {
    /// Load `.env` (if present) and build the configuration from the process environment.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let env_file = dotenvy::dotenv().ok();
        let mut config = Self::from_lookup(|key| env::var(key).ok())?;
        config.env_file = env_file;
        Ok(config)
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let server_port = match non_empty("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            None => DEFAULT_PORT,
        };

        let environment = non_empty("ENVIRONMENT")
            .or_else(|| non_empty("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let storage_backend = match non_empty("STORAGE_BACKEND") {
            Some(backend) => backend.parse()?,
            None => StorageBackend::S3,
        };

        let log_json = non_empty("LOG_FORMAT")
            .map(|f| f.trim().eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let config = Config {
            server_port,
            environment,
            log_json,
            storage_backend,
            upload_bucket: non_empty("UPLOAD_BUCKET_NAME")
                .unwrap_or_else(|| DEFAULT_BUCKET_NAME.to_string()),
            aws_region: non_empty("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            s3_endpoint: non_empty("S3_ENDPOINT"),
            max_upload_size: MAX_UPLOAD_SIZE,
            env_file: None,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.server_port == 0 {
            return Err(anyhow::anyhow!("PORT must be greater than 0"));
        }
        if self.upload_bucket.trim().is_empty() {
            return Err(anyhow::anyhow!("UPLOAD_BUCKET_NAME must not be empty"));
        }
        if self.max_upload_size == 0 {
            return Err(anyhow::anyhow!("max upload size must be greater than 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, anyhow::Error> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.upload_bucket, "video-upload-zoaewe3s");
        assert_eq!(config.aws_region, "us-east-1");
        assert_eq!(config.storage_backend, StorageBackend::S3);
        assert_eq!(config.max_upload_size, 100 * 1024 * 1024);
        assert!(config.s3_endpoint.is_none());
        assert!(!config.log_json);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_reads_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("UPLOAD_BUCKET_NAME", "my-videos"),
            ("STORAGE_BACKEND", "memory"),
            ("S3_ENDPOINT", "http://localhost:9000"),
            ("LOG_FORMAT", "JSON"),
            ("ENVIRONMENT", "production"),
        ])
        .unwrap();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.upload_bucket, "my-videos");
        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert_eq!(config.s3_endpoint.as_deref(), Some("http://localhost:9000"));
        assert!(config.log_json);
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_empty_bucket_falls_back_to_default() {
        let config = config_from(&[("UPLOAD_BUCKET_NAME", "")]).unwrap();
        assert_eq!(config.upload_bucket, "video-upload-zoaewe3s");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(config_from(&[("PORT", "not-a-port")]).is_err());
        assert!(config_from(&[("PORT", "0")]).is_err());
    }

    #[test]
    fn test_max_upload_size_ignores_environment() {
        let config = config_from(&[("MAX_UPLOAD_SIZE", "1")]).unwrap();
        assert_eq!(config.max_upload_size, MAX_UPLOAD_SIZE);
    }
}
