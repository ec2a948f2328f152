//! Configuration module
//!
//! Server, storage and upload settings, read from the environment at startup.

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_MAX_UPLOAD_BYTES, RESERVED_ROUTE_SEGMENTS};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_PUBLIC_PATH: &str = "/uploads";
const HTTP_CONCURRENCY_LIMIT: usize = 1024;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    /// Flat directory all blobs are written to.
    pub upload_dir: PathBuf,
    /// URL prefix the blob directory is served under.
    pub upload_public_path: String,
    pub max_upload_bytes: u64,
    pub http_concurrency_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = environment_from_env();

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_upload_bytes = max_upload_bytes_from(env::var("MAX_UPLOAD_SIZE_MB").ok())?;

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            environment,
            cors_origins,
            upload_dir: env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string())
                .into(),
            upload_public_path: env::var("UPLOAD_PUBLIC_PATH")
                .unwrap_or_else(|_| DEFAULT_PUBLIC_PATH.to_string()),
            max_upload_bytes,
            http_concurrency_limit: env::var("HTTP_CONCURRENCY_LIMIT")
                .ok()
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(HTTP_CONCURRENCY_LIMIT)
                .max(1),
        };

        config.validate()?;
        Ok(config)
    }

    /// Development defaults rooted at the given upload directory.
    pub fn with_upload_dir(upload_dir: impl Into<PathBuf>) -> Self {
        Config {
            server_port: DEFAULT_PORT,
            environment: "development".to_string(),
            cors_origins: vec!["*".to_string()],
            upload_dir: upload_dir.into(),
            upload_public_path: DEFAULT_PUBLIC_PATH.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            http_concurrency_limit: HTTP_CONCURRENCY_LIMIT,
        }
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.max_upload_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be greater than 0"));
        }

        if self.upload_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("UPLOAD_DIR must not be empty"));
        }

        if !self.upload_public_path.starts_with('/')
            || self.upload_public_path.trim_end_matches('/').is_empty()
        {
            return Err(anyhow::anyhow!(
                "UPLOAD_PUBLIC_PATH must start with '/' and name a sub-path"
            ));
        }

        let first_segment = self
            .upload_public_path
            .trim_start_matches('/')
            .split('/')
            .next()
            .unwrap_or_default();
        if RESERVED_ROUTE_SEGMENTS.contains(&first_segment) {
            return Err(anyhow::anyhow!(
                "UPLOAD_PUBLIC_PATH '{}' collides with an API route (reserved: /{})",
                self.upload_public_path,
                RESERVED_ROUTE_SEGMENTS.join(", /")
            ));
        }

        if self.is_production() && self.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        is_production_environment(&self.environment)
    }
}

/// Environment name from `ENVIRONMENT`, falling back to `APP_ENV`.
pub fn environment_from_env() -> String {
    env::var("ENVIRONMENT")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

pub fn is_production_environment(environment: &str) -> bool {
    let env = environment.to_lowercase();
    env == "production" || env == "prod"
}

/// Parse `MAX_UPLOAD_SIZE_MB`. Unparseable values fall back to the default;
/// values that do not fit in bytes are an error.
fn max_upload_bytes_from(value: Option<String>) -> Result<u64, anyhow::Error> {
    let Some(mb) = value.and_then(|s| s.trim().parse::<u64>().ok()) else {
        return Ok(DEFAULT_MAX_UPLOAD_BYTES);
    };

    mb.checked_mul(1024 * 1024)
        .ok_or_else(|| anyhow::anyhow!("MAX_UPLOAD_SIZE_MB is too large: {}", mb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = Config::with_upload_dir("uploads");
        assert!(config.validate().is_ok());
        assert_eq!(config.max_upload_bytes, 104_857_600);
        assert_eq!(config.server_port, 3000);
        assert!(!config.is_production());
    }

    #[test]
    fn test_validate_rejects_zero_size() {
        let mut config = Config::with_upload_dir("uploads");
        config.max_upload_bytes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_relative_public_path() {
        let mut config = Config::with_upload_dir("uploads");
        config.upload_public_path = "uploads".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_root_public_path() {
        let mut config = Config::with_upload_dir("uploads");
        config.upload_public_path = "//".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_is_production() {
        let mut config = Config::with_upload_dir("uploads");
        config.environment = "Prod".to_string();
        assert!(config.is_production());
    }

    #[test]
    fn test_validate_rejects_wildcard_cors_in_production() {
        let mut config = Config::with_upload_dir("uploads");
        config.environment = "production".to_string();
        assert!(config.validate().is_err());

        config.cors_origins = vec!["https://videos.example.com".to_string()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_public_path_over_api_routes() {
        for path in ["/videos", "/video", "/upload/", "/health", "/docs", "/api/files"] {
            let mut config = Config::with_upload_dir("uploads");
            config.upload_public_path = path.to_string();
            assert!(config.validate().is_err(), "{path} should be rejected");
        }

        let mut config = Config::with_upload_dir("uploads");
        config.upload_public_path = "/media/videos".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_max_upload_size_parsing() {
        assert_eq!(max_upload_bytes_from(None).unwrap(), DEFAULT_MAX_UPLOAD_BYTES);
        assert_eq!(
            max_upload_bytes_from(Some("abc".to_string())).unwrap(),
            DEFAULT_MAX_UPLOAD_BYTES
        );
        assert_eq!(
            max_upload_bytes_from(Some("5".to_string())).unwrap(),
            5 * 1024 * 1024
        );
    }

    #[test]
    fn test_max_upload_size_overflow_is_an_error() {
        let result = max_upload_bytes_from(Some(u64::MAX.to_string()));
        assert!(result.is_err());

        // Largest value that still fits
        let max_mb = u64::MAX / (1024 * 1024);
        assert!(max_upload_bytes_from(Some(max_mb.to_string())).is_ok());
        assert!(max_upload_bytes_from(Some((max_mb + 1).to_string())).is_err());
    }
}
