//! Client configuration

use std::path::PathBuf;
use std::time::Duration;

/// Default API base URL
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to the admin API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "https://toko.example.com/api")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Directory holding the stored session
    pub credential_dir: PathBuf,

    /// Log level for [`crate::logger::init_logger`]
    pub log_level: String,

    /// JSON log output
    pub log_json: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
            credential_dir: PathBuf::from("./.mebel"),
            log_level: "info".into(),
            log_json: false,
        }
    }

    /// Read configuration from environment variables
    ///
    /// | Variable                     | Default                     |
    /// |------------------------------|-----------------------------|
    /// | `MEBEL_API_URL`              | `http://localhost:8000/api` |
    /// | `MEBEL_REQUEST_TIMEOUT_SECS` | `30`                        |
    /// | `MEBEL_CREDENTIAL_DIR`       | `./.mebel`                  |
    /// | `LOG_LEVEL`                  | `info`                      |
    /// | `LOG_JSON`                   | `false`                     |
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("MEBEL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into()),
            timeout: std::env::var("MEBEL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            credential_dir: std::env::var("MEBEL_CREDENTIAL_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./.mebel")),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    /// Load `.env` (if present) and then read the environment
    pub fn load() -> Self {
        if let Err(e) = dotenvy::dotenv()
            && !e.not_found()
        {
            tracing::warn!(error = %e, "Failed to read .env file");
        }
        Self::from_env()
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the credential directory
    pub fn with_credential_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.credential_dir = dir.into();
        self
    }

    /// Set the log level and format
    pub fn with_logging(mut self, level: impl Into<String>, json: bool) -> Self {
        self.log_level = level.into();
        self.log_json = json;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.credential_dir, PathBuf::from("./.mebel"));
        assert!(!config.log_json);
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("https://toko.example.com/api")
            .with_timeout(5)
            .with_credential_dir("/tmp/mebel")
            .with_logging("debug", true);
        assert_eq!(config.timeout, 5);
        assert_eq!(config.credential_dir, PathBuf::from("/tmp/mebel"));
        assert_eq!(config.log_level, "debug");
        assert!(config.log_json);
    }
}
