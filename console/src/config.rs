//! # Console Configuration
//!
//! Settings loaded from environment variables at startup and validated
//! before anything is wired, so a misconfigured console fails fast.
//!
//! | Variable                   | Default                     |
//! |----------------------------|-----------------------------|
//! | `CONSOLE_API_BASE_URL`     | `http://127.0.0.1:8001/api` |
//! | `CONSOLE_API_TIMEOUT_SECS` | `10`                        |
//! | `CONSOLE_STATE_FILE`       | `data/console-state.json`   |
//! | `CONSOLE_APP_NAME`         | `Skynet`                    |
//!
//! Logging variables are read separately by [`crate::debug::LogConfig`].

use std::path::PathBuf;
use std::time::Duration;

use lib_utils::envs::{get_env_or, get_env_parse_or};

use crate::core::error::{AppError, Result};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8001/api";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_STATE_FILE: &str = "data/console-state.json";
const DEFAULT_APP_NAME: &str = "Skynet";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Prefix of every API path, e.g. `http://host/api`.
    pub api_base_url: String,
    /// Per-request timeout.
    pub api_timeout: Duration,
    /// File backing the persisted session.
    pub state_file: PathBuf,
    /// Suffix of every page title.
    pub app_name: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            api_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Load and validate configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let config = Self {
            api_base_url: get_env_or("CONSOLE_API_BASE_URL", DEFAULT_BASE_URL),
            api_timeout: Duration::from_secs(get_env_parse_or(
                "CONSOLE_API_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?),
            state_file: PathBuf::from(get_env_or("CONSOLE_STATE_FILE", DEFAULT_STATE_FILE)),
            app_name: get_env_or("CONSOLE_APP_NAME", DEFAULT_APP_NAME),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(AppError::Config("CONSOLE_API_BASE_URL must not be empty".to_string()));
        }
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "CONSOLE_API_BASE_URL must be an http(s) URL, got {}",
                self.api_base_url
            )));
        }
        if self.api_timeout.is_zero() {
            return Err(AppError::Config("CONSOLE_API_TIMEOUT_SECS must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ConsoleConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api_timeout, Duration::from_secs(10));
        assert_eq!(config.app_name, "Skynet");
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = ConsoleConfig {
            api_timeout: Duration::ZERO,
            ..ConsoleConfig::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_rejects_bad_base_url() {
        for url in ["", "   ", "ftp://host/api"] {
            let config = ConsoleConfig {
                api_base_url: url.to_string(),
                ..ConsoleConfig::default()
            };
            assert!(config.validate().is_err(), "{url:?} should be rejected");
        }
    }
}
