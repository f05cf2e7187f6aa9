//! Logging configuration from environment variables

use std::path::PathBuf;

use lib_utils::envs::{get_env_flag, get_env_or};

const DEFAULT_FILTER: &str = "console=info,warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log directory (daily rotation happens inside it)
    pub log_dir: PathBuf,
    /// File name prefix of the rotated log
    pub file_prefix: String,
    /// Filter directive (e.g., "console=debug,info")
    pub log_level: String,
    /// Mirror log output to stderr
    pub stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            file_prefix: "console.log".to_string(),
            log_level: DEFAULT_FILTER.to_string(),
            stderr: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    ///
    /// - `CONSOLE_LOG_DIR` (default `logs`)
    /// - `RUST_LOG` (default `console=info,warn`)
    /// - `CONSOLE_LOG_STDERR` (default off)
    pub fn from_env() -> Self {
        Self {
            log_dir: PathBuf::from(get_env_or("CONSOLE_LOG_DIR", "logs")),
            file_prefix: "console.log".to_string(),
            log_level: get_env_or("RUST_LOG", DEFAULT_FILTER),
            stderr: get_env_flag("CONSOLE_LOG_STDERR", false),
        }
    }

    /// Current log file path (today's rotation carries a date suffix)
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(&self.file_prefix)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LogConfig::default();
        assert_eq!(config.log_file(), PathBuf::from("logs/console.log"));
        assert!(!config.is_debug_enabled());
    }

    #[test]
    fn test_debug_detection() {
        let config = LogConfig {
            log_level: "console=debug,warn".to_string(),
            ..LogConfig::default()
        };
        assert!(config.is_debug_enabled());
    }
}
