//! # Logging
//!
//! `tracing` subscriber setup for the console binary.
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: filter directive (default `console=info,warn`)
//! - `CONSOLE_LOG_DIR`: directory for the daily-rotated log (default `logs`)
//! - `CONSOLE_LOG_STDERR=1`: also log to stderr
//!
//! ## Usage
//!
//! ```rust,no_run
//! use console::debug::{logger, LogConfig};
//!
//! let _guard = logger::init(&LogConfig::from_env());
//! tracing::info!("console started");
//! ```

pub mod config;
pub mod logger;

pub use config::LogConfig;
