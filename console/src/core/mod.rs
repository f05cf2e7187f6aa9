//! # Core Abstractions
//!
//! Error types and the capability traits the rest of the crate is written
//! against.
//!
//! - **[`error`]**: `ApiError`, `AppError`, `Result<T>`
//! - **[`service`]**: `Transport`, `Navigator`, `Notifier`, `Page`
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use console::core::service::Transport;
//!
//! // In production: the reqwest-backed transport
//! let transport: Arc<dyn Transport> = Arc::new(ReqwestTransport::new(&config)?);
//!
//! // In tests: a scripted transport
//! let transport: Arc<dyn Transport> = Arc::new(MockTransport::new());
//! ```

pub mod error;
pub mod service;

pub use error::{ApiError, AppError, HttpFailure, Result};
pub use service::{Navigator, Notifier, Page, Transport};
