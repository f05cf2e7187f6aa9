//! # Common Error Types
//!
//! Consolidated error handling for the console.
//!
//! ## Error Categories
//!
//! - **[`ApiError`]**: a failed API exchange, classified by how it failed
//!   (no response, 401, 403, 500, any other status, undecodable body)
//! - **[`StorageError`]**: durable session storage could not be read or written
//! - **[`AppError`]**: crate-level error wrapping the above plus configuration
//!   and navigation failures
//!
//! ## Which errors reach calling code
//!
//! Only some [`ApiError`] variants are ever returned by the request pipeline.
//! `TransportUnreachable`, `Unauthenticated` and `Forbidden` are handled by the
//! pipeline itself (notification or redirect) and the call never completes; see
//! [`crate::services::api::classifier`]. Callers match on `ServerFault`,
//! `OtherHttpFailure` and `Decode`.

use std::fmt;

use reqwest::StatusCode;
use serde_json::Value;
use shared::ResponseEnvelope;
use thiserror::Error;

pub use crate::session::storage::StorageError;

/// Detail of a failed HTTP exchange, as observed by the pipeline.
///
/// `status` is `None` when no response was received at all (connection
/// refused, DNS failure, timeout). `body` holds the decoded envelope when the
/// server sent one.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpFailure {
    pub status: Option<StatusCode>,
    pub message: String,
    pub body: Option<ResponseEnvelope<Value>>,
}

impl HttpFailure {
    /// Failure without any transport response.
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
            body: None,
        }
    }

    /// Failure with a non-success status; `body` is decoded leniently.
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        Self {
            status: Some(status),
            message: format!("Request failed with status code {}", status.as_u16()),
            body: serde_json::from_slice(body).ok(),
        }
    }
}

impl fmt::Display for HttpFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A failed API call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No response was received (network failure or timeout).
    #[error("Network error: {0}")]
    TransportUnreachable(HttpFailure),

    /// The server answered 401; the session is no longer valid.
    #[error("Unauthenticated: {0}")]
    Unauthenticated(HttpFailure),

    /// The server answered 403.
    #[error("Forbidden: {0}")]
    Forbidden(HttpFailure),

    /// The server answered 500. `code`/`info` come from the body envelope.
    #[error("Server error: {0}")]
    ServerFault(HttpFailure),

    /// Any other non-success status.
    #[error("HTTP error: {0}")]
    OtherHttpFailure(HttpFailure),

    /// The request body or query could not be encoded.
    #[error("Failed to encode request: {0}")]
    Encode(String),

    /// A success response did not contain a valid envelope.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The exchange detail, for variants produced by a failed exchange.
    pub fn failure(&self) -> Option<&HttpFailure> {
        match self {
            ApiError::TransportUnreachable(f)
            | ApiError::Unauthenticated(f)
            | ApiError::Forbidden(f)
            | ApiError::ServerFault(f)
            | ApiError::OtherHttpFailure(f) => Some(f),
            ApiError::Encode(_) | ApiError::Decode(_) => None,
        }
    }

    /// HTTP status of the failed exchange, if a response was received.
    pub fn status(&self) -> Option<StatusCode> {
        self.failure().and_then(|f| f.status)
    }

    /// Domain code from the body envelope, if any.
    pub fn code(&self) -> Option<i32> {
        self.failure()
            .and_then(|f| f.body.as_ref())
            .map(|body| body.code)
    }
}

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Navigation error: {0}")]
    Navigation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
