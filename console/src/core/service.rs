//! # Service Traits
//!
//! Capabilities the console core depends on but does not implement itself.
//! Production code wires real implementations (the `reqwest` transport, the
//! [`crate::router::Router`]); tests substitute recording fakes.

use std::time::Duration;

use async_trait::async_trait;

use crate::services::api::transport::{HttpRequest, HttpResponse, TransportError};

/// Sends a fully prepared request and returns whatever the server answered.
///
/// Any HTTP status counts as a response; `Err` means no response was received.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Moves the application to another location.
pub trait Navigator: Send + Sync {
    /// Navigate to `target`, a full path such as `/login?redirect=%2Ftasks`.
    fn push(&self, target: &str);

    /// Full path (path, query and hash) of the current location.
    fn current_full_path(&self) -> String;
}

/// Transient user-facing messages.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str, duration: Duration);
}

/// Page chrome touched by the navigation guard.
pub trait Page: Send + Sync {
    fn set_title(&self, title: &str);

    fn start_loading(&self);

    fn finish_loading(&self);

    /// Scroll the element identified by `anchor` (e.g. `#schedule`) into view
    /// once the next frame has been painted.
    fn scroll_into_view_after_paint(&self, anchor: &str);
}
