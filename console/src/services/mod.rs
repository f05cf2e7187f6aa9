//! # Services
//!
//! External integrations.
//!
//! - **[`api`]**: Skynet API client (request pipeline, error classification)
//! - **[`headless`]**: `Notifier`/`Page` implementations that write to the log,
//!   used when no UI is attached

pub mod api;
pub mod headless;
