//! # Data Transfer Objects (DTOs)
//!
//! Structures exchanged with the Skynet API server.
//!
//! ## Module Organization
//!
//! - [`envelope`] - The `{ code, info, data }` wrapper around every response body
//! - [`auth`] - Sign-in arguments and the authenticated user
//! - [`system`] - Startup probe results
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/user/sign-in
//! Content-Type: application/json
//!
//! { "name": "admin", "password": "secret" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "code": 0,
//!   "data": { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...", "id": "1", "name": "Admin" }
//! }
//! ```
//!
//! A failed call keeps the same shape, with `info` describing the failure:
//!
//! ```text
//! HTTP/1.1 500 Internal Server Error
//!
//! { "code": 1001, "info": "task not found" }
//! ```

pub mod auth;
pub mod envelope;
pub mod system;

pub use auth::*;
pub use envelope::*;
pub use system::*;
