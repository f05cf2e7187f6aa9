//! # Shared Wire Types
//!
//! This library defines the contract between the console and the Skynet API
//! server. Every endpoint answers with a [`ResponseEnvelope`]; the DTOs carried
//! inside it live in [`dto`].
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::envelope`]**: The uniform `{ code, info, data }` result wrapper
//!   - **[`dto::auth`]**: Sign-in request and authenticated user
//!   - **[`dto::system`]**: System state probe
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names are **snake_case** on both sides
//! - Optional fields are omitted from JSON when `None`
//! - Missing optional fields decode as `None`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::envelope::ResponseEnvelope;
//! use shared::dto::system::SystemState;
//!
//! let body = r#"{ "code": 0, "data": { "fresh": true } }"#;
//! let envelope: ResponseEnvelope<SystemState> = serde_json::from_str(body).unwrap();
//! assert_eq!(envelope.data, Some(SystemState { fresh: true }));
//! ```

pub mod dto;

pub use dto::*;
