//! # Session
//!
//! The signed-in user's bearer token, display name and theme, persisted so a
//! restart keeps the user signed in.
//!
//! - [`store`]: [`SessionStore`], the single source of truth for "is there a session"
//! - [`storage`]: durable key/value backends

pub mod storage;
pub mod store;

pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use store::{Session, SessionStore};
