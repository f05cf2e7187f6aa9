//! # Session Store
//!
//! Process-wide session state: bearer token, display name, UI theme.
//!
//! ## Lifecycle
//!
//! ```text
//!            hydrate (process start)
//!                    │
//!                    ▼
//!   ┌──────────── anonymous ◄───────────┐
//!   │ login(name, token)                │ logout()
//!   ▼                                   │
//! authenticated ── rotate_token(t) ─────┤ (stays authenticated)
//!                                       │
//! set_theme(t) is independent of both states
//! ```
//!
//! Every mutator writes storage before updating memory and both happen under
//! the same write lock, so readers never observe a value that is not durable.
//! Concurrent writers are last-write-wins.

use std::sync::Arc;

use parking_lot::RwLock;

use super::storage::Storage;

const KEY_NAME: &str = "name";
const KEY_TOKEN: &str = "token";
const KEY_THEME: &str = "theme";

/// Snapshot of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub name: Option<String>,
    pub theme: Option<String>,
}

impl Session {
    /// `true` iff there is no token.
    pub fn is_anonymous(&self) -> bool {
        self.token.is_none()
    }
}

/// Shared handle to the session. Cloning is cheap; clones share state.
#[derive(Clone)]
pub struct SessionStore {
    state: Arc<RwLock<Session>>,
    storage: Arc<dyn Storage>,
}

impl SessionStore {
    /// Load the session persisted in `storage`.
    pub fn hydrate(storage: Arc<dyn Storage>) -> Self {
        let session = Session {
            token: non_empty(storage.get(KEY_TOKEN)),
            name: non_empty(storage.get(KEY_NAME)),
            theme: non_empty(storage.get(KEY_THEME)),
        };

        tracing::info!(
            anonymous = session.is_anonymous(),
            name = session.name.as_deref().unwrap_or(""),
            "Session hydrated"
        );

        Self {
            state: Arc::new(RwLock::new(session)),
            storage,
        }
    }

    pub fn read(&self) -> Session {
        self.state.read().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.read().token.clone()
    }

    pub fn is_anonymous(&self) -> bool {
        self.state.read().is_anonymous()
    }

    pub fn login(&self, name: &str, token: &str) {
        let mut state = self.state.write();
        self.persist(KEY_NAME, Some(name));
        self.persist(KEY_TOKEN, Some(token));
        state.name = non_empty(Some(name.to_string()));
        state.token = non_empty(Some(token.to_string()));
        tracing::info!(name = %name, "Signed in");
    }

    pub fn logout(&self) {
        let mut state = self.state.write();
        self.persist(KEY_NAME, None);
        self.persist(KEY_TOKEN, None);
        let was_signed_in = state.token.take().is_some();
        state.name = None;
        if was_signed_in {
            tracing::info!("Signed out");
        }
    }

    /// Replace the token with one issued by the server. Name is untouched.
    pub fn rotate_token(&self, token: &str) {
        let mut state = self.state.write();
        self.persist(KEY_TOKEN, Some(token));
        state.token = non_empty(Some(token.to_string()));
        tracing::debug!("Session token rotated");
    }

    pub fn set_theme(&self, theme: &str) {
        let mut state = self.state.write();
        self.persist(KEY_THEME, Some(theme));
        state.theme = non_empty(Some(theme.to_string()));
    }

    // Mutators are total: a failed write is logged and the in-memory update
    // still happens.
    fn persist(&self, key: &str, value: Option<&str>) {
        let result = match value.filter(|v| !v.is_empty()) {
            Some(value) => self.storage.set(key, value),
            None => self.storage.remove(key),
        };
        if let Err(e) = result {
            tracing::warn!(key, error = %e, "Failed to persist session field");
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
