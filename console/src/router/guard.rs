//! # Navigation Guard
//!
//! Hooks run by the [`super::Router`] around every navigation.
//!
//! ```text
//!  Idle ──before()──► Guarding ──┬── session required, none present ──► Denied  (redirect to login)
//!                                └── otherwise ──────────────────────► Allowed (title, start loading)
//!
//!  Allowed/Denied ──after()──► Idle (finish loading, scroll to anchor)
//! ```
//!
//! Navigations within the same path (query or hash changes only) neither start
//! nor finish the loading indicator.

use std::sync::Arc;

use parking_lot::Mutex;

use super::location::Location;
use super::routes::login_redirect;
use crate::core::service::Page;
use crate::session::SessionStore;

/// Guard progress for the navigation being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Idle,
    Guarding,
    Allowed,
    Denied,
}

/// Verdict of [`NavigationGuard::before`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    /// Abort this navigation and go to the given full path instead.
    Redirect(String),
}

pub struct NavigationGuard {
    session: SessionStore,
    page: Arc<dyn Page>,
    app_name: String,
    state: Mutex<GuardState>,
}

impl NavigationGuard {
    pub fn new(session: SessionStore, page: Arc<dyn Page>, app_name: impl Into<String>) -> Self {
        Self {
            session,
            page,
            app_name: app_name.into(),
            state: Mutex::new(GuardState::Idle),
        }
    }

    pub fn state(&self) -> GuardState {
        *self.state.lock()
    }

    pub fn before(&self, to: &Location, from: Option<&Location>) -> GuardDecision {
        self.set_state(GuardState::Guarding);

        if to.requires_session() && self.session.is_anonymous() {
            tracing::info!(to = %to.full_path, "Session required, redirecting to login");
            self.set_state(GuardState::Denied);
            return GuardDecision::Redirect(login_redirect(&to.full_path));
        }

        self.page.set_title(&self.title_for(to));
        if path_changed(to, from) {
            self.page.start_loading();
        }
        self.set_state(GuardState::Allowed);
        GuardDecision::Proceed
    }

    pub fn after(&self, to: &Location, from: Option<&Location>) {
        if path_changed(to, from) {
            self.page.finish_loading();

            let previous_hash = from.map(|f| f.hash.as_str()).unwrap_or_default();
            if !to.hash.is_empty() && to.hash != previous_hash {
                self.page.scroll_into_view_after_paint(&to.hash);
            }
        }
        self.set_state(GuardState::Idle);
    }

    /// Return to `Idle` after a navigation was abandoned without `after`.
    pub(crate) fn reset(&self) {
        self.set_state(GuardState::Idle);
    }

    /// `"<title> - <app>"`, or the app name alone for untitled routes.
    pub fn title_for(&self, to: &Location) -> String {
        match to.meta.title.as_deref() {
            Some(title) if !title.is_empty() => format!("{} - {}", title, self.app_name),
            _ => self.app_name.clone(),
        }
    }

    fn set_state(&self, state: GuardState) {
        *self.state.lock() = state;
    }
}

fn path_changed(to: &Location, from: Option<&Location>) -> bool {
    from.map_or(true, |from| from.path != to.path)
}
