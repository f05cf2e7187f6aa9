//! # Router
//!
//! Resolves navigation targets against the [`RouteTable`], runs the
//! [`NavigationGuard`] around each transition and keeps the current location.
//!
//! ## Module Structure
//!
//! ```text
//! router/
//! ├── mod.rs      - Router (sequential navigation driver, Navigator impl)
//! ├── location.rs - Location and target parsing
//! ├── routes.rs   - Route table and matcher
//! └── guard.rs    - Session guard and page hooks
//! ```
//!
//! Navigations are processed one at a time: `push` holds the current-location
//! lock from resolution until the `after` hook has run.

pub mod guard;
pub mod location;
pub mod routes;

use parking_lot::Mutex;

pub use guard::{GuardDecision, GuardState, NavigationGuard};
pub use location::Location;
pub use routes::{Layout, RouteMeta, RouteRecord, RouteTable};

use crate::core::error::{AppError, Result};
use crate::core::service::Navigator;

/// Maximum guard redirects followed for one `push`.
const MAX_REDIRECT_DEPTH: usize = 5;

pub struct Router {
    table: RouteTable,
    guard: NavigationGuard,
    current: Mutex<Option<Location>>,
}

impl Router {
    pub fn new(table: RouteTable, guard: NavigationGuard) -> Self {
        Self {
            table,
            guard,
            current: Mutex::new(None),
        }
    }

    pub fn current(&self) -> Option<Location> {
        self.current.lock().clone()
    }

    pub fn guard(&self) -> &NavigationGuard {
        &self.guard
    }

    /// Navigate to `target`, following guard redirects.
    ///
    /// Returns the committed location.
    pub fn navigate(&self, target: &str) -> Result<Location> {
        let mut current = self.current.lock();
        let mut target = target.to_string();

        for _ in 0..=MAX_REDIRECT_DEPTH {
            let to = self
                .table
                .resolve(&target)
                .ok_or_else(|| AppError::Navigation(format!("no route matches {}", target)))?;

            match self.guard.before(&to, (*current).as_ref()) {
                GuardDecision::Proceed => {
                    let from = (*current).replace(to.clone());
                    self.guard.after(&to, from.as_ref());
                    tracing::debug!(to = %to.full_path, "Navigated");
                    return Ok(to);
                }
                GuardDecision::Redirect(next) => {
                    tracing::debug!(from = %to.full_path, to = %next, "Navigation redirected");
                    target = next;
                }
            }
        }

        self.guard.reset();
        tracing::warn!(to = %target, "Too many redirects, navigation aborted");
        Err(AppError::Navigation(format!(
            "more than {} redirects while navigating to {}",
            MAX_REDIRECT_DEPTH, target
        )))
    }
}

impl Navigator for Router {
    fn push(&self, target: &str) {
        if let Err(e) = self.navigate(target) {
            tracing::warn!(to = target, error = %e, "Navigation failed");
        }
    }

    fn current_full_path(&self) -> String {
        let current = self.current.lock();
        (*current)
            .as_ref()
            .map(|location| location.full_path.clone())
            .unwrap_or_else(|| routes::HOME_PATH.to_string())
    }
}
