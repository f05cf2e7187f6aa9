//! # Skynet Console Core
//!
//! Session and request plumbing behind the Skynet task-scheduler console:
//!
//! - [`session`]: the signed-in user's credentials, persisted across restarts
//! - [`services::api`]: the request pipeline that attaches credentials,
//!   absorbs rotated tokens and classifies failures
//! - [`router`]: route table, navigation guard and page hooks
//! - [`menu`]: which menu entry to highlight and which groups to expand
//!
//! ## Module Structure
//!
//! ```text
//! src/
//! ├── lib.rs      - Crate root
//! ├── main.rs     - Headless console binary
//! ├── config.rs   - ConsoleConfig (environment)
//! ├── core/       - Errors and capability traits
//! ├── debug/      - Logging setup
//! ├── session/    - SessionStore and storage backends
//! ├── services/   - API client, endpoints, headless UI capabilities
//! ├── router/     - Router, route table, navigation guard
//! └── menu.rs     - Menu tree and resolvers
//! ```

pub mod config;
pub mod core;
pub mod debug;
pub mod menu;
pub mod router;
pub mod services;
pub mod session;

#[cfg(test)]
mod testing;

pub use config::ConsoleConfig;
pub use self::core::{ApiError, AppError, HttpFailure, Result};
pub use menu::{Menu, MenuNode};
pub use router::{Location, NavigationGuard, RouteTable, Router};
pub use services::api::{ApiClient, Outcome};
pub use session::{Session, SessionStore};
