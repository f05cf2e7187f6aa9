//! # Skynet API Client Module
//!
//! The authenticated request pipeline and the few endpoints the console core
//! calls itself.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports
//! ├── client.rs     - ApiClient: credentials, token rotation, failure handling
//! ├── classifier.rs - Failure → recovery + disposition
//! ├── transport.rs  - HttpRequest/HttpResponse and the reqwest transport
//! ├── user.rs       - Sign-in / sign-out
//! └── system.rs     - Startup probe
//! ```

pub mod classifier;
pub mod client;
pub mod system;
pub mod transport;
pub mod user;

pub use classifier::{classify, Disposition, Recovery, Verdict};
pub use client::{ApiClient, Outcome};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, TransportError};
