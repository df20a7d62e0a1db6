//! Admin Backend Module
//!
//! Password-protected editing backend for the portfolio site. Edits are
//! committed as a JSON file into a version-controlled content repository,
//! which republishes the static site.
//!
//! Clean Architecture structure:
//! - `domain/` - Content schema, session tokens, repository trait
//! - `application/` - Use cases and application services
//! - `infra/` - GitHub contents API implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Stateless login: HMAC-signed, time-boxed session cookie, no
//!   server-side session storage
//! - Content read/write/reset against the content repository with
//!   optimistic concurrency (version-token precondition on every write)
//!
//! ## Security Model
//! - Single shared admin password, compared in constant time
//! - Session tokens verified with constant-time MAC comparison
//! - Guarded routes short-circuit 401 before any repository access

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AdminConfig;
pub use error::{AdminError, AdminResult};
pub use infra::github::{GithubConfig, GithubContentRepository};
pub use presentation::router::{admin_router, admin_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
    pub use crate::infra::github::GithubConfig;
}

pub mod models {
    pub use crate::domain::content::*;
    pub use crate::domain::repository::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
