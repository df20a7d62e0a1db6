//! Access Gate Middleware
//!
//! The single authorization check in the system: guarded routes verify
//! the session cookie and short-circuit with 401 before any repository
//! access. Binary authenticated/unauthenticated, no roles.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AdminConfig;
use crate::error::AdminError;

/// Middleware that requires a valid session cookie
pub async fn require_session(
    State(config): State<Arc<AdminConfig>>,
    req: Request,
    next: Next,
) -> Response {
    let token = platform::cookie::extract_cookie(req.headers(), &config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(config.clone());
    let session_valid = token.map(|t| use_case.is_valid(&t)).unwrap_or(false);

    if !session_valid {
        return AdminError::Unauthorized.into_response();
    }

    next.run(req).await
}
