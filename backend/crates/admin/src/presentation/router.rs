//! Admin Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AdminConfig;
use crate::domain::repository::ContentRepository;
use crate::infra::github::GithubContentRepository;
use crate::presentation::handlers::{self, AdminAppState};
use crate::presentation::middleware::require_session;

/// Create the admin router backed by the GitHub content repository
pub fn admin_router(repo: GithubContentRepository, config: AdminConfig) -> Router {
    admin_router_generic(repo, config)
}

/// Create a generic admin router for any repository implementation
pub fn admin_router_generic<R>(repo: R, config: AdminConfig) -> Router
where
    R: ContentRepository + Clone + Send + Sync + 'static,
{
    let state = AdminAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let open = Router::new()
        .route("/login", post(handlers::login::<R>))
        .route("/session", get(handlers::session_status::<R>))
        .route("/logout", post(handlers::logout::<R>));

    // Guarded routes short-circuit 401 before any repository access
    let guarded = Router::new()
        .route(
            "/content",
            get(handlers::get_content::<R>).put(handlers::put_content::<R>),
        )
        .route("/content/reset", post(handlers::reset_content::<R>))
        .route_layer(from_fn_with_state(state.config.clone(), require_session));

    open.merge(guarded).with_state(state)
}
