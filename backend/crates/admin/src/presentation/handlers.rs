//! HTTP Handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AdminConfig;
use crate::application::{
    CheckSessionUseCase, IssueSessionUseCase, ReadContentUseCase, UPDATE_COMMIT_MESSAGE,
    WriteContentUseCase,
};
use crate::domain::repository::ContentRepository;
use crate::error::AdminResult;
use crate::presentation::dto::{
    ContentResponse, LoginRequest, OkResponse, SessionStatusResponse, UpdateContentRequest,
};

/// Shared state for admin handlers
#[derive(Clone)]
pub struct AdminAppState<R>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AdminConfig>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /admin/login
pub async fn login<R>(
    State(state): State<AdminAppState<R>>,
    body: Bytes,
) -> AdminResult<impl IntoResponse>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
{
    // Malformed bodies degrade to an empty request, not a 400
    let req: LoginRequest = serde_json::from_slice(&body).unwrap_or_default();

    let use_case = IssueSessionUseCase::new(state.config.clone());
    let output = use_case.execute(&req.password)?;

    let cookie = state
        .config
        .cookie()
        .build_set_cookie(&output.token, output.max_age_secs);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(OkResponse::default()),
    ))
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /admin/session
pub async fn session_status<R>(
    State(state): State<AdminAppState<R>>,
    headers: HeaderMap,
) -> Json<SessionStatusResponse>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(state.config.clone());
    let authenticated = token.map(|t| use_case.is_valid(&t)).unwrap_or(false);

    Json(SessionStatusResponse { authenticated })
}

// ============================================================================
// Logout
// ============================================================================

/// POST /admin/logout
///
/// Idempotent: always succeeds and instructs the client to discard the
/// cookie, whether or not a valid session was presented.
pub async fn logout<R>(State(state): State<AdminAppState<R>>) -> impl IntoResponse
where
    R: ContentRepository + Clone + Send + Sync + 'static,
{
    let cookie = state.config.cookie().build_delete_cookie();

    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(OkResponse::default()),
    )
}

// ============================================================================
// Content (guarded routes)
// ============================================================================

/// GET /admin/content
pub async fn get_content<R>(
    State(state): State<AdminAppState<R>>,
) -> AdminResult<Json<ContentResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
{
    let use_case = ReadContentUseCase::new(state.repo.clone());
    let content = use_case.execute().await?;

    Ok(Json(ContentResponse { content }))
}

/// PUT /admin/content
pub async fn put_content<R>(
    State(state): State<AdminAppState<R>>,
    body: Bytes,
) -> AdminResult<Json<ContentResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
{
    let req: UpdateContentRequest = serde_json::from_slice(&body).unwrap_or_default();

    let use_case = WriteContentUseCase::new(state.repo.clone());
    let content = use_case.execute(&req.content, UPDATE_COMMIT_MESSAGE).await?;

    Ok(Json(ContentResponse { content }))
}

/// POST /admin/content/reset
pub async fn reset_content<R>(
    State(state): State<AdminAppState<R>>,
) -> AdminResult<Json<ContentResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
{
    let use_case = WriteContentUseCase::new(state.repo.clone());
    let content = use_case.reset().await?;

    Ok(Json(ContentResponse { content }))
}
