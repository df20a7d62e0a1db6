//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use admin::{AdminConfig, GithubConfig, GithubContentRepository, admin_router};
use axum::{
    Json, Router, http,
    http::{Method, header},
    routing::get,
};
use kernel::error::app_error::AppError;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,admin=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Session / auth configuration
    let session_ttl_secs = env::var("SESSION_TTL_SECONDS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(28800);

    let admin_config = AdminConfig {
        admin_password: env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set"),
        session_secret: env::var("SESSION_SECRET")
            .expect("SESSION_SECRET must be set")
            .into_bytes(),
        session_ttl: Duration::from_secs(session_ttl_secs),
        ..AdminConfig::default()
    };

    // Content repository coordinates
    let github_config = GithubConfig::new(
        env::var("GITHUB_TOKEN").expect("GITHUB_TOKEN must be set"),
        env::var("GITHUB_OWNER").expect("GITHUB_OWNER must be set"),
        env::var("GITHUB_REPO").expect("GITHUB_REPO must be set"),
        env::var("CONTENT_PATH").unwrap_or_else(|_| "content.json".to_string()),
        env::var("GITHUB_BRANCH").unwrap_or_else(|_| "main".to_string()),
    );
    let repo = GithubContentRepository::new(github_config)?;

    // CORS configuration: origins outside the allow-list receive no
    // CORS headers at all, so the browser blocks the response
    let allowed = env::var("ALLOWED_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:8788,http://127.0.0.1:8788".to_string());

    let allowed_origins: Vec<http::HeaderValue> = allowed
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .nest("/admin", admin_router(repo, admin_config))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8787);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

/// Any unknown method/path
async fn not_found() -> AppError {
    AppError::not_found("Not found")
}
