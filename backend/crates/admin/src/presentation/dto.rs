//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::content::ContentRecord;

// ============================================================================
// Login
// ============================================================================

/// Login request
///
/// Defaulted when the body is missing or malformed; an absent password
/// is simply a wrong password.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub password: String,
}

/// Generic success response
#[derive(Debug, Clone, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl Default for OkResponse {
    fn default() -> Self {
        Self { ok: true }
    }
}

// ============================================================================
// Session Status
// ============================================================================

/// Session status response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
}

// ============================================================================
// Content
// ============================================================================

/// Content read/write response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentResponse {
    pub content: ContentRecord,
}

/// Content update request
///
/// `content` is taken as-is and normalized against the schema; a
/// missing or malformed body degrades to the field defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContentRequest {
    #[serde(default)]
    pub content: Value,
}
