//! Issue Session Use Case
//!
//! Checks the admin password and signs a fresh stateless session token.

use std::sync::Arc;

use platform::crypto::constant_time_eq;

use crate::application::config::AdminConfig;
use crate::domain::session::{SessionClaims, now_ms, sign_claims};
use crate::error::{AdminError, AdminResult};

/// Issued session token plus the cookie lifetime to attach it with
pub struct IssueSessionOutput {
    pub token: String,
    pub max_age_secs: i64,
}

/// Issue session use case
pub struct IssueSessionUseCase {
    config: Arc<AdminConfig>,
}

impl IssueSessionUseCase {
    pub fn new(config: Arc<AdminConfig>) -> Self {
        Self { config }
    }

    /// Check the supplied password and issue a signed session token.
    ///
    /// Pure given its inputs and the current time; no state is retained
    /// between calls. There is a single account, so the failure message
    /// never distinguishes "wrong password" from anything else.
    pub fn execute(&self, supplied_password: &str) -> AdminResult<IssueSessionOutput> {
        if !self.config.has_secrets() {
            return Err(AdminError::MissingSecrets);
        }

        if !constant_time_eq(
            supplied_password.as_bytes(),
            self.config.admin_password.as_bytes(),
        ) {
            return Err(AdminError::InvalidPassword);
        }

        let ttl_secs = self.config.session_ttl_secs();
        let claims = SessionClaims::expiring_in(ttl_secs, now_ms());
        let token = sign_claims(&claims, &self.config.session_secret);

        tracing::info!("Admin session issued");

        Ok(IssueSessionOutput {
            token,
            max_age_secs: ttl_secs,
        })
    }
}
