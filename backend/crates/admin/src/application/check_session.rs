//! Check Session Use Case
//!
//! Verifies a session token. Stateless: validity is recomputed from the
//! token itself, no lookup is involved.

use std::sync::Arc;

use crate::application::config::AdminConfig;
use crate::domain::session::{now_ms, verify_token};

/// Check session use case
pub struct CheckSessionUseCase {
    config: Arc<AdminConfig>,
}

impl CheckSessionUseCase {
    pub fn new(config: Arc<AdminConfig>) -> Self {
        Self { config }
    }

    /// Whether the token is authentic and unexpired. Never errors.
    pub fn is_valid(&self, token: &str) -> bool {
        verify_token(token, &self.config.session_secret, now_ms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::issue_session::IssueSessionUseCase;

    #[test]
    fn test_issued_token_checks_valid() {
        let config = Arc::new(AdminConfig {
            admin_password: "pw".to_string(),
            ..AdminConfig::with_random_secret()
        });

        let token = IssueSessionUseCase::new(config.clone())
            .execute("pw")
            .unwrap()
            .token;

        let use_case = CheckSessionUseCase::new(config);
        assert!(use_case.is_valid(&token));
        assert!(!use_case.is_valid("garbage"));
        assert!(!use_case.is_valid(""));
    }

    #[test]
    fn test_token_from_other_secret_is_invalid() {
        let config_a = Arc::new(AdminConfig {
            admin_password: "pw".to_string(),
            ..AdminConfig::with_random_secret()
        });
        let config_b = Arc::new(AdminConfig {
            admin_password: "pw".to_string(),
            ..AdminConfig::with_random_secret()
        });

        let token = IssueSessionUseCase::new(config_a)
            .execute("pw")
            .unwrap()
            .token;

        assert!(!CheckSessionUseCase::new(config_b).is_valid(&token));
    }
}
