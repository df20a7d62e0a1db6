//! Application Configuration
//!
//! Configuration for the admin application layer. Threaded into each
//! component at construction time so the core is testable with
//! substitute values.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Admin application configuration
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Shared admin password, compared in constant time
    pub admin_password: String,
    /// Session secret key for HMAC signing (arbitrary length)
    pub session_secret: Vec<u8>,
    /// Session TTL (8 hours by default)
    pub session_ttl: Duration,
    /// Session cookie name
    pub session_cookie_name: String,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy; the admin panel is served from another origin,
    /// so the cookie must travel cross-site
    pub cookie_same_site: SameSite,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            admin_password: String::new(),
            session_secret: Vec::new(),
            session_ttl: Duration::from_secs(8 * 3600), // 8 hours
            session_cookie_name: "session".to_string(),
            cookie_secure: true,
            cookie_same_site: SameSite::None,
        }
    }
}

impl AdminConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            session_secret: platform::crypto::random_bytes(32),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Get session TTL in whole seconds
    pub fn session_ttl_secs(&self) -> i64 {
        self.session_ttl.as_secs() as i64
    }

    /// Whether the secrets required for login are configured
    pub fn has_secrets(&self) -> bool {
        !self.admin_password.is_empty() && !self.session_secret.is_empty()
    }

    /// Cookie configuration for the session cookie
    pub fn cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AdminConfig::default();

        assert_eq!(config.session_ttl, Duration::from_secs(28800));
        assert_eq!(config.session_cookie_name, "session");
        assert!(config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::None);
        assert!(!config.has_secrets());
    }

    #[test]
    fn test_with_random_secret() {
        let config1 = AdminConfig::with_random_secret();
        let config2 = AdminConfig::with_random_secret();

        assert_ne!(config1.session_secret, config2.session_secret);
        assert!(config1.session_secret.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_development_config() {
        let config = AdminConfig::development();
        assert!(!config.cookie_secure);
    }
}
