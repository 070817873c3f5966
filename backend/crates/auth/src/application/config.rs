//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;
use thiserror::Error;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SESSION_SECRET is not valid base64")]
    SecretNotBase64,

    #[error("SESSION_SECRET must decode to 32 bytes (got {0})")]
    SecretLength(usize),
}

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session lifetime (1 hour)
    pub session_ttl: Duration,
    /// Whether to set the Secure cookie attribute
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// How often expired sessions are swept
    pub session_cleanup_interval: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "blog_session".to_string(),
            session_secret: [0u8; 32],
            session_ttl: Duration::from_secs(3600),
            cookie_secure: false,
            cookie_same_site: SameSite::Lax,
            session_cleanup_interval: Duration::from_secs(10 * 60),
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random session secret
    pub fn with_random_secret() -> Self {
        Self {
            session_secret: platform::crypto::random_key(),
            ..Default::default()
        }
    }

    /// Create config for development (random secret, insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Create config with a base64-encoded 32-byte secret
    pub fn with_secret_base64(raw: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            session_secret: parse_secret(raw)?,
            ..Default::default()
        })
    }

    /// Get session TTL in milliseconds
    pub fn session_ttl_ms(&self) -> i64 {
        self.session_ttl.as_millis() as i64
    }

    /// Get session TTL as a chrono duration
    pub fn session_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(self.session_ttl_ms())
    }

    /// Cookie attributes for the session cookie
    pub fn cookie(&self) -> CookieConfig {
        CookieConfig::session(&self.session_cookie_name, self.session_ttl.as_secs() as i64)
            .with_secure(self.cookie_secure)
            .with_same_site(self.cookie_same_site)
    }
}

fn parse_secret(raw: &str) -> Result<[u8; 32], ConfigError> {
    let bytes =
        platform::crypto::from_base64(raw.trim()).map_err(|_| ConfigError::SecretNotBase64)?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| ConfigError::SecretLength(len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.session_cookie_name, "blog_session");
        assert_eq!(config.session_ttl_ms(), 3_600_000);
        assert!(!config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::Lax);
    }

    #[test]
    fn test_random_secrets_differ() {
        assert_ne!(
            AuthConfig::development().session_secret,
            AuthConfig::development().session_secret
        );
    }

    #[test]
    fn test_secret_base64() {
        let encoded = platform::crypto::to_base64(&[9u8; 32]);
        let config = AuthConfig::with_secret_base64(&encoded).unwrap();
        assert_eq!(config.session_secret, [9u8; 32]);

        assert_eq!(
            AuthConfig::with_secret_base64("%%%").unwrap_err(),
            ConfigError::SecretNotBase64
        );
        let short = platform::crypto::to_base64(&[1u8; 16]);
        assert_eq!(
            AuthConfig::with_secret_base64(&short).unwrap_err(),
            ConfigError::SecretLength(16)
        );
    }

    #[test]
    fn test_cookie_matches_config() {
        let cookie = AuthConfig::default().cookie().build_set_cookie("t");
        assert!(cookie.starts_with("blog_session=t"));
        assert!(cookie.contains("Max-Age=3600"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(!cookie.contains("Secure"));
    }
}
