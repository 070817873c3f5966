//! Session Token
//!
//! Cookie value format: `<session uuid>.<base64url(HMAC-SHA256(uuid))>`.

use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Sign a session id for the cookie
pub fn issue(config: &AuthConfig, session_id: Uuid) -> AuthResult<String> {
    platform::crypto::sign_token(&config.session_secret, &session_id.to_string())
        .map_err(|e| AuthError::Internal(format!("Session signing key rejected: {e}")))
}

/// Verify the signature and recover the session id
pub fn parse(config: &AuthConfig, token: &str) -> AuthResult<Uuid> {
    platform::crypto::verify_token(&config.session_secret, token)
        .and_then(|id| id.parse().ok())
        .ok_or(AuthError::SessionInvalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_parse() {
        let config = AuthConfig::development();
        let id = Uuid::new_v4();
        let token = issue(&config, id).unwrap();
        assert_eq!(parse(&config, &token).unwrap(), id);
    }

    #[test]
    fn test_other_secret_rejected() {
        let token = issue(&AuthConfig::development(), Uuid::new_v4()).unwrap();
        assert!(matches!(
            parse(&AuthConfig::development(), &token),
            Err(AuthError::SessionInvalid)
        ));
    }

    #[test]
    fn test_signed_non_uuid_rejected() {
        let config = AuthConfig::development();
        let token = platform::crypto::sign_token(&config.session_secret, "not-a-uuid").unwrap();
        assert!(parse(&config, &token).is_err());
    }

    #[test]
    fn test_token_shape_and_tamper_rejection() {
        let config = AuthConfig {
            session_secret: [0x0b; 32],
            ..AuthConfig::default()
        };
        let id = Uuid::nil();
        let token = issue(&config, id).unwrap();

        let (payload, signature) = token.split_once('.').unwrap();
        assert_eq!(payload, id.to_string());
        // 32-byte MAC, base64url without padding
        assert_eq!(signature.len(), 43);
        assert!(!signature.contains('='));

        let flipped = if signature.starts_with('A') { 'B' } else { 'A' };
        let tampered = format!("{payload}.{flipped}{}", &signature[1..]);
        assert!(matches!(parse(&config, &tampered), Err(AuthError::SessionInvalid)));
    }
}
