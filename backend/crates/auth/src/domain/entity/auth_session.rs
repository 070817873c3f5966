//! Auth Session Entity
//!
//! An authenticated session held in the session store and referenced by a
//! signed cookie token.

use chrono::{Duration, Utc};
use kernel::id::UserId;
use serde::Serialize;
use uuid::Uuid;

/// Identity carried by a session and handed to handlers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionUser {
    pub id: UserId,
    pub name: String,
}

/// Auth session entity
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    pub user: SessionUser,
    /// Unix timestamp ms
    pub expires_at_ms: i64,
}

impl AuthSession {
    /// Create a session that expires `ttl` from now
    pub fn new(user: SessionUser, ttl: Duration) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            user,
            expires_at_ms: (Utc::now() + ttl).timestamp_millis(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp_millis())
    }

    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> SessionUser {
        SessionUser {
            id: UserId::from_db(1),
            name: "Alice".to_string(),
        }
    }

    #[test]
    fn test_new_session_lifetime() {
        let before = Utc::now().timestamp_millis();
        let session = AuthSession::new(alice(), Duration::hours(1));
        let after = Utc::now().timestamp_millis();

        assert!(!session.is_expired());
        assert!(session.expires_at_ms >= before + 3_600_000);
        assert!(session.expires_at_ms <= after + 3_600_000);
    }

    #[test]
    fn test_expiry_boundary() {
        let session = AuthSession::new(alice(), Duration::hours(1));
        assert!(!session.is_expired_at(session.expires_at_ms - 1));
        assert!(session.is_expired_at(session.expires_at_ms));
    }

    #[test]
    fn test_zero_ttl_is_expired() {
        let session = AuthSession::new(alice(), Duration::zero());
        assert!(session.is_expired());
    }

    #[test]
    fn test_session_user_serializes_id_as_number() {
        let json = serde_json::to_value(alice()).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 1, "name": "Alice" }));
    }
}
