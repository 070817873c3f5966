//! API DTOs (Data Transfer Objects)
//!
//! Request bodies are read as raw JSON and checked by `domain::schema`.

use serde::Serialize;

use crate::domain::entity::auth_session::{AuthSession, SessionUser};

/// Login response: the session as the client sees it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: SessionUser,
    pub expires_at_ms: i64,
}

impl From<AuthSession> for SessionResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            user: session.user,
            expires_at_ms: session.expires_at_ms,
        }
    }
}

/// `{ "message": ... }`
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
