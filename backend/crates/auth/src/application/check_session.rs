//! Check Session Use Case
//!
//! Resolves a cookie token to the session user.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::entity::auth_session::SessionUser;
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Return the session user, or `SessionInvalid`
    ///
    /// Expired sessions are deleted on sight.
    pub async fn execute(&self, session_token: &str) -> AuthResult<SessionUser> {
        let session_id = session_token::parse(&self.config, session_token)?;

        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            tracing::debug!(session_id = %session_id, "Expired session removed");
            return Err(AuthError::SessionInvalid);
        }

        Ok(session.user)
    }
}
