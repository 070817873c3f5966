//! Sign In Use Case
//!
//! Authenticates a user and creates a session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::run_blocking;
use crate::application::session_token;
use crate::domain::entity::auth_session::{AuthSession, SessionUser};
use crate::domain::entity::user::User;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::schema::LoginInput;
use crate::error::{AuthError, AuthResult};

/// Sign in output
pub struct SignInOutput {
    /// Signed token for the session cookie
    pub session_token: String,
    pub session: AuthSession,
}

/// Sign in use case
pub struct SignInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> SignInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<SignInOutput> {
        let user = self
            .user_repo
            .find_by_email(&input.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let User {
            id, name, password, ..
        } = user;
        let raw = input.password;
        let pepper = self.config.password_pepper.clone();
        let verified = run_blocking(move || password.verify(&raw, pepper.as_deref())).await?;
        if !verified {
            return Err(AuthError::InvalidCredentials);
        }

        let session = AuthSession::new(
            SessionUser {
                id,
                name: name.into_inner(),
            },
            self.config.session_ttl_chrono(),
        );

        let session_token = session_token::issue(&self.config, session.session_id)?;
        self.session_repo.create(&session).await?;

        tracing::info!(
            user_id = %session.user.id,
            session_id = %session.session_id,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token,
            session,
        })
    }
}
