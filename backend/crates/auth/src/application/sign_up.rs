//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::run_blocking;
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::schema::SignUpInput;
use crate::domain::value_object::user_password::UserPassword;
use crate::error::{AuthError, AuthResult};

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Register a validated sign-up payload
    pub async fn execute(&self, input: SignUpInput) -> AuthResult<User> {
        if self.user_repo.exists_by_email(&input.email).await? {
            return Err(AuthError::EmailTaken);
        }

        let raw = input.password;
        let pepper = self.config.password_pepper.clone();
        let password =
            run_blocking(move || UserPassword::from_raw(&raw, pepper.as_deref())).await??;

        let user = self
            .user_repo
            .create(&NewUser {
                name: input.name,
                email: input.email,
                password,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User signed up");

        Ok(user)
    }
}
