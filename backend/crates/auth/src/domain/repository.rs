//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use uuid::Uuid;

use crate::domain::entity::{
    auth_session::AuthSession,
    user::{NewUser, User},
};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user and return it with its assigned id
    ///
    /// Fails with `AuthError::EmailTaken` when the email already exists.
    async fn create(&self, user: &NewUser) -> AuthResult<User>;

    /// Find user by (normalized) email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if email exists
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;
}

/// Session store trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Store a new session
    async fn create(&self, session: &AuthSession) -> AuthResult<()>;

    /// Find session by ID (expired sessions included)
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>>;

    /// Delete a session; deleting an unknown id is not an error
    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;

    /// Remove expired sessions, returning how many were removed
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
