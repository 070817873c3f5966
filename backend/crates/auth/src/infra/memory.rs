//! In-Process Repository Implementations
//!
//! `MemorySessionStore` is the production session store. `MemoryUserRepository`
//! backs tests and database-less runs.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use chrono::Utc;
use kernel::id::UserId;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entity::{
    auth_session::AuthSession,
    user::{NewUser, User},
};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

// ============================================================================
// Session Store
// ============================================================================

/// Session store shared by every clone
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, AuthSession>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl SessionRepository for MemorySessionStore {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        self.sessions
            .write()
            .await
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>> {
        Ok(self.sessions.read().await.get(&session_id).cloned())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        self.sessions.write().await.remove(&session_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired_at(now_ms));
        let deleted = (before - sessions.len()) as u64;

        if deleted > 0 {
            tracing::info!(sessions_deleted = deleted, "Cleaned up expired auth sessions");
        }

        Ok(deleted)
    }
}

// ============================================================================
// User Repository
// ============================================================================

/// User repository over a `Vec`, ids assigned from 1
#[derive(Clone)]
pub struct MemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
    next_id: Arc<AtomicI32>,
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self {
            users: Arc::default(),
            next_id: Arc::new(AtomicI32::new(1)),
        }
    }
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }

        let user = User {
            id: UserId::from_db(self.next_id.fetch_add(1, Ordering::Relaxed)),
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            created_at: Utc::now(),
        };
        users.push(user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self.users.read().await.iter().any(|u| &u.email == email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::auth_session::SessionUser;
    use crate::domain::value_object::{
        user_name::UserName,
        user_password::{RawPassword, UserPassword},
    };

    fn session(ttl: chrono::Duration) -> AuthSession {
        AuthSession::new(
            SessionUser {
                id: UserId::from_db(1),
                name: "Alice".to_string(),
            },
            ttl,
        )
    }

    fn new_user(email: &str) -> NewUser {
        let raw = RawPassword::new("Abcdef1!".to_string()).unwrap();
        NewUser {
            name: UserName::new("Alice").unwrap(),
            email: Email::new(email).unwrap(),
            password: UserPassword::from_raw(&raw, None).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_session_create_find_delete() {
        let store = MemorySessionStore::new();
        let s = session(chrono::Duration::hours(1));

        store.create(&s).await.unwrap();
        let found = store.find_by_id(s.session_id).await.unwrap().unwrap();
        assert_eq!(found.user.name, "Alice");

        store.delete(s.session_id).await.unwrap();
        assert!(store.find_by_id(s.session_id).await.unwrap().is_none());

        // unknown id is fine
        store.delete(Uuid::new_v4()).await.unwrap();
    }

    #[tokio::test]
    async fn test_session_cleanup_expired() {
        let store = MemorySessionStore::new();
        store.create(&session(chrono::Duration::hours(1))).await.unwrap();
        store.create(&session(chrono::Duration::zero())).await.unwrap();
        store.create(&session(chrono::Duration::zero())).await.unwrap();

        assert_eq!(store.cleanup_expired().await.unwrap(), 2);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_clones_share_sessions() {
        let store = MemorySessionStore::new();
        let clone = store.clone();
        store.create(&session(chrono::Duration::hours(1))).await.unwrap();
        assert!(!clone.is_empty().await);
    }

    #[tokio::test]
    async fn test_user_ids_and_unique_email() {
        let repo = MemoryUserRepository::new();

        let alice = repo.create(&new_user("alice@x.com")).await.unwrap();
        let bob = repo.create(&new_user("bob@x.com")).await.unwrap();
        assert_eq!(alice.id.value(), 1);
        assert_eq!(bob.id.value(), 2);

        assert!(matches!(
            repo.create(&new_user("alice@x.com")).await,
            Err(AuthError::EmailTaken)
        ));

        let email = Email::new("ALICE@x.com").unwrap();
        assert!(repo.exists_by_email(&email).await.unwrap());
        assert_eq!(repo.find_by_email(&email).await.unwrap().unwrap().id, alice.id);
    }
}
