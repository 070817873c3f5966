//! User Entity
//!
//! Immutable after sign-up.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{email::Email, user_name::UserName, user_password::UserPassword};

/// Persisted user
#[derive(Debug, Clone)]
pub struct User {
    /// Database-assigned id
    pub id: UserId,
    /// Display name
    pub name: UserName,
    /// Login identifier (unique, lower-cased)
    pub email: Email,
    /// Argon2id hash
    pub password: UserPassword,
    pub created_at: DateTime<Utc>,
}

/// User about to be inserted; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: UserName,
    pub email: Email,
    pub password: UserPassword,
}
