//! Domain Layer
//!
//! Contains entities, value objects, validation schemas, and repository traits.

pub mod entity;
pub mod repository;
pub mod schema;
pub mod value_object;

// Re-exports
pub use entity::{
    auth_session::{AuthSession, SessionUser},
    user::{NewUser, User},
};
pub use repository::{SessionRepository, UserRepository};
