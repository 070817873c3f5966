//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, validation schemas, repository traits
//! - `application/` - Use cases (sign up, sign in, sign out, session check)
//! - `infra/` - PostgreSQL user store, in-process session store
//! - `presentation/` - HTTP handlers, DTOs, middleware, router
//!
//! ## Features
//! - Sign up with name + email + password
//! - Sign in with email + password
//! - Server-side sessions referenced by an HMAC-signed cookie token
//! - Middleware that attaches the session user to each request
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Unknown email and wrong password are indistinguishable to the client
//! - Sessions expire after a fixed TTL and are swept in the background

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::entity::auth_session::SessionUser;
pub use error::{AuthError, AuthResult};
pub use infra::{
    memory::{MemorySessionStore, MemoryUserRepository},
    postgres::PgUserRepository,
};
pub use presentation::middleware::{
    AuthUser, CurrentSession, SessionLayerState, load_session, require_auth_session,
};
pub use presentation::router::{auth_router, auth_router_generic};
