//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::infra::{memory::MemorySessionStore, postgres::PgUserRepository};
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with the PostgreSQL user store
pub fn auth_router(
    users: PgUserRepository,
    sessions: MemorySessionStore,
    config: Arc<AuthConfig>,
) -> Router {
    auth_router_generic(users, sessions, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<U, S>(users: U, sessions: S, config: Arc<AuthConfig>) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    let state = AuthAppState {
        users: Arc::new(users),
        sessions: Arc::new(sessions),
        config,
    };

    Router::new()
        .route("/login", post(handlers::login::<U, S>))
        .route("/signUp", post(handlers::sign_up::<U, S>))
        .route("/logout", post(handlers::logout::<U, S>))
        .with_state(state)
}
