//! Auth Middleware
//!
//! `load_session` resolves the session cookie on every request and stores
//! the result as [`CurrentSession`]. `require_auth_session` guards routes
//! that need it. Handlers read the identity through [`AuthUser`].

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::auth_session::SessionUser;
use crate::domain::repository::SessionRepository;
use crate::error::AuthError;

/// Middleware state
pub struct SessionLayerState<S> {
    pub sessions: Arc<S>,
    pub config: Arc<AuthConfig>,
}

impl<S> SessionLayerState<S> {
    pub fn new(sessions: S, config: Arc<AuthConfig>) -> Self {
        Self {
            sessions: Arc::new(sessions),
            config,
        }
    }
}

impl<S> Clone for SessionLayerState<S> {
    fn clone(&self) -> Self {
        Self {
            sessions: self.sessions.clone(),
            config: self.config.clone(),
        }
    }
}

/// Session identity stored in request extensions
#[derive(Debug, Clone, Default)]
pub struct CurrentSession(pub Option<SessionUser>);

/// Middleware that resolves the session cookie; never rejects
pub async fn load_session<S>(
    State(state): State<SessionLayerState<S>>,
    mut req: Request,
    next: Next,
) -> Response
where
    S: SessionRepository + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let user = match token {
        Some(token) => {
            let use_case = CheckSessionUseCase::new(state.sessions.clone(), state.config.clone());
            match use_case.execute(&token).await {
                Ok(user) => Some(user),
                Err(AuthError::SessionInvalid) => None,
                Err(e) => {
                    tracing::warn!(error = %e, "Session lookup failed");
                    None
                }
            }
        }
        None => None,
    };

    req.extensions_mut().insert(CurrentSession(user));

    next.run(req).await
}

/// Middleware that requires a session identity
///
/// Rejects with 401 `{"error": "Unauthorized"}`.
pub async fn require_auth_session(req: Request, next: Next) -> Result<Response, AuthError> {
    let authenticated = req
        .extensions()
        .get::<CurrentSession>()
        .is_some_and(|session| session.0.is_some());

    if !authenticated {
        return Err(AuthError::Unauthenticated);
    }

    Ok(next.run(req).await)
}

/// Extractor for the session user
pub struct AuthUser(pub SessionUser);

impl<St> FromRequestParts<St> for AuthUser
where
    St: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &St) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentSession>()
            .and_then(|session| session.0.clone())
            .map(AuthUser)
            .ok_or(AuthError::Unauthenticated)
    }
}
