//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{SignInUseCase, SignOutUseCase, SignUpUseCase};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::schema;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{MessageResponse, SessionResponse};

/// Shared state for auth handlers
pub struct AuthAppState<U, S> {
    pub users: Arc<U>,
    pub sessions: Arc<S>,
    pub config: Arc<AuthConfig>,
}

impl<U, S> Clone for AuthAppState<U, S> {
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
            sessions: self.sessions.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<U, S>(
    State(state): State<AuthAppState<U, S>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    let Json(payload) = payload?;
    let input = schema::validate_login(&payload)?;

    let use_case = SignInUseCase::new(
        state.users.clone(),
        state.sessions.clone(),
        state.config.clone(),
    );
    let output = use_case.execute(input).await?;

    let cookie = state
        .config
        .cookie()
        .set_cookie_header(&output.session_token)
        .ok_or_else(|| AuthError::Internal("Session token is not a valid header".to_string()))?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SessionResponse::from(output.session)),
    ))
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /signUp
pub async fn sign_up<U, S>(
    State(state): State<AuthAppState<U, S>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AuthResult<Json<MessageResponse>>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    let Json(payload) = payload?;
    let input = schema::validate_sign_up(&payload)?;

    let use_case = SignUpUseCase::new(state.users.clone(), state.config.clone());
    use_case.execute(input).await?;

    Ok(Json(MessageResponse::new("Account created successfully")))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /logout
///
/// Always redirects to `/` with the cookie cleared, session or not.
pub async fn logout<U, S>(State(state): State<AuthAppState<U, S>>, headers: HeaderMap) -> Response
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    if let Some(token) = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name)
    {
        let use_case = SignOutUseCase::new(state.sessions.clone(), state.config.clone());
        if let Err(e) = use_case.execute(&token).await {
            tracing::debug!(error = %e, "Logout without a valid session");
        }
    }

    let mut response_headers = HeaderMap::new();
    response_headers.insert(header::LOCATION, HeaderValue::from_static("/"));
    if let Some(cookie) = state.config.cookie().delete_cookie_header() {
        response_headers.insert(header::SET_COOKIE, cookie);
    }

    (StatusCode::FOUND, response_headers).into_response()
}
