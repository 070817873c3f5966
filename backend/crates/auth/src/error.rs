//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::conversions::classify_sqlx_error;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::ValidationErrors;
use platform::password::PasswordHashError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Payload failed schema validation
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Body is not a JSON document
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    /// Unknown email or wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Email already registered
    #[error("Email already in use")]
    EmailTaken,

    /// No session on a route that needs one
    #[error("Unauthorized")]
    Unauthenticated,

    /// Session token forged, unknown or expired
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Argon2 failure
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] PasswordHashError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) | AuthError::MalformedBody(_) | AuthError::EmailTaken => {
                ErrorKind::BadRequest
            }
            AuthError::InvalidCredentials
            | AuthError::Unauthenticated
            | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::Database(e) => classify_sqlx_error(e).0,
            AuthError::PasswordHash(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::Validation(errors) => AppError::validation(errors),
            AuthError::MalformedBody(rejection) => AppError::from(rejection),
            AuthError::Database(e) => AppError::from(e),
            AuthError::PasswordHash(e) => AppError::internal("Password hashing error").with_source(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::PasswordHash(e) => {
                tracing::error!(error = %e, "Password hashing failed");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();

        // Unauthenticated keeps the plain `{"error": "Unauthorized"}` body
        if matches!(self, AuthError::Unauthenticated) {
            return (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({ "error": "Unauthorized" })),
            )
                .into_response();
        }

        self.into_app_error().into_response()
    }
}

impl From<ValidationErrors> for AuthError {
    fn from(errors: ValidationErrors) -> Self {
        AuthError::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(AuthError::InvalidCredentials.kind(), ErrorKind::Unauthorized);
        assert_eq!(AuthError::EmailTaken.kind(), ErrorKind::BadRequest);
        assert_eq!(AuthError::Unauthenticated.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_keeps_field_errors() {
        let err = AuthError::from(ValidationErrors::single("email", "Invalid email format"));
        let app = err.into_app_error();
        assert_eq!(app.status_code(), 400);
        assert!(app.errors().is_some_and(|e| e.has_field("email")));
    }

    #[test]
    fn test_credentials_message() {
        let app = AuthError::InvalidCredentials.into_app_error();
        assert_eq!(app.message(), "Invalid email or password");
        assert_eq!(app.status_code(), 401);
    }

    #[tokio::test]
    async fn test_database_error_response() {
        let err = AuthError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.kind(), ErrorKind::ServiceUnavailable);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], 503);
        assert_eq!(body["detail"], "Internal server error");
    }
}
