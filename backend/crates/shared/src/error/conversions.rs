//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`].

use super::app_error::AppError;
#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// Classify a database error by SQLSTATE
///
/// Returns the error kind and the client-facing message. Feature crates use
/// the kind for their own `kind()` so status and rendering agree.
#[cfg(feature = "sqlx")]
pub fn classify_sqlx_error(err: &sqlx::Error) -> (ErrorKind, &'static str) {
    match err {
        sqlx::Error::RowNotFound => (ErrorKind::NotFound, "Record not found"),
        sqlx::Error::PoolTimedOut => (
            ErrorKind::ServiceUnavailable,
            "Database connection pool exhausted",
        ),
        sqlx::Error::Io(_) => (ErrorKind::ServiceUnavailable, "Database connection error"),
        // https://www.postgresql.org/docs/current/errcodes-appendix.html
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23505") => (ErrorKind::Conflict, "Duplicate key value"),
            Some("23503") => (ErrorKind::Conflict, "Referenced record does not exist"),
            Some("23502") => (ErrorKind::BadRequest, "Required field is null"),
            Some("23514") => (ErrorKind::BadRequest, "Check constraint violation"),
            Some("53000" | "53100" | "53200" | "53300") => {
                (ErrorKind::ServiceUnavailable, "Database resource exhausted")
            }
            Some("57P01" | "57P02" | "57P03") => {
                (ErrorKind::ServiceUnavailable, "Database unavailable")
            }
            _ => (ErrorKind::InternalServerError, "Database error"),
        },
        _ => (ErrorKind::InternalServerError, "Database error"),
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let (kind, message) = classify_sqlx_error(&err);
        AppError::new(kind, message).with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

/// Parser output stays in the logs; the client gets a fixed message
#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::bad_request("Malformed request body")
            .with_action("Send a JSON object with Content-Type: application/json")
            .with_source(rejection)
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Server-side details stay in the logs
        let detail = if self.is_server_error() {
            "Internal server error"
        } else {
            self.message()
        };

        // RFC 7807 Problem Details for HTTP APIs
        let mut body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": detail,
            "action": self.action(),
        });

        if let Some(errors) = self.errors() {
            body["errors"] = serde_json::to_value(errors).unwrap_or_default();
        }

        (status, Json(body)).into_response()
    }
}


#[cfg(all(test, feature = "axum"))]
mod axum_tests {
    use super::*;
    use axum::Json;
    use serde_json::Value;
    use std::error::Error;

    #[test]
    fn test_json_rejection_hides_parser_text() {
        let rejection = Json::<Value>::from_bytes(b"{\"title\": ").unwrap_err();
        let parser_text = rejection.body_text();

        let app_err = AppError::from(rejection);
        assert_eq!(app_err.status_code(), 400);
        assert_eq!(app_err.message(), "Malformed request body");
        assert_ne!(app_err.message(), parser_text);
        assert!(app_err.action().is_some());
        assert!(app_err.source().is_some());
    }
}
