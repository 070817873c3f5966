//! Blog Error Types

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::conversions::classify_sqlx_error;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::ValidationErrors;
use thiserror::Error;

pub type BlogResult<T> = Result<T, BlogError>;

#[derive(Debug, Error)]
pub enum BlogError {
    /// Payload failed schema validation
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Body is not a JSON document
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    /// Query or path id missing, non-numeric, or <= 0
    #[error("Post id can't be null or <= 0")]
    InvalidPostId,

    /// Lookup of a single post found nothing (404)
    #[error("Post not found.")]
    PostNotFound,

    /// Update/delete target does not exist (400)
    #[error("Post not found.")]
    TargetNotFound,

    /// Session user is not the post's author
    #[error("You are not the author of this post")]
    NotAuthor,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl BlogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::Validation(_)
            | BlogError::MalformedBody(_)
            | BlogError::InvalidPostId
            | BlogError::TargetNotFound => ErrorKind::BadRequest,
            BlogError::PostNotFound => ErrorKind::NotFound,
            BlogError::NotAuthor => ErrorKind::Unauthorized,
            BlogError::Database(e) => classify_sqlx_error(e).0,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn into_app_error(self) -> AppError {
        match self {
            BlogError::Validation(errors) => AppError::validation(errors),
            BlogError::MalformedBody(rejection) => AppError::from(rejection),
            BlogError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            BlogError::Database(e) => {
                tracing::error!(error = %e, "Blog database error");
            }
            _ => {
                tracing::debug!(error = %self, "Blog error");
            }
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<ValidationErrors> for BlogError {
    fn from(errors: ValidationErrors) -> Self {
        BlogError::Validation(errors)
    }
}
