//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod session_token;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use sign_in::{SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::SignUpUseCase;

use crate::error::{AuthError, AuthResult};

/// Run CPU-bound password work (Argon2) off the async workers
pub(crate) async fn run_blocking<T, F>(work: F) -> AuthResult<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AuthError::Internal(format!("Password task failed: {e}")))
}
