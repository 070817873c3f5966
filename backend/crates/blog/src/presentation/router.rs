//! Blog Router

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use auth::require_auth_session;

use crate::domain::PostRepository;
use crate::infra::postgres::PgPostRepository;
use crate::presentation::handlers::{self, BlogAppState};

/// Create the Blog router with the PostgreSQL post store
pub fn blog_router(repo: PgPostRepository) -> Router {
    blog_router_generic(repo)
}

/// Create a generic Blog router for any repository implementation
///
/// Mutating routes need `auth::load_session` layered around the final app.
pub fn blog_router_generic<P>(repo: P) -> Router
where
    P: PostRepository + Send + Sync + 'static,
{
    let state = BlogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/create", post(handlers::create_post::<P>))
        .route("/update", put(handlers::update_post::<P>))
        .route("/delete/{id}", post(handlers::delete_post::<P>))
        .route_layer(middleware::from_fn(require_auth_session))
        .route("/", get(handlers::list_posts::<P>))
        .route("/post", get(handlers::get_post::<P>))
        .with_state(state)
}
