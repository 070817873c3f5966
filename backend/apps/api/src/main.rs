//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use auth::domain::SessionRepository;
use auth::{
    AuthConfig, MemorySessionStore, PgUserRepository, SessionLayerState, auth_router,
    load_session,
};
use axum::{
    Router, http,
    http::{Method, header},
    middleware,
};
use blog::{PgPostRepository, blog_router};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,blog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let auth_config = Arc::new(load_auth_config()?);
    let sessions = MemorySessionStore::new();
    spawn_session_cleanup(sessions.clone(), auth_config.clone());

    let cors = cors_layer();

    let app = Router::new()
        .merge(auth_router(
            PgUserRepository::new(pool.clone()),
            sessions.clone(),
            auth_config.clone(),
        ))
        .merge(blog_router(PgPostRepository::new(pool)))
        .layer(middleware::from_fn_with_state(
            SessionLayerState::new(sessions, auth_config),
            load_session::<MemorySessionStore>,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let port = match env::var("PORT") {
        Ok(raw) => raw.parse().context("PORT must be a port number")?,
        Err(_) => DEFAULT_PORT,
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Debug builds fall back to a random secret; release builds require one.
fn load_auth_config() -> anyhow::Result<AuthConfig> {
    match env::var("SESSION_SECRET") {
        Ok(secret) => Ok(AuthConfig::with_secret_base64(&secret)?),
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("SESSION_SECRET not set, using a random development secret");
            Ok(AuthConfig::development())
        }
        Err(_) => anyhow::bail!("SESSION_SECRET must be set in production"),
    }
}

fn spawn_session_cleanup(sessions: MemorySessionStore, config: Arc<AuthConfig>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(config.session_cleanup_interval);
        loop {
            interval.tick().await;
            if let Err(e) = sessions.cleanup_expired().await {
                tracing::warn!(error = %e, "Session cleanup failed");
            }
        }
    });
}

fn cors_layer() -> CorsLayer {
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true)
}
