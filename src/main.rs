// src/main.rs
use axum::{extract::Extension, Router};
use dotenv::dotenv;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod advice;
mod auth;
mod common;
mod services;

use common::{AppConfig, AppState};
use services::google::GoogleConfig;
use services::{GoogleService, OpenAIService};

/// Session cookie name
const SESSION_COOKIE_NAME: &str = "advice_session";

/// Session expiry on inactivity (2 hours)
const SESSION_EXPIRY_SECONDS: i64 = 2 * 60 * 60;

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // CONFIGURATION
    // ========================================================================

    let config = AppConfig::from_env()?;

    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set; advice queries will fail until configured");
    }

    // ========================================================================
    // SERVICE INITIALIZATION
    // ========================================================================

    let google_service = Arc::new(GoogleService::new(
        GoogleConfig::new(
            config.google_client_id.clone(),
            config.google_client_secret.clone(),
            config.redirect_uri.clone(),
        ),
        config.auth_http_timeout,
    ));
    info!("GoogleService initialized");

    let openai_service = Arc::new(OpenAIService::new(
        config.openai_api_key.clone(),
        config.openai_model.clone(),
        services::openai::OPENAI_BASE_URL.to_string(),
        config.advice_http_timeout,
    ));
    info!("OpenAIService initialized");

    // ========================================================================
    // SESSION LAYER
    // ========================================================================

    // In-memory store: nothing survives a restart, matching the ephemeral
    // per-browser-session model.
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        // Lax so the cookie survives the top-level redirect back from Google
        .with_same_site(SameSite::Lax)
        .with_http_only(true);

    // ========================================================================
    // APPLICATION STATE
    // ========================================================================

    let port = config.port;
    let app_state = AppState {
        config,
        google_service,
        openai_service,
    };
    let shared = Arc::new(app_state);

    // ========================================================================
    // ROUTER COMPOSITION
    // ========================================================================

    let app = Router::new()
        .merge(auth::auth_routes())
        .merge(advice::advice_routes())
        .layer(Extension(shared))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http());

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
