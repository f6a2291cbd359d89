//! Authentication routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `GET /` - Login/welcome page, also consumes the OAuth `code` callback
/// - `GET /auth/login` - Redirect to the provider authorization endpoint
/// - `POST /logout` - End the session
/// - `GET /api/me` - Current session identity
pub fn auth_routes() -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/auth/login", get(handlers::login_start))
        .route("/logout", post(handlers::logout))
        .route("/api/me", get(handlers::me))
}
