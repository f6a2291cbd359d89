//! Advice routes

use axum::{routing::get, Router};

use super::handlers;

/// Creates and returns the advice router
///
/// # Routes
/// - `GET /chat` - Advice query form (requires authenticated session)
/// - `POST /chat` - Submit a query and render the advice
pub fn advice_routes() -> Router {
    Router::new().route(
        "/chat",
        get(handlers::chat_page).post(handlers::chat_submit),
    )
}
