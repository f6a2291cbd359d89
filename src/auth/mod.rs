//! # Auth Module
//!
//! Google OAuth2 authorization-code login:
//! - authorization URL + callback handling on the base URL
//! - verified identity stored in the per-browser session
//! - AuthedUser extractor for protected routes

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod session;

#[cfg(test)]
mod tests;

pub use extractors::AuthedUser;
pub use routes::auth_routes;
