//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;
use tracing::warn;

use super::session::current_user;
use crate::common::ApiError;

/// Authenticated user extractor
///
/// Reads the verified identity from the cookie session. Handlers taking this
/// extractor reject unauthenticated requests with 401 before running.
#[derive(Debug)]
pub struct AuthedUser {
    pub email: String,
    pub name: String,
    pub picture: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InternalServer("missing session layer".to_string()))?;

        match current_user(&session).await {
            Some(user) => Ok(AuthedUser {
                email: user.email,
                name: user.name,
                picture: user.picture,
            }),
            None => {
                warn!("Authentication failed: no identity in session");
                Err(ApiError::Unauthorized("not logged in".to_string()))
            }
        }
    }
}
