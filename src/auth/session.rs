//! Session lifecycle helpers
//!
//! The session object is the only holder of identity state; handlers receive
//! it from the request-handling layer, nothing identity-related is global.

use tower_sessions::Session;
use tracing::{debug, info};

use super::models::{SessionUser, SESSION_USER_KEY};
use crate::common::{safe_email_log, ApiError};
use crate::services::google::IdentityClaims;

/// Current authenticated user, if any.
pub async fn current_user(session: &Session) -> Option<SessionUser> {
    session
        .get::<SessionUser>(SESSION_USER_KEY)
        .await
        .ok()
        .flatten()
}

/// Store verified claims in the session.
///
/// Idempotent: if an identity is already present the call is a no-op, so a
/// repeated callback cannot overwrite an established session.
pub async fn start_session(session: &Session, claims: IdentityClaims) -> Result<(), ApiError> {
    if current_user(session).await.is_some() {
        debug!("Session already authenticated, skipping");
        return Ok(());
    }

    let user = SessionUser::from(claims);
    info!(email = %safe_email_log(&user.email), "Session started");

    session
        .insert(SESSION_USER_KEY, user)
        .await
        .map_err(|e| ApiError::InternalServer(format!("session store error: {}", e)))
}

/// Clear all identity state; subsequent reads observe unauthenticated state.
pub async fn end_session(session: &Session) -> Result<(), ApiError> {
    session
        .flush()
        .await
        .map_err(|e| ApiError::InternalServer(format!("session store error: {}", e)))?;
    info!("Session ended");
    Ok(())
}
