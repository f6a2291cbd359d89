//! Tests for auth module
//!
//! Session lifecycle against an in-memory store: start, idempotency, end.

use chrono::{Duration, Utc};
use std::sync::Arc;
use tower_sessions::{MemoryStore, Session};

use super::models::SessionUser;
use super::session::{current_user, end_session, start_session};
use crate::services::google::IdentityClaims;

fn test_session() -> Session {
    Session::new(None, Arc::new(MemoryStore::default()), None)
}

fn test_claims(email: &str) -> IdentityClaims {
    IdentityClaims {
        subject: "1234567890".to_string(),
        email: email.to_string(),
        name: Some("Jane Doe".to_string()),
        picture: Some("https://example.com/jane.png".to_string()),
        issuer: "https://accounts.google.com".to_string(),
        audience: "test-client-id".to_string(),
        expiry: Utc::now() + Duration::hours(1),
    }
}

#[tokio::test]
async fn test_start_session_stores_identity() {
    let session = test_session();
    assert!(current_user(&session).await.is_none());

    start_session(&session, test_claims("jane@example.com"))
        .await
        .unwrap();

    let user = current_user(&session).await.expect("session authenticated");
    assert_eq!(user.email, "jane@example.com");
    assert_eq!(user.name, "Jane Doe");
    assert_eq!(user.picture, "https://example.com/jane.png");
}

#[tokio::test]
async fn test_start_session_is_idempotent() {
    let session = test_session();

    start_session(&session, test_claims("first@example.com"))
        .await
        .unwrap();
    // A second start with different claims leaves the session unchanged.
    start_session(&session, test_claims("second@example.com"))
        .await
        .unwrap();

    let user = current_user(&session).await.unwrap();
    assert_eq!(user.email, "first@example.com");
}

#[tokio::test]
async fn test_end_session_clears_all_identity_fields() {
    let session = test_session();

    start_session(&session, test_claims("jane@example.com"))
        .await
        .unwrap();
    assert!(current_user(&session).await.is_some());

    end_session(&session).await.unwrap();

    // Immediate read observes unauthenticated state; nothing stale remains.
    assert!(current_user(&session).await.is_none());
}

#[test]
fn test_session_user_fallbacks() {
    let mut claims = test_claims("jane@example.com");
    claims.name = None;
    claims.picture = None;

    let user = SessionUser::from(claims);
    assert_eq!(user.name, "User");
    assert_eq!(user.picture, "");
}
