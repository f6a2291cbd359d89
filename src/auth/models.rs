//! Authentication data models

use serde::{Deserialize, Serialize};

use crate::services::google::IdentityClaims;

/// Session key under which the authenticated identity is stored.
pub const SESSION_USER_KEY: &str = "user";

/// Verified identity stored in the per-browser session.
///
/// A session is authenticated iff this record exists; all three fields are
/// always populated (missing provider fields fall back to "User" / "").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    pub name: String,
    pub picture: String,
}

impl From<IdentityClaims> for SessionUser {
    fn from(claims: IdentityClaims) -> Self {
        Self {
            email: claims.email,
            name: claims.name.unwrap_or_else(|| "User".to_string()),
            picture: claims.picture.unwrap_or_default(),
        }
    }
}

/// Query parameters Google appends to the redirect back to the base URL.
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
}
