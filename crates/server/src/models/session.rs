//! Session-related types.
//!
//! Claims carried by signed tokens, and the session payload the server
//! hands back to clients that present one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims embedded in a signed access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the authenticated user's ID.
    pub sub: String,
    /// Display name at issue time, if set.
    pub name: Option<String>,
    /// The user's phone number (see `UserIdentity::email`).
    pub email: String,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

/// The user block of a session payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    /// Authenticated user's ID.
    pub id: String,
    /// Display name, if set.
    pub name: Option<String>,
    /// The user's phone number.
    pub email: String,
}

/// Session payload returned to clients holding a valid token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// The authenticated user.
    pub user: SessionUser,
    /// When the backing token expires.
    pub expires_at: DateTime<Utc>,
}

/// Copy the subject identifier from verified token claims into the
/// session's user block.
///
/// This is the only field the token is allowed to overwrite; everything
/// else on the session passes through untouched.
#[must_use]
pub fn apply_token(claims: &TokenClaims, mut session: Session) -> Session {
    session.user.id = claims.sub.clone();
    session
}
