//! Authentication route handlers.
//!
//! Thin JSON wrappers over the credential authenticator and token
//! service. Every failed login takes the same 401 regardless of cause,
//! mirroring the authenticator's own collapse-to-none boundary.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::PgUserStore;
use crate::error::AppError;
use crate::models::session::{self, Session, SessionUser};
use crate::models::user::{Credentials, UserIdentity};
use crate::services::AuthService;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub phone: String,
    pub password: String,
}

/// Login response body.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserIdentity,
    /// Signed access token for subsequent `GET /api/auth/session` calls.
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

/// `POST /api/auth/login`
///
/// Authorizes phone+password credentials and issues an access token.
/// First-time phone numbers with valid credentials are registered as a
/// side effect of the attempt.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let auth = AuthService::new(PgUserStore::new(state.pool().clone()));

    let credentials = Credentials {
        phone: body.phone,
        password: body.password,
    };

    let Some(identity) = auth.authorize(Some(credentials)).await else {
        return Err(AppError::Unauthorized);
    };

    let issued = state
        .tokens()
        .issue(&identity)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(LoginResponse {
        user: identity,
        access_token: issued.token,
        expires_at: issued.expires_at,
    }))
}

/// `GET /api/auth/session`
///
/// Resolves an `Authorization: Bearer` token into a session payload.
pub async fn session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Session>, AppError> {
    let token = bearer_token(&headers).ok_or(AppError::Unauthorized)?;
    let claims = state
        .tokens()
        .verify(token)
        .map_err(|_| AppError::Unauthorized)?;

    let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
        .ok_or_else(|| AppError::Internal("token expiry out of range".to_owned()))?;

    let session = Session {
        user: SessionUser {
            id: String::new(),
            name: claims.name.clone(),
            email: claims.email.clone(),
        },
        expires_at,
    };

    Ok(Json(session::apply_token(&claims, session)))
}

/// Extract a bearer token from the Authorization header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
