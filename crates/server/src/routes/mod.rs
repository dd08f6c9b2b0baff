//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health            - Liveness check
//! GET  /health/ready      - Readiness check (database ping)
//!
//! # Auth API
//! POST /api/auth/login    - Authorize credentials, returns identity + token
//! GET  /api/auth/session  - Resolve a bearer token into a session payload
//! ```

pub mod auth;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Build the API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/session", get(auth::session))
}
