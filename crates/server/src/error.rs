//! Unified error handling for route handlers.
//!
//! All route handlers return `Result<T, AppError>`; the `IntoResponse`
//! impl maps errors to JSON bodies without leaking internals to clients.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authorization failed.
    ///
    /// Carries no detail: wrong password, unknown account, malformed
    /// input, and store faults all surface identically.
    #[error("invalid credentials")]
    Unauthorized,

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error body returned to clients.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Internal(_) = self {
            tracing::error!(error = %self, "request error");
        }

        let status = match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match self {
            Self::Unauthorized => "invalid credentials".to_string(),
            Self::Internal(_) => "internal server error".to_string(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
