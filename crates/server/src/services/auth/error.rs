//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur while authorizing credentials.
///
/// These exist for internal control flow and logging only: the public
/// authorization boundary collapses every variant to the same `None`
/// so callers cannot distinguish why an attempt failed.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No credentials were supplied at all.
    #[error("missing credentials")]
    MissingCredentials,

    /// Supplied credentials failed shape validation.
    #[error("malformed credentials")]
    MalformedCredentials,

    /// Password did not match the stored hash.
    #[error("wrong password")]
    WrongPassword,

    /// Lost the race to register a new phone number.
    #[error("registration conflict: {0}")]
    RegistrationConflict(String),

    /// Repository/database error.
    #[error("database error: {0}")]
    Store(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
