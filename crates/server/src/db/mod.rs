//! Database operations for the Dialpass user store.
//!
//! # Database: `dialpass`
//!
//! ## Tables
//!
//! - `users` - Accounts keyed by unique phone number
//!
//! # Migrations
//!
//! Schema lives in `crates/server/migrations/` and is applied with
//! `psql` or any migration runner; the server does not run migrations
//! on startup.

pub mod memory;
pub mod users;

pub use memory::MemoryUserStore;
pub use users::PgUserStore;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use dialpass_core::Phone;

use crate::models::user::UserRecord;

/// Errors from repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., duplicate phone number).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Store of user records addressed by phone number.
///
/// The authenticator only ever needs two operations: an exact-phone lookup
/// and a create that surfaces [`RepositoryError::Conflict`] when another
/// writer inserted the same phone number first. There is no transactional
/// guard around lookup-then-create; callers treat a losing race as a
/// normal failed authorization.
#[allow(async_fn_in_trait)]
pub trait UserStore {
    /// Find a user record by exact phone number match.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the lookup fails.
    async fn find_by_phone(&self, phone: &Phone) -> Result<Option<UserRecord>, RepositoryError>;

    /// Create a new user record with a phone number and password hash.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the phone number is already
    /// registered, and `RepositoryError` for other store failures.
    async fn create(
        &self,
        phone: &Phone,
        password_hash: &str,
    ) -> Result<UserRecord, RepositoryError>;
}

impl<S: UserStore> UserStore for &S {
    async fn find_by_phone(&self, phone: &Phone) -> Result<Option<UserRecord>, RepositoryError> {
        (**self).find_by_phone(phone).await
    }

    async fn create(
        &self,
        phone: &Phone,
        password_hash: &str,
    ) -> Result<UserRecord, RepositoryError> {
        (**self).create(phone, password_hash).await
    }
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
