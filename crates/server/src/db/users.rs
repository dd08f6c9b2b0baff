//! `PostgreSQL` user store.
//!
//! Queries are checked at runtime so the crate builds without a live
//! database; rows come back as primitives and are parsed into domain
//! types before leaving this module.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use dialpass_core::{Phone, UserId};

use super::{RepositoryError, UserStore};
use crate::models::user::UserRecord;

/// User store backed by `PostgreSQL`.
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Create a new `PostgreSQL` user store.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw `users` row before domain validation.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    name: Option<String>,
    number: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_record(self) -> Result<UserRecord, RepositoryError> {
        let number = Phone::parse(&self.number).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid phone number in database: {e}"))
        })?;

        Ok(UserRecord {
            id: UserId::new(self.id),
            name: self.name,
            number,
            password_hash: self.password_hash,
            created_at: self.created_at,
        })
    }
}

impl UserStore for PgUserStore {
    async fn find_by_phone(&self, phone: &Phone) -> Result<Option<UserRecord>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, name, number, password_hash, created_at
            FROM users
            WHERE number = $1
            ",
        )
        .bind(phone.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_record).transpose()
    }

    async fn create(
        &self,
        phone: &Phone,
        password_hash: &str,
    ) -> Result<UserRecord, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            INSERT INTO users (number, password_hash)
            VALUES ($1, $2)
            RETURNING id, name, number, password_hash, created_at
            ",
        )
        .bind(phone.as_str())
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("phone number already registered".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        row.into_record()
    }
}
