//! In-memory user store.
//!
//! Backs the test suite and local experimentation with the same contract
//! as the `PostgreSQL` store, including conflict behavior on duplicate
//! phone numbers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};

use chrono::Utc;
use tokio::sync::RwLock;

use dialpass_core::{Phone, UserId};

use super::{RepositoryError, UserStore};
use crate::models::user::UserRecord;

/// User store held entirely in process memory.
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, UserRecord>>,
    next_id: AtomicI32,
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryUserStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl UserStore for MemoryUserStore {
    async fn find_by_phone(&self, phone: &Phone) -> Result<Option<UserRecord>, RepositoryError> {
        Ok(self.users.read().await.get(phone.as_str()).cloned())
    }

    async fn create(
        &self,
        phone: &Phone,
        password_hash: &str,
    ) -> Result<UserRecord, RepositoryError> {
        let mut users = self.users.write().await;

        if users.contains_key(phone.as_str()) {
            return Err(RepositoryError::Conflict(
                "phone number already registered".to_owned(),
            ));
        }

        let record = UserRecord {
            id: UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst)),
            name: None,
            number: phone.clone(),
            password_hash: password_hash.to_owned(),
            created_at: Utc::now(),
        };

        users.insert(phone.as_str().to_owned(), record.clone());
        Ok(record)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_find() {
        let store = MemoryUserStore::new();
        let phone = Phone::parse("9998887777").unwrap();

        let created = store.create(&phone, "hash").await.unwrap();
        assert_eq!(created.number, phone);
        assert_eq!(created.password_hash, "hash");
        assert!(created.name.is_none());

        let found = store.find_by_phone(&phone).await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let store = MemoryUserStore::new();
        let phone = Phone::parse("9998887777").unwrap();

        assert!(store.find_by_phone(&phone).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_phone_conflicts() {
        let store = MemoryUserStore::new();
        let phone = Phone::parse("9998887777").unwrap();

        store.create(&phone, "hash").await.unwrap();
        let err = store.create(&phone, "other").await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_ids_are_distinct() {
        let store = MemoryUserStore::new();
        let a = store
            .create(&Phone::parse("1112223333").unwrap(), "h")
            .await
            .unwrap();
        let b = store
            .create(&Phone::parse("4445556666").unwrap(), "h")
            .await
            .unwrap();
        assert_ne!(a.id, b.id);
    }
}
