//! User domain types.
//!
//! These types represent validated domain objects separate from database
//! row types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dialpass_core::{Phone, UserId};

/// Caller-supplied login credentials.
///
/// Transient: the plaintext password is hashed or compared and then
/// dropped, never persisted and never logged.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    /// Phone number used as the login identifier.
    pub phone: String,
    /// Plaintext password.
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("phone", &self.phone)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// A stored user account (domain type).
///
/// Created on a user's first successful authorization attempt. The
/// authenticator never updates or deletes records once written.
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// Unique user ID.
    pub id: UserId,
    /// Display name, if the user has set one.
    pub name: Option<String>,
    /// Phone number; unique across all records.
    pub number: Phone,
    /// bcrypt hash of the user's password.
    pub password_hash: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// The minimal identity payload returned after successful authorization.
///
/// The `email` field is repurposed to carry the phone number; the
/// identity shape has no separate phone slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserIdentity {
    /// User ID rendered as a string.
    pub id: String,
    /// Display name, if set.
    pub name: Option<String>,
    /// The user's phone number.
    pub email: String,
}

impl From<&UserRecord> for UserIdentity {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name.clone(),
            email: record.number.as_str().to_owned(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_from_record() {
        let record = UserRecord {
            id: UserId::new(17),
            name: Some("Asha".to_owned()),
            number: Phone::parse("9998887777").unwrap(),
            password_hash: "$2b$10$irrelevant".to_owned(),
            created_at: Utc::now(),
        };

        let identity = UserIdentity::from(&record);
        assert_eq!(identity.id, "17");
        assert_eq!(identity.name.as_deref(), Some("Asha"));
        assert_eq!(identity.email, "9998887777");
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials {
            phone: "9998887777".to_owned(),
            password: "hunter2secret".to_owned(),
        };

        let debug_output = format!("{credentials:?}");
        assert!(debug_output.contains("9998887777"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("hunter2secret"));
    }
}
