//! Authentication service.
//!
//! Validates phone+password credentials against the user store and
//! auto-registers unknown phone numbers on their first valid attempt.

mod error;

pub use error::AuthError;

use dialpass_core::Phone;

use crate::db::{RepositoryError, UserStore};
use crate::models::user::{Credentials, UserIdentity};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 6;

/// bcrypt cost factor for newly stored passwords.
const BCRYPT_COST: u32 = 10;

/// Credential authentication service.
///
/// Holds no state of its own beyond the store handle; every call to
/// [`authorize`](Self::authorize) runs independently.
pub struct AuthService<S> {
    store: S,
}

impl<S: UserStore> AuthService<S> {
    /// Create a new authentication service over a user store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Authorize a set of credentials, registering the phone number if it
    /// has never been seen before.
    ///
    /// Returns the authenticated identity, or `None` for every failure
    /// mode: absent credentials, malformed phone or password, wrong
    /// password, a lost registration race, or a store fault. The caller
    /// cannot tell these apart. Store faults are logged before being
    /// swallowed.
    pub async fn authorize(&self, credentials: Option<Credentials>) -> Option<UserIdentity> {
        match self.try_authorize(credentials.as_ref()).await {
            Ok(identity) => Some(identity),
            Err(err @ (AuthError::RegistrationConflict(_) | AuthError::Store(_))) => {
                tracing::error!(error = %err, "user store failure during authorization");
                None
            }
            Err(_) => None,
        }
    }

    /// The fallible authorization path.
    ///
    /// Control flow is strictly linear: validate, look up, then verify
    /// or register.
    async fn try_authorize(
        &self,
        credentials: Option<&Credentials>,
    ) -> Result<UserIdentity, AuthError> {
        let credentials = credentials.ok_or(AuthError::MissingCredentials)?;

        let phone =
            Phone::parse(&credentials.phone).map_err(|_| AuthError::MalformedCredentials)?;
        validate_password(&credentials.password)?;

        if let Some(existing) = self.store.find_by_phone(&phone).await? {
            if verify_password(&credentials.password, &existing.password_hash)? {
                return Ok(UserIdentity::from(&existing));
            }
            return Err(AuthError::WrongPassword);
        }

        // First valid attempt for this phone number registers it. Two
        // concurrent registrations race without a guard; the loser's
        // conflict is a normal failed authorization, not a retry.
        let password_hash = hash_password(&credentials.password)?;
        match self.store.create(&phone, &password_hash).await {
            Ok(created) => Ok(UserIdentity::from(&created)),
            Err(RepositoryError::Conflict(reason)) => Err(AuthError::RegistrationConflict(reason)),
            Err(other) => Err(AuthError::Store(other)),
        }
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::MalformedCredentials);
    }

    Ok(())
}

/// Hash a password with bcrypt.
fn hash_password(password: &str) -> Result<String, AuthError> {
    bcrypt::hash(password, BCRYPT_COST).map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored bcrypt hash.
fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    bcrypt::verify(password, hash).map_err(|_| AuthError::PasswordHash)
}
