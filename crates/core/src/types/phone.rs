//! Phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneError {
    /// The input string is too short.
    #[error("phone number must be at least {min} characters")]
    TooShort {
        /// Minimum allowed length.
        min: usize,
    },
    /// The input string is too long.
    #[error("phone number must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A phone number.
///
/// Phone numbers are the login identifier for Dialpass accounts. Validation
/// is a length check only: formats vary too much across regions to constrain
/// the character set here, and the upstream user store treats the value as an
/// opaque unique key.
///
/// ## Constraints
///
/// - Length: 10-15 characters
///
/// ## Examples
///
/// ```
/// use dialpass_core::Phone;
///
/// assert!(Phone::parse("9998887777").is_ok());
/// assert!(Phone::parse("+14155550123").is_ok());
///
/// assert!(Phone::parse("12345").is_err());            // too short
/// assert!(Phone::parse("1234567890123456").is_err()); // too long
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Minimum length of a phone number.
    pub const MIN_LENGTH: usize = 10;

    /// Maximum length of a phone number (ITU-T E.164 digits plus a prefix).
    pub const MAX_LENGTH: usize = 15;

    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is shorter than 10 or longer than
    /// 15 characters.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.len() < Self::MIN_LENGTH {
            return Err(PhoneError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(PhoneError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Phone` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
