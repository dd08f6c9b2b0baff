//! Signed access token issuance and verification.
//!
//! Tokens are HS256 JWTs signed with the configured secret. The subject
//! claim carries the user ID; verification enforces signature and expiry.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::models::session::TokenClaims;
use crate::models::user::UserIdentity;

/// How long an issued token stays valid.
const TOKEN_TTL_SECS: i64 = 60 * 60 * 24;

/// Errors from token operations.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing or verification failed.
    #[error("token error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// A freshly issued token with its expiry.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The encoded, signed token.
    pub token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
}

/// Issues and verifies signed access tokens.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Create a token service from the configured signing secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
            validation: Validation::default(),
        }
    }

    /// Issue a signed token for an authenticated identity.
    ///
    /// # Errors
    ///
    /// Returns `TokenError` if signing fails.
    pub fn issue(&self, identity: &UserIdentity) -> Result<IssuedToken, TokenError> {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(TOKEN_TTL_SECS);

        let claims = TokenClaims {
            sub: identity.id.clone(),
            name: identity.name.clone(),
            email: identity.email.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding)?;
        Ok(IssuedToken { token, expires_at })
    }

    /// Verify a token's signature and expiry, returning its claims.
    ///
    /// # Errors
    ///
    /// Returns `TokenError` if the token is malformed, expired, or was
    /// not signed with this service's secret.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let data = decode::<TokenClaims>(token, &self.decoding, &self.validation)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn strong_secret() -> SecretString {
        SecretString::from("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6d")
    }

    fn identity() -> UserIdentity {
        UserIdentity {
            id: "42".to_owned(),
            name: Some("Asha".to_owned()),
            email: "9998887777".to_owned(),
        }
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let service = TokenService::new(&strong_secret());

        let issued = service.issue(&identity()).unwrap();
        let claims = service.verify(&issued.token).unwrap();

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.name.as_deref(), Some("Asha"));
        assert_eq!(claims.email, "9998887777");
        assert_eq!(claims.exp, issued.expires_at.timestamp());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_verify_rejects_tampered_token() {
        let service = TokenService::new(&strong_secret());

        let issued = service.issue(&identity()).unwrap();
        let mut tampered = issued.token;
        tampered.pop();

        assert!(service.verify(&tampered).is_err());
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let issuer = TokenService::new(&strong_secret());
        let verifier = TokenService::new(&SecretString::from("zX8@wV1!qN4$mJ6^rD3&kF9*bH2#tG5y"));

        let issued = issuer.issue(&identity()).unwrap();
        assert!(verifier.verify(&issued.token).is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let secret = strong_secret();
        let service = TokenService::new(&secret);

        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: "42".to_owned(),
            name: None,
            email: "9998887777".to_owned(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let stale = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
        )
        .unwrap();

        assert!(service.verify(&stale).is_err());
    }
}
