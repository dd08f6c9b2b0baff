//! Business logic services.
//!
//! # Services
//!
//! - [`auth`] - Credential authorization (validate, verify-or-register)
//! - [`token`] - Signed access token issuance and verification

pub mod auth;
pub mod token;

pub use auth::AuthService;
pub use token::TokenService;
