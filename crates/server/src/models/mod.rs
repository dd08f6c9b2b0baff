//! Domain models for the authentication service.
//!
//! # Models
//!
//! - [`user`] - Stored user records and the identity returned to callers
//! - [`session`] - Token claims and the session payload built from them

pub mod session;
pub mod user;

pub use session::{Session, SessionUser, TokenClaims};
pub use user::{Credentials, UserIdentity, UserRecord};
