//! Full login-to-session flow: authorize, issue a token, resolve it back
//! into a session payload.

#![allow(clippy::unwrap_used)]

use secrecy::SecretString;

use dialpass_server::db::MemoryUserStore;
use dialpass_server::models::session::{self, Session, SessionUser};
use dialpass_server::models::user::Credentials;
use dialpass_server::services::{AuthService, TokenService};

#[tokio::test]
async fn login_then_session_resolution() {
    let store = MemoryUserStore::new();
    let auth = AuthService::new(&store);
    let tokens = TokenService::new(&SecretString::from("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6d"));

    let identity = auth
        .authorize(Some(Credentials {
            phone: "9998887777".to_owned(),
            password: "secret1".to_owned(),
        }))
        .await
        .unwrap();

    let issued = tokens.issue(&identity).unwrap();
    let claims = tokens.verify(&issued.token).unwrap();

    // Build the session the way the session route does and apply the
    // verified claims to it
    let session = Session {
        user: SessionUser {
            id: String::new(),
            name: claims.name.clone(),
            email: claims.email.clone(),
        },
        expires_at: issued.expires_at,
    };
    let session = session::apply_token(&claims, session);

    assert_eq!(session.user.id, identity.id);
    assert_eq!(session.user.email, "9998887777");
    assert!(session.expires_at.timestamp() > claims.iat);
}

#[tokio::test]
async fn session_tokens_do_not_cross_deployments() {
    let store = MemoryUserStore::new();
    let auth = AuthService::new(&store);
    let tokens = TokenService::new(&SecretString::from("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6d"));
    let other = TokenService::new(&SecretString::from("zX8@wV1!qN4$mJ6^rD3&kF9*bH2#tG5y"));

    let identity = auth
        .authorize(Some(Credentials {
            phone: "9998887777".to_owned(),
            password: "secret1".to_owned(),
        }))
        .await
        .unwrap();

    let issued = tokens.issue(&identity).unwrap();
    assert!(other.verify(&issued.token).is_err());
}
