//! Shared fixtures for session and guard tests

#![allow(dead_code)]

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use mockall::mock;
use portal_frontend_common::{AuthSession, MemoryStorage, Navigate, Route};
use serde_json::{Value, json};
use std::rc::Rc;
use wiremock::MockServer;

mock! {
    pub Navigator {}

    impl Navigate for Navigator {
        fn replace(&self, route: Route);
    }
}

/// Fixed "current time" used by guard tests
pub const NOW: i64 = 1_750_000_000;

/// Unsigned JWT whose `exp` claim is `exp`
pub fn jwt_expiring_at(exp: i64) -> String {
    jwt_with_claims(&json!({ "sub": "student-1", "iat": exp - 900, "exp": exp }))
}

/// Unsigned JWT carrying `claims` verbatim
pub fn jwt_with_claims(claims: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let claims = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{claims}.c2lnbmF0dXJl")
}

/// Navigator that accepts any navigation
pub fn any_navigator() -> MockNavigator {
    let mut navigator = MockNavigator::new();
    navigator.expect_replace().return_const(());
    navigator
}

/// Session talking to `server`, with tokens kept in `storage`
pub fn session(server: &MockServer, storage: &MemoryStorage, navigator: MockNavigator) -> Rc<AuthSession> {
    let session = AuthSession::connect(server.uri(), Rc::new(storage.clone()), Rc::new(navigator))
        .expect("session should connect");
    Rc::new(session)
}

/// Seed `storage` with a token pair
pub fn seed(storage: &MemoryStorage, access: Option<&str>, refresh: Option<&str>) {
    use portal_frontend_common::KeyValueStorage as _;

    if let Some(access) = access {
        storage.set("access_token", access);
    }
    if let Some(refresh) = refresh {
        storage.set("refresh_token", refresh);
    }
}

pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map_or(0, |requests| requests.len())
}
