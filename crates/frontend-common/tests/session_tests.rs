//! Auth session behaviour against a mock portal API

#![cfg(not(target_arch = "wasm32"))]

mod common;

use common::{MockNavigator, any_navigator, seed, session};
use mockall::predicate::eq;
use portal_frontend_common::{AuthConfig, MemoryStorage, Route, ToastVariant};
use portal_http::ClientError;
use portal_http::types::{LoginRequest, RegisterRequest};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials() -> LoginRequest {
    LoginRequest {
        email: "ada@example.com".to_string(),
        password: "hunter2".to_string(),
    }
}

#[tokio::test]
async fn login_returns_tokens_without_persisting_them() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/student/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "access-1",
            "refresh_token": "refresh-1",
            "links": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let storage = MemoryStorage::new();
    let session = session(&server, &storage, MockNavigator::new());

    let tokens = session.login(&credentials()).await.unwrap();
    assert_eq!(tokens.access_token, "access-1");
    assert_eq!(tokens.refresh_token, "refresh-1");
    assert!(session.tokens().pair().is_empty());
    assert!(storage.is_empty());

    // Persisting is the caller's explicit second step
    session.set_access_token(Some(tokens.access_token));
    session.set_refresh_token(Some(tokens.refresh_token));
    assert!(session.tokens().pair().is_complete());
    assert_eq!(storage.len(), 2);
}

#[tokio::test]
async fn refresh_returns_token_without_persisting_it() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token/refresh"))
        .and(body_json(json!({ "refresh_token": "refresh-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "access-2",
            "links": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let storage = MemoryStorage::new();
    seed(&storage, Some("access-1"), Some("refresh-1"));
    let session = session(&server, &storage, MockNavigator::new());

    let refreshed = session.refresh_access_token("refresh-1").await.unwrap();
    assert_eq!(refreshed.access_token, "access-2");
    assert_eq!(session.tokens().access_token().as_deref(), Some("access-1"));
}

#[tokio::test]
async fn me_presents_stored_access_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "birth_date": "1815-12-10",
            "role": 1,
            "links": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let storage = MemoryStorage::new();
    seed(&storage, Some("access-1"), Some("refresh-1"));
    let session = session(&server, &storage, MockNavigator::new());

    let user = session.me().await.unwrap();
    assert_eq!(user.name, "Ada Lovelace");
    assert!(session.notifications().toasts().is_empty());
}

#[tokio::test]
async fn bearer_follows_token_updates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("authorization", "Bearer access-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1",
            "name": "Ada",
            "email": "ada@example.com",
            "birth_date": "1815-12-10",
            "role": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let storage = MemoryStorage::new();
    seed(&storage, Some("access-1"), Some("refresh-1"));
    let session = session(&server, &storage, MockNavigator::new());

    session.set_access_token(Some("access-2".into()));
    assert!(session.me().await.is_ok());
}

#[tokio::test]
async fn failed_request_notifies_and_rejects() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/student/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Invalid credentials",
            "links": []
        })))
        .mount(&server)
        .await;

    let storage = MemoryStorage::new();
    let session = session(&server, &storage, MockNavigator::new());

    let result = session.login(&credentials()).await;
    assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));

    let toasts = session.notifications().toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, AuthConfig::REQUEST_FAILED_TITLE);
    assert_eq!(toasts[0].description, "Invalid credentials");
    assert_eq!(toasts[0].variant, ToastVariant::Destructive);
}

#[tokio::test]
async fn failed_request_without_message_uses_fallback_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/student/register"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let session = session(&server, &MemoryStorage::new(), MockNavigator::new());
    let result = session
        .register(&RegisterRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "hunter2".into(),
        })
        .await;

    assert!(result.is_err());
    assert_eq!(
        session.notifications().toasts()[0].description,
        "The request failed."
    );
}

#[tokio::test]
async fn logout_clears_tokens_and_navigates_to_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/logout"))
        .and(body_json(json!({ "refresh_token": "refresh-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Logged out",
            "links": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let storage = MemoryStorage::new();
    seed(&storage, Some("access-1"), Some("refresh-1"));

    let mut navigator = MockNavigator::new();
    navigator
        .expect_replace()
        .with(eq(Route::Login))
        .times(1)
        .return_const(());
    let session = session(&server, &storage, navigator);

    let response = session.logout("refresh-1").await.unwrap();
    assert_eq!(response.message, "Logged out");
    assert!(session.tokens().pair().is_empty());
    assert!(storage.is_empty());
}

#[tokio::test]
async fn logout_clears_tokens_even_when_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/logout"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Refresh token expired",
            "links": []
        })))
        .mount(&server)
        .await;

    let storage = MemoryStorage::new();
    seed(&storage, Some("access-1"), Some("refresh-1"));
    let session = session(&server, &storage, any_navigator());

    assert!(session.logout("refresh-1").await.is_err());
    assert!(session.tokens().pair().is_empty());
    assert_eq!(
        session.notifications().toasts()[0].description,
        "Refresh token expired"
    );
}
