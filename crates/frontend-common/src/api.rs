//! API access with bearer attachment and failure notifications

use crate::notifications::Notifications;
use crate::token_store::TokenStore;
use portal_http::client::{ApiClient, error::ClientError};
use portal_http::types::{
    LoginRequest, LoginResource, LogoutResource, RefreshResource, RegisterRequest,
    RegisterResource, UserResource,
};
use std::future::Future;

/// Wrapper around [`ApiClient`] bound to the session's tokens and notifications
///
/// Each call presents the access token current at send time. Failures are
/// shown to the user and still returned to the caller.
#[derive(Clone)]
pub struct ApiService {
    client: ApiClient,
    tokens: TokenStore,
    notifications: Notifications,
}

impl ApiService {
    pub fn new(client: ApiClient, tokens: TokenStore, notifications: Notifications) -> Self {
        Self {
            client,
            tokens,
            notifications,
        }
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    /// Client carrying the currently stored access token, if any
    pub fn client(&self) -> ApiClient {
        self.client.with_bearer(self.tokens.access_token())
    }

    /// Surface a failed call to the user
    pub fn report_error(&self, error: &ClientError) {
        tracing::warn!(error = %error, status = ?error.status(), "API request failed");
        self.notifications.request_failed(error.user_message());
    }

    /// Await an API call, notifying on failure and propagating the result
    pub async fn with_error_notification<T, F>(&self, api_call: F) -> Result<T, ClientError>
    where
        F: Future<Output = Result<T, ClientError>>,
    {
        match api_call.await {
            Ok(result) => Ok(result),
            Err(error) => {
                self.report_error(&error);
                Err(error)
            }
        }
    }

    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<RegisterResource, ClientError> {
        let client = self.client();
        self.with_error_notification(client.register(request)).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResource, ClientError> {
        let client = self.client();
        self.with_error_notification(client.login(request)).await
    }

    pub async fn logout(&self, refresh_token: &str) -> Result<LogoutResource, ClientError> {
        let client = self.client();
        self.with_error_notification(client.logout(refresh_token)).await
    }

    pub async fn refresh_token(&self, refresh_token: &str) -> Result<RefreshResource, ClientError> {
        let client = self.client();
        self.with_error_notification(client.refresh_token(refresh_token)).await
    }

    pub async fn me(&self) -> Result<UserResource, ClientError> {
        let client = self.client();
        self.with_error_notification(client.me()).await
    }
}
