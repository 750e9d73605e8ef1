//! Authentication session operations

use crate::api::ApiService;
use crate::notifications::Notifications;
use crate::routes::Route;
use crate::storage::KeyValueStorage;
use crate::token_store::TokenStore;
use portal_http::client::{ApiClient, error::ClientError};
use portal_http::types::{
    LoginRequest, LoginResource, LogoutResource, RefreshResource, RegisterRequest,
    RegisterResource, UserResource,
};
use std::rc::Rc;

/// Moves the application to another route
pub trait Navigate {
    /// Show `route` in place of the current history entry
    fn replace(&self, route: Route);
}

/// Register/login/logout/refresh/me over the portal API
///
/// `login` and `refresh_access_token` only return the issued tokens; callers
/// persist them with [`AuthSession::set_access_token`] and
/// [`AuthSession::set_refresh_token`].
pub struct AuthSession {
    api: ApiService,
    navigator: Rc<dyn Navigate>,
}

impl AuthSession {
    pub fn new(api: ApiService, navigator: Rc<dyn Navigate>) -> Self {
        Self { api, navigator }
    }

    /// Wire a session against `base_url` with tokens kept in `storage`
    pub fn connect(
        base_url: impl Into<String>,
        storage: Rc<dyn KeyValueStorage>,
        navigator: Rc<dyn Navigate>,
    ) -> Result<Self, ClientError> {
        let client = ApiClient::new(base_url)?;
        let api = ApiService::new(client, TokenStore::new(storage), Notifications::new());
        Ok(Self::new(api, navigator))
    }

    pub fn tokens(&self) -> &TokenStore {
        self.api.tokens()
    }

    pub fn notifications(&self) -> &Notifications {
        self.api.notifications()
    }

    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<RegisterResource, ClientError> {
        self.api.register(request).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResource, ClientError> {
        self.api.login(request).await
    }

    /// Revoke the session server-side, then clear tokens and go to the login page
    ///
    /// The local cleanup runs whether or not the server accepted the logout.
    pub async fn logout(&self, refresh_token: &str) -> Result<LogoutResource, ClientError> {
        let result = self.api.logout(refresh_token).await;
        if let Err(e) = &result {
            tracing::info!(error = %e, "logout rejected by server, clearing local session anyway");
        }

        self.tokens().clear();
        self.navigator.replace(Route::Login);
        result
    }

    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<RefreshResource, ClientError> {
        self.api.refresh_token(refresh_token).await
    }

    pub async fn me(&self) -> Result<UserResource, ClientError> {
        self.api.me().await
    }

    pub fn set_access_token(&self, token: Option<String>) {
        self.tokens().set_access_token(token);
    }

    pub fn set_refresh_token(&self, token: Option<String>) {
        self.tokens().set_refresh_token(token);
    }
}
