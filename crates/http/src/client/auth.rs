//! Authentication API client methods

use super::{ApiClient, ClientError};
use crate::types::{
    LoginRequest, LoginResource, LogoutResource, RefreshResource, RefreshTokenRequest,
    RegisterRequest, RegisterResource, UserResource,
};
use reqwest::Method;

impl ApiClient {
    /// Register a new student account
    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<RegisterResource, ClientError> {
        let req = self
            .request(Method::POST, "/student/register")
            .json(request);
        self.execute(req).await
    }

    /// Exchange credentials for an access/refresh token pair
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResource, ClientError> {
        let req = self.request(Method::POST, "/student/login").json(request);
        self.execute(req).await
    }

    /// Revoke a refresh token
    pub async fn logout(&self, refresh_token: &str) -> Result<LogoutResource, ClientError> {
        let req = self
            .request(Method::POST, "/logout")
            .json(&RefreshTokenRequest {
                refresh_token: refresh_token.to_string(),
            });
        self.execute(req).await
    }

    /// Obtain a new access token from a refresh token
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<RefreshResource, ClientError> {
        let req = self
            .request(Method::POST, "/token/refresh")
            .json(&RefreshTokenRequest {
                refresh_token: refresh_token.to_string(),
            });
        self.execute(req).await
    }

    /// Get the profile of the user owning the bearer token
    pub async fn me(&self) -> Result<UserResource, ClientError> {
        let req = self.request(Method::GET, "/users/me");
        self.execute(req).await
    }
}
