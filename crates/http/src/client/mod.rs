//! Portal REST client

pub mod auth;
pub mod error;

use crate::types::ErrorResource;
use error::ClientError;
use reqwest::{Client, ClientBuilder, header};

/// Message shown when a failed response carries no usable `message`
pub const GENERIC_ERROR_MESSAGE: &str = "The request failed.";

/// User agent sent by native clients; browsers set their own
#[cfg(not(target_arch = "wasm32"))]
pub const USER_AGENT: &str = concat!("portal-client/", env!("CARGO_PKG_VERSION"));

/// Portal API client
///
/// Cloning is cheap: clones share the underlying connection pool.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    bearer: Option<String>,
}

impl ApiClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Bearer credential attached to outgoing requests, if any
    pub fn bearer(&self) -> Option<&str> {
        self.bearer.as_deref()
    }

    /// Derive a client that presents `bearer` (or nothing) on every request
    #[must_use]
    pub fn with_bearer(&self, bearer: Option<String>) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            bearer,
        }
    }

    /// Create a request builder, attaching the bearer credential when present
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);

        if let Some(bearer) = &self.bearer {
            request = request.header(header::AUTHORIZATION, format!("Bearer {bearer}"));
        }

        request
    }

    /// Execute a request and map non-success statuses to [`ClientError`]
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        } else {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body);
            tracing::debug!(status = status.as_u16(), %message, "request rejected");
            Err(ClientError::from_status(status, message))
        }
    }
}

/// Pull the human-readable message out of an error body
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResource>(body)
        .ok()
        .map(|resource| resource.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    bearer: Option<String>,
}

impl ApiClientBuilder {
    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the bearer token presented on every request
    #[must_use]
    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client_builder = ClientBuilder::new().default_headers(headers);
        #[cfg(not(target_arch = "wasm32"))]
        let client_builder = client_builder.user_agent(USER_AGENT);

        let client = client_builder.build()?;

        Ok(ApiClient {
            client,
            base_url,
            bearer: self.bearer,
        })
    }
}
