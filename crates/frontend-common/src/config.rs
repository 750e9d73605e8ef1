//! Frontend configuration

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Storage key holding the access token
    pub const ACCESS_TOKEN_KEY: &'static str = "access_token";

    /// Storage key holding the refresh token
    pub const REFRESH_TOKEN_KEY: &'static str = "refresh_token";

    /// How long a notification stays on screen, in milliseconds
    pub const TOAST_DURATION_MS: u32 = 5_000;

    /// Title of the notification raised for failed API requests
    pub const REQUEST_FAILED_TITLE: &'static str = "Could not complete the request";
}

/// API endpoint configuration
pub struct ApiConfig;

impl ApiConfig {
    /// Base URL baked in at build time, e.g. `PORTAL_API_URL=https://api.example.com`
    pub const BUILD_BASE_URL: Option<&'static str> = option_env!("PORTAL_API_URL");

    /// Get the base URL for API calls
    pub fn base_url() -> String {
        if let Some(url) = Self::BUILD_BASE_URL
            && !url.trim().is_empty()
        {
            return url.to_string();
        }

        // Try to get from window location
        if cfg!(target_arch = "wasm32")
            && let Some(window) = web_sys::window()
            && let Ok(origin) = window.location().origin()
        {
            return origin;
        }

        // Default to relative URLs
        String::new()
    }
}
