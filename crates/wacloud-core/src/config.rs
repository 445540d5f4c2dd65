//! Configuration module
//!
//! Transport configuration for the Cloud API: base URL, API version prefix,
//! and the access credential. The values are injected explicitly into the
//! client and protocol components at construction; nothing reads them as
//! ambient global state.

use std::env;

use crate::error::{Error, Result};

const DEFAULT_BASE_URL: &str = "https://graph.facebook.com";
const DEFAULT_API_VERSION: &str = "v23.0";

/// Connection settings for the Cloud API.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Scheme and host, without a trailing slash.
    pub base_url: String,
    /// Version path segment, e.g. "v23.0".
    pub api_version: String,
    /// Access token injected into every request.
    pub access_token: String,
}

impl ApiConfig {
    /// Configuration with the production base URL and current API version.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            access_token: access_token.into(),
        }
    }

    /// Create config from environment: WACLOUD_ACCESS_TOKEN (required),
    /// WACLOUD_BASE_URL and WACLOUD_API_VERSION (optional overrides).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let access_token = env::var("WACLOUD_ACCESS_TOKEN")
            .map_err(|_| Error::Config("WACLOUD_ACCESS_TOKEN is not set".to_string()))?;

        let mut config = Self::new(access_token);
        if let Ok(base_url) = env::var("WACLOUD_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(api_version) = env::var("WACLOUD_API_VERSION") {
            config.api_version = api_version;
        }
        Ok(config)
    }

    /// Override the base URL (used to point tests at a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the API version path segment.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Full URL for an API path: `{base_url}/{api_version}/{path}`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.api_version,
            path.trim_start_matches('/')
        )
    }
}
