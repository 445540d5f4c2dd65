//! Shared HTTP client for the Cloud API.
//!
//! Provides [`ApiClient`], which owns the pooled HTTP connection, prefixes
//! every path with the base URL and API version, and injects the Bearer
//! credential. The JSON, multipart, and DELETE helpers all return the raw
//! response body as text so the protocol components own decoding and can
//! attach the body to their errors.
//!
//! Calls that need a non-default authorization scheme or a raw-bytes body
//! (the resumable data push) bypass the helpers and build their own request
//! through [`ApiClient::http`].

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wacloud_core::{ApiConfig, Error, Result};

/// HTTP client for the Cloud API with credential injection.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|err| Error::Config(format!("failed to create HTTP client: {}", err)))?;

        Ok(Self { http, config })
    }

    /// Create a client from environment variables (see [`ApiConfig::from_env`]).
    pub fn from_env() -> Result<Self> {
        Self::new(ApiConfig::from_env()?)
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Raw client for requests that bypass the default builder. The caller
    /// must build the full URL via [`ApiConfig::endpoint`] and set its own
    /// authorization header.
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// GET an API path, returning the raw response body.
    pub async fn get(&self, path: &str) -> Result<String> {
        let url = self.config.endpoint(path);
        self.send(self.http.get(&url)).await
    }

    /// POST a JSON body to an API path, returning the raw response body.
    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<String> {
        let url = self.config.endpoint(path);
        self.send(self.http.post(&url).json(body)).await
    }

    /// POST a multipart form to an API path, returning the raw response
    /// body. reqwest generates the boundary and content-type.
    pub async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<String> {
        let url = self.config.endpoint(path);
        self.send(self.http.post(&url).multipart(form)).await
    }

    /// DELETE an API path, returning the raw response body.
    pub async fn delete(&self, path: &str) -> Result<String> {
        let url = self.config.endpoint(path);
        self.send(self.http.delete(&url)).await
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String> {
        let request = request.header(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", self.config.access_token),
        );

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Cloud API request failed");
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

/// Decode a JSON response body, attaching the offending body to the error
/// on failure.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|err| Error::decode(body, err))
}
