//! Session-based resumable upload.
//!
//! Two-phase protocol for media destined for template headers: create an
//! upload session scoped to an app id, then push the payload bytes into the
//! session and receive a media handle. Session creation and the data push
//! are separate so a chunked driver (multiple pushes at increasing offsets)
//! can be layered on later; the current contract is a single push at
//! offset 0.

use bytes::Bytes;
use wacloud_client::{decode, ApiClient};
use wacloud_core::models::{ResumableUploadResponse, UploadSessionResponse};
use wacloud_core::{Error, Result};

/// Resumable upload driver. Holds no per-session state; the session id is
/// passed explicitly between the two phases.
#[derive(Clone, Debug)]
pub struct ResumableUploader {
    client: ApiClient,
}

impl ResumableUploader {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Create an upload session for a payload of `file_length` bytes.
    ///
    /// Returns the opaque session id. A response without an id is terminal
    /// for this attempt; no retry is built in.
    pub async fn create_session(
        &self,
        app_id: &str,
        file_length: u64,
        file_type: &str,
    ) -> Result<String> {
        let path = format!("{}/uploads", app_id);
        let request = serde_json::json!({
            "file_length": file_length,
            "file_type": file_type,
        });

        let body = self.client.post_json(&path, &request).await?;

        let response: UploadSessionResponse = decode(&body)?;
        if response.id.is_empty() {
            return Err(Error::MissingField { field: "id", body });
        }

        tracing::debug!(app_id = %app_id, session_id = %response.id, "Created upload session");
        Ok(response.id)
    }

    /// Push payload bytes into an existing session, starting at `offset`.
    ///
    /// This is the one call that bypasses the shared request builder: the
    /// remote expects the raw bytes as the request body, an `OAuth`-scheme
    /// authorization header instead of `Bearer`, and the offset as a
    /// decimal string in a `file_offset` header. Returns the media handle.
    pub async fn push(&self, session_id: &str, data: Bytes, offset: u64) -> Result<String> {
        let config = self.client.config();
        let url = config.endpoint(session_id);

        let response = self
            .client
            .http()
            .post(&url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("OAuth {}", config.access_token),
            )
            .header("file_offset", offset.to_string())
            .body(data)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                session_id = %session_id,
                status = status.as_u16(),
                "Resumable upload push failed"
            );
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let result: ResumableUploadResponse = decode(&body)?;
        if result.h.is_empty() {
            return Err(Error::MissingField { field: "h", body });
        }

        Ok(result.h)
    }

    /// Create a session and push the whole payload at offset 0.
    ///
    /// Convenience composition of [`Self::create_session`] and
    /// [`Self::push`]; the first failure is propagated. Returns the same
    /// handle the manual two-step sequence would.
    pub async fn upload(&self, app_id: &str, data: Bytes, file_type: &str) -> Result<String> {
        let session_id = self
            .create_session(app_id, data.len() as u64, file_type)
            .await?;
        self.push(&session_id, data, 0).await
    }
}
