//! Single-request media upload.

use bytes::Bytes;
use wacloud_client::{decode, ApiClient};
use wacloud_core::models::MediaUploadResponse;
use wacloud_core::{Error, Result};

/// One-shot multipart upload of a media file, scoped to a phone number.
#[derive(Clone, Debug)]
pub struct MediaUploader {
    client: ApiClient,
}

impl MediaUploader {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Upload a file and return the remote-issued media id.
    ///
    /// The form carries the fixed `messaging_product` field and a `file`
    /// part named after the basename of `filename` with the supplied MIME
    /// type. A well-formed response without an `id` means the remote
    /// accepted the call but produced no usable result.
    pub async fn upload(
        &self,
        phone_number_id: &str,
        data: Bytes,
        filename: &str,
        mime_type: &str,
    ) -> Result<String> {
        let basename = std::path::Path::new(filename)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(filename)
            .to_string();

        tracing::debug!(
            phone_number_id = %phone_number_id,
            bytes = data.len(),
            mime_type = %mime_type,
            "Uploading media"
        );

        let part = reqwest::multipart::Part::bytes(data.to_vec())
            .file_name(basename)
            .mime_str(mime_type)
            .map_err(|err| Error::Config(format!("invalid MIME type {}: {}", mime_type, err)))?;
        let form = reqwest::multipart::Form::new()
            .text("messaging_product", "whatsapp")
            .part("file", part);

        let path = format!("{}/media", phone_number_id);
        let body = self.client.post_multipart(&path, form).await?;

        let response: MediaUploadResponse = decode(&body)?;
        if response.id.is_empty() {
            return Err(Error::MissingField { field: "id", body });
        }

        Ok(response.id)
    }
}
