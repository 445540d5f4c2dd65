//! Media metadata resolution and deletion.

use wacloud_client::{decode, ApiClient};
use wacloud_core::models::{DeleteResponse, MediaMetadata};
use wacloud_core::{Error, Result};

/// Resolves media ids to their metadata and deletes media objects.
#[derive(Clone, Debug)]
pub struct MediaResolver {
    client: ApiClient,
}

impl MediaResolver {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the full metadata record for a media id.
    pub async fn metadata(&self, media_id: &str) -> Result<MediaMetadata> {
        let body = self.client.get(media_id).await?;
        decode(&body)
    }

    /// Resolve a media id to its transient download URL.
    ///
    /// The URL expires, so re-resolve it for every use rather than storing
    /// it. Metadata without a URL is a terminal error, not retried: the URL
    /// may be policy-restricted rather than missing transiently.
    pub async fn url(&self, media_id: &str) -> Result<String> {
        let body = self.client.get(media_id).await?;

        let metadata: MediaMetadata = decode(&body)?;
        if metadata.url.is_empty() {
            return Err(Error::MissingField { field: "url", body });
        }

        Ok(metadata.url)
    }

    /// Delete a media object.
    ///
    /// A well-formed response with `success=false` is surfaced as
    /// [`Error::Rejected`], never as silent success.
    pub async fn delete(&self, media_id: &str) -> Result<()> {
        let body = self.client.delete(&format!("media/{}", media_id)).await?;

        let response: DeleteResponse = decode(&body)?;
        if !response.success {
            return Err(Error::Rejected {
                context: "media delete",
                body,
            });
        }

        Ok(())
    }
}
