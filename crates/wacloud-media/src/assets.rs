//! Flow JSON asset upload and retrieval.

use wacloud_client::{decode, ApiClient};
use wacloud_core::models::AssetUploadResponse;
use wacloud_core::Result;

const ASSET_NAME: &str = "flow.json";
const ASSET_TYPE: &str = "FLOW_JSON";

/// Multipart upload and plain fetch of a flow's JSON asset.
#[derive(Clone, Debug)]
pub struct FlowAssets {
    client: ApiClient,
}

impl FlowAssets {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Upload or replace the Flow JSON document for a flow.
    ///
    /// The assets endpoint requires multipart/form-data with fixed `name`
    /// and `asset_type` fields alongside the document as a file part. A 2xx
    /// transport status does not imply the document was accepted: inspect
    /// `success` and `validation_errors` on the returned value.
    pub async fn upload_json(&self, flow_id: &str, flow_json: &str) -> Result<AssetUploadResponse> {
        let part = reqwest::multipart::Part::text(flow_json.to_string()).file_name(ASSET_NAME);
        let form = reqwest::multipart::Form::new()
            .text("name", ASSET_NAME)
            .text("asset_type", ASSET_TYPE)
            .part("file", part);

        let path = format!("{}/assets", flow_id);
        let body = self.client.post_multipart(&path, form).await?;

        let response: AssetUploadResponse = decode(&body)?;
        if !response.success {
            tracing::warn!(
                flow_id = %flow_id,
                validation_errors = response.validation_errors.len(),
                "Flow JSON upload rejected by validation"
            );
        }

        Ok(response)
    }

    /// Fetch the current Flow JSON asset as raw text, unparsed.
    pub async fn fetch_json(&self, flow_id: &str) -> Result<String> {
        self.client.get(&format!("{}/assets", flow_id)).await
    }
}
