//! Wire models for the Cloud API media and flow-asset endpoints.
//!
//! Field names match the remote JSON exactly and are case-sensitive. Fields
//! the remote may omit default to their empty value, so a missing identifier
//! or handle surfaces as a protocol error at the call site instead of a
//! decode failure.

use serde::{Deserialize, Serialize};

/// Metadata record returned for a media id.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct MediaMetadata {
    #[serde(default)]
    pub messaging_product: String,
    /// Transient download URL. It expires, so re-resolve per use instead of
    /// persisting it.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub sha256: String,
    #[serde(default)]
    pub file_size: u64,
    #[serde(default)]
    pub id: String,
}

/// Reply to a media DELETE call.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub success: bool,
}

/// Reply to a single-request media upload.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct MediaUploadResponse {
    #[serde(default)]
    pub id: String,
}

/// Reply to an upload-session creation call.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UploadSessionResponse {
    #[serde(default)]
    pub id: String,
}

/// Reply to a resumable data push. `h` is the media handle usable inside
/// other outbound payloads (e.g. template header_handle) in place of
/// re-uploading.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ResumableUploadResponse {
    #[serde(default)]
    pub h: String,
}

/// A single validation problem reported for an uploaded Flow JSON document.
///
/// The span fields are only present when the remote can point at a location
/// in the document.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FlowValidationError {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub error_type: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_start: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_end: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_start: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_end: Option<u32>,
}

/// Outcome of a Flow JSON asset upload.
///
/// The transport call can succeed while the document is rejected; check
/// `success` and `validation_errors`, not just the HTTP status.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct AssetUploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub validation_errors: Vec<FlowValidationError>,
}
