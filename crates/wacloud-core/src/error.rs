//! Error types module
//!
//! Every failure mode a caller of the media-transfer operations can observe
//! is a variant of [`Error`]: transport failures, non-2xx statuses, bodies
//! that fail to decode, well-formed responses missing a required field, and
//! responses that explicitly report failure. The raw response body is kept
//! on the variants where it helps diagnose remote-side problems.
//!
//! A 2xx transport status is never treated as logical success on its own;
//! the protocol components inspect payload-level indicators and surface
//! [`Error::MissingField`] or [`Error::Rejected`] when those are absent or
//! negative.

/// Unified error type for all wacloud operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network or HTTP-layer failure reported by the underlying client.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote returned a non-2xx status. The raw body is preserved.
    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response: {message}; body: {body}")]
    Decode { message: String, body: String },

    /// A well-formed response was missing a required field.
    #[error("no `{field}` in response: {body}")]
    MissingField { field: &'static str, body: String },

    /// A well-formed response explicitly reported failure.
    #[error("{context} failed or returned success=false: {body}")]
    Rejected { context: &'static str, body: String },

    /// Client construction or configuration problem.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a [`Error::Decode`] carrying the offending body.
    pub fn decode(body: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Decode {
            message: source.to_string(),
            body: body.into(),
        }
    }

    /// HTTP status code, when this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the remote explicitly rejected an otherwise well-formed call.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Error::Rejected { .. })
    }
}

/// Convenience result alias used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;
