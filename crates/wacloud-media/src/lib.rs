//! Media-transfer operations for the Cloud API.
//!
//! Three independent upload protocols plus metadata resolution:
//!
//! - [`MediaUploader`] — one-shot multipart upload, returns a media id.
//! - [`ResumableUploader`] — session-based upload for template media,
//!   returns a reusable media handle.
//! - [`FlowAssets`] — multipart Flow JSON asset upload and retrieval.
//! - [`MediaResolver`] — resolve a media id to its transient download URL,
//!   or delete the media object.
//!
//! The components share nothing but the [`wacloud_client::ApiClient`]
//! transport; independent uploads may run concurrently.

pub mod assets;
pub mod metadata;
pub mod resumable;
pub mod upload;

pub use assets::FlowAssets;
pub use metadata::MediaResolver;
pub use resumable::ResumableUploader;
pub use upload::MediaUploader;
