//! Core configuration, error, and wire-model types shared across the
//! wacloud crates.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::ApiConfig;
pub use error::{Error, Result};
