//! services/api/src/error.rs
//!
//! Errors that can stop the server from starting or serving.

use crate::config::ConfigError;

/// Returned from `main`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The environment could not be turned into a `Config`.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Binding the listener or serving failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Startup problems with no dedicated variant, such as a bad CORS origin.
    #[error("Startup failed: {0}")]
    Internal(String),
}
