//! Session error types
//!
//! None of these escape [`crate::TokenStore`]: storage and listener failures
//! are logged and absorbed there. They exist so backends and listeners can
//! report what went wrong.

use thiserror::Error;

/// Durable storage failure
#[derive(Debug, Error)]
pub enum StorageError {
    /// Storage is disabled or cannot be reached (private browsing, sandboxed frame)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Filesystem error
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be encoded or decoded
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Browser storage call rejected (quota, permissions)
    #[error("Web storage error: {0}")]
    Web(String),
}

impl StorageError {
    /// Create an unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}

/// Failure reported by a token listener
#[derive(Debug, Error)]
#[error("Listener failed: {message}")]
pub struct ListenerError {
    message: String,
}

impl ListenerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[cfg(not(target_arch = "wasm32"))]
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}
