//! Durable key/value storage backends
//!
//! Every call returns a `Result` so callers can decide what a fault means.
//! The token store treats all of them as recoverable.

mod memory;
#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod web;

pub use memory::MemoryStorage;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use web::WebStorage;

use crate::error::StorageError;

/// Persistent string storage that survives a reload
#[cfg_attr(test, mockall::automock)]
pub trait DurableStorage: Send + Sync {
    /// Read the value under `key`; `Ok(None)` when no entry exists
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous entry
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the entry under `key`; deleting a missing entry is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
