//! Taskboard session state
//!
//! Holds the authentication token for the running client, persists it to
//! durable key/value storage and tells interested parties when it changes.

pub mod config;
pub mod error;
pub mod listener;
pub mod storage;
pub mod store;
pub mod telemetry;
pub mod token;

pub use config::SessionConfig;
pub use error::{ConfigError, ListenerError, StorageError};
pub use listener::{Subscription, TokenListener};
pub use storage::{DurableStorage, MemoryStorage};
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use storage::WebStorage;
pub use store::TokenStore;
pub use token::Token;
