//! Taskboard HTTP client
//!
//! Every request reads the current token from the shared
//! [`TokenStore`](taskboard_session::TokenStore) and attaches it as a bearer
//! credential. The session service is the only writer of that token.

pub mod client;
pub mod session;
pub mod types;

pub use client::{ApiClient, ApiClientBuilder, error::ClientError};
pub use session::SessionService;
