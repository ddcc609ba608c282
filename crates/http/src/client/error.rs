//! Errors from talking to the Taskboard API

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (DNS, connect, timeout)
    #[error("Could not reach the Taskboard API: {0}")]
    Transport(#[from] reqwest::Error),

    /// 401, or a login that yielded no usable token
    #[error("Not signed in or session expired: {0}")]
    AuthenticationFailed(String),

    #[error("Access denied: {0}")]
    Forbidden(String),

    #[error("No such resource: {0}")]
    NotFound(String),

    /// Any other 4xx
    #[error("API rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// 5xx, or a status the client does not otherwise classify
    #[error("API failed ({status}): {message}")]
    Server { status: u16, message: String },

    /// Success status, but the body is not the JSON the caller asked for
    #[error("Unexpected response body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("Invalid client configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Classify a non-success response; `message` is the response text
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::AuthenticationFailed(message),
            StatusCode::FORBIDDEN => Self::Forbidden(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            s if s.is_client_error() => Self::Rejected {
                status: s.as_u16(),
                message,
            },
            s => Self::Server {
                status: s.as_u16(),
                message,
            },
        }
    }

    /// The stored credential is missing, expired or revoked
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }
}
