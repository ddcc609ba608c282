//! Taskboard API client

pub mod error;

use error::ClientError;
use reqwest::{Client, ClientBuilder, header};
use std::sync::Arc;
use std::time::Duration;
use taskboard_session::TokenStore;
use tracing::debug;

const DEFAULT_USER_AGENT: &str = concat!("taskboard-client/", env!("CARGO_PKG_VERSION"));

/// API client bound to a token store
///
/// The token is read once per request, so a login or logout takes effect on
/// the next call without rebuilding the client.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: Arc<TokenStore>,
}

impl ApiClient {
    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The token store requests authenticate from
    pub fn token_store(&self) -> &Arc<TokenStore> {
        &self.tokens
    }

    /// Create a request builder, authenticated when a token is present
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let request = self.client.request(method, url);

        match self.tokens.get_token() {
            Some(token) => request.header(header::AUTHORIZATION, token.bearer()),
            None => request,
        }
    }

    /// Send a request and decode a JSON success body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            debug!(status = status.as_u16(), "Request failed");
            Err(ClientError::from_status(status, message))
        }
    }

    /// Send a request, discarding any success body
    pub async fn execute_empty(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }

    /// GET `path` and return the JSON body
    pub async fn get_json(&self, path: &str) -> Result<serde_json::Value, ClientError> {
        let request = self.request(reqwest::Method::GET, path);
        self.execute(request).await
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    tokens: Option<Arc<TokenStore>>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ApiClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the token store requests read their credential from
    pub fn token_store(mut self, tokens: Arc<TokenStore>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Set the request timeout (ignored in the browser)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        let tokens = self
            .tokens
            .ok_or_else(|| ClientError::Configuration("token_store is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        client_builder = client_builder.user_agent(
            self.user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        );

        let client = client_builder.build()?;

        Ok(ApiClient {
            client,
            base_url,
            tokens,
        })
    }
}
