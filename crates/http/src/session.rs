//! Login and logout

use crate::client::{ApiClient, error::ClientError};
use crate::types::{LoginRequest, LoginResponse, SessionInfo};
use reqwest::Method;
use taskboard_session::Token;
use tracing::{info, warn};

const LOGIN_PATH: &str = "/auth/login";
const LOGOUT_PATH: &str = "/auth/logout";

/// Writes the token store on login and logout
#[derive(Clone)]
pub struct SessionService {
    client: ApiClient,
}

impl SessionService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a token and store it
    ///
    /// A response carrying a blank token is treated as a failed login and
    /// leaves the current token untouched.
    pub async fn login(&self, request: LoginRequest) -> Result<SessionInfo, ClientError> {
        let response: LoginResponse = self
            .client
            .execute(self.client.request(Method::POST, LOGIN_PATH).json(&request))
            .await?;

        if Token::normalize(&response.token).is_none() {
            return Err(ClientError::AuthenticationFailed(
                "server returned an empty token".to_string(),
            ));
        }

        self.client.token_store().set_token(&response.token);
        info!(user_id = ?response.user_id, "Logged in");
        Ok(SessionInfo::from(&response))
    }

    /// End the session
    ///
    /// The server is told first, with the current token. Whatever it answers,
    /// the local token is cleared.
    pub async fn logout(&self) {
        if self.client.token_store().is_authenticated() {
            let request = self.client.request(Method::POST, LOGOUT_PATH);
            if let Err(e) = self.client.execute_empty(request).await {
                warn!(error = %e, "Remote logout failed, clearing local session anyway");
            }
        }

        self.client.token_store().clear_token();
        info!("Logged out");
    }
}
