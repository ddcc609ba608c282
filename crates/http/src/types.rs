//! Session request and response bodies

use serde::{Deserialize, Serialize};

/// Credentials for `POST /auth/login`
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Successful login
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Who the session belongs to, without the credential itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub user_id: Option<String>,
    pub name: Option<String>,
}

impl From<&LoginResponse> for SessionInfo {
    fn from(response: &LoginResponse) -> Self {
        Self {
            user_id: response.user_id.clone(),
            name: response.name.clone(),
        }
    }
}
