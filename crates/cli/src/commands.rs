//! CLI commands

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use taskboard_http::types::LoginRequest;
use taskboard_http::{ApiClient, ClientError, SessionService};
use taskboard_session::TokenStore;
use tracing::info;

use crate::config;

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or change the stored token
    Token {
        #[command(subcommand)]
        command: TokenCommands,
    },

    /// Log in and store the returned token
    Login {
        #[arg(long)]
        email: String,

        #[arg(long, env = "TASKBOARD_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Log out, clearing the stored token even if the server is unreachable
    Logout,

    /// GET an API path with the stored credential and print the JSON body
    Get {
        /// Path relative to the API base URL, e.g. /api/workspaces
        path: String,
    },
}

#[derive(Subcommand)]
pub enum TokenCommands {
    /// Show whether a token is stored
    Show {
        /// Print the token itself
        #[arg(long)]
        reveal: bool,
    },

    /// Store a token obtained elsewhere
    Set { value: String },

    /// Remove the stored token
    Clear,
}

/// Options shared by commands that talk to the API
pub struct ApiOptions {
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl Commands {
    pub async fn execute(self, data_dir: Option<PathBuf>, api: ApiOptions) -> Result<()> {
        let data_dir = config::resolve_data_dir(data_dir);
        let tokens = config::open_token_store(&data_dir)?;

        match self {
            Commands::Token { command } => {
                println!("{}", command.execute(&tokens));
                Ok(())
            }
            Commands::Login { email, password } => {
                let session = SessionService::new(build_client(&api, tokens)?);
                let info = session.login(LoginRequest { email, password }).await?;
                match info.name.or(info.user_id) {
                    Some(who) => println!("Logged in as {who}"),
                    None => println!("Logged in"),
                }
                Ok(())
            }
            Commands::Logout => {
                match build_client(&api, Arc::clone(&tokens)) {
                    Ok(client) => SessionService::new(client).logout().await,
                    Err(e) => {
                        info!("No API configured ({e}), clearing local token only");
                        tokens.clear_token();
                    }
                }
                println!("Logged out");
                Ok(())
            }
            Commands::Get { path } => {
                let client = build_client(&api, tokens)?;
                let body = client.get_json(&path).await.map_err(with_login_hint)?;
                println!("{}", serde_json::to_string_pretty(&body)?);
                Ok(())
            }
        }
    }
}

impl TokenCommands {
    /// Apply the command and return what to print
    pub fn execute(self, tokens: &TokenStore) -> String {
        match self {
            TokenCommands::Show { reveal } => match tokens.get_token() {
                Some(token) if reveal => token.to_string(),
                Some(_) => "Authenticated (use --reveal to print the token)".to_string(),
                None => "Not authenticated".to_string(),
            },
            TokenCommands::Set { value } => {
                tokens.set_token(&value);
                if tokens.is_authenticated() {
                    "Token stored".to_string()
                } else {
                    "Blank token given, stored token cleared".to_string()
                }
            }
            TokenCommands::Clear => {
                tokens.clear_token();
                "Token cleared".to_string()
            }
        }
    }
}

/// Point the user at `login` when the stored token was refused
fn with_login_hint(error: ClientError) -> anyhow::Error {
    if error.is_unauthorized() {
        anyhow::Error::new(error).context("Stored token was rejected; run `taskboard login`")
    } else {
        error.into()
    }
}

fn build_client(api: &ApiOptions, tokens: Arc<TokenStore>) -> Result<ApiClient> {
    let Some(base_url) = api.base_url.as_deref() else {
        bail!("No API base URL; pass --base-url or set TASKBOARD_API_URL");
    };

    ApiClient::builder()
        .base_url(base_url)
        .token_store(tokens)
        .timeout(api.timeout)
        .build()
        .context("Failed to build API client")
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_session::{FileStorage, SessionConfig};

    fn store_in(dir: &std::path::Path) -> Arc<TokenStore> {
        TokenStore::shared(FileStorage::in_dir(dir), &SessionConfig::without_default())
    }

    #[test]
    fn test_token_commands_persist_across_invocations() {
        let dir = tempfile::tempdir().unwrap();

        let output = TokenCommands::Set {
            value: "  tok-123  ".to_string(),
        }
        .execute(&store_in(dir.path()));
        assert_eq!(output, "Token stored");

        let output = TokenCommands::Show { reveal: true }.execute(&store_in(dir.path()));
        assert_eq!(output, "tok-123");

        let output = TokenCommands::Show { reveal: false }.execute(&store_in(dir.path()));
        assert!(!output.contains("tok-123"));

        TokenCommands::Clear.execute(&store_in(dir.path()));
        let output = TokenCommands::Show { reveal: true }.execute(&store_in(dir.path()));
        assert_eq!(output, "Not authenticated");
    }

    #[test]
    fn test_blank_set_clears() {
        let dir = tempfile::tempdir().unwrap();
        let tokens = store_in(dir.path());
        tokens.set_token("abc");

        let output = TokenCommands::Set {
            value: "   ".to_string(),
        }
        .execute(&tokens);
        assert_eq!(output, "Blank token given, stored token cleared");
        assert!(tokens.get_token().is_none());
    }

    #[test]
    fn test_rejected_token_suggests_login() {
        let error = with_login_hint(ClientError::AuthenticationFailed("expired".into()));
        assert!(format!("{error:#}").contains("taskboard login"));

        let error = with_login_hint(ClientError::NotFound("no such project".into()));
        assert!(!format!("{error:#}").contains("taskboard login"));
    }

    #[test]
    fn test_build_client_requires_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let api = ApiOptions {
            base_url: None,
            timeout: Duration::from_secs(5),
        };
        assert!(build_client(&api, store_in(dir.path())).is_err());
    }
}
