//! Session configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage key the token is persisted under
pub const DEFAULT_STORAGE_KEY: &str = "jwt";

/// Token baked in at build time for local development
///
/// Set `TASKBOARD_DEFAULT_TOKEN` when compiling to populate it.
pub const BUILD_DEFAULT_TOKEN: Option<&str> = option_env!("TASKBOARD_DEFAULT_TOKEN");

/// Token store configuration
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Durable storage key holding the token
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Fallback token used when storage holds none
    #[serde(default = "default_token")]
    pub default_token: Option<String>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_token() -> Option<String> {
    BUILD_DEFAULT_TOKEN.map(str::to_string)
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            default_token: default_token(),
        }
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("storage_key", &self.storage_key)
            .field(
                "default_token",
                &self.default_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl SessionConfig {
    /// Config with no build-time default, regardless of how the crate was compiled
    pub fn without_default() -> Self {
        Self {
            storage_key: default_storage_key(),
            default_token: None,
        }
    }

    /// Replace the fallback token
    pub fn with_default_token(mut self, token: impl Into<String>) -> Self {
        self.default_token = Some(token.into());
        self
    }

    /// Replace the storage key
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "storage_key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SessionConfig {
    /// Load configuration from `taskboard.toml` (if present) and `TASKBOARD__*` variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(None)
    }

    /// Load configuration from a specific file, with environment overrides
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        Self::load_with(Some(path))
    }

    fn load_with(path: Option<&std::path::Path>) -> Result<Self, ConfigError> {
        use config::{Config, Environment, File};

        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        builder = match path {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name("taskboard").required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix("TASKBOARD")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_storage_key() {
        let config = SessionConfig::without_default();
        assert_eq!(config.storage_key, "jwt");
        assert!(config.default_token.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_storage_key_is_rejected() {
        let config = SessionConfig::without_default().with_storage_key("  ");
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_debug_redacts_default_token() {
        let config = SessionConfig::without_default().with_default_token("dev-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("dev-secret"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "storage_key = \"auth\"\ndefault_token = \"dev\"\n").unwrap();

        let config = SessionConfig::load_from_file(&path).unwrap();
        assert_eq!(config.storage_key, "auth");
        assert_eq!(config.default_token.as_deref(), Some("dev"));
    }

    #[test]
    fn test_load_from_file_rejects_blank_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "storage_key = \"\"\n").unwrap();

        assert!(SessionConfig::load_from_file(&path).is_err());
    }
}
