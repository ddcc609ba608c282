//! CLI configuration utilities

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use taskboard_session::{FileStorage, SessionConfig, TokenStore};

/// Resolve the state directory: flag, then `TASKBOARD_STATE_DIR`, then the system data dir
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> PathBuf {
    data_dir.unwrap_or_else(|| {
        if let Ok(state_dir) = std::env::var("TASKBOARD_STATE_DIR") {
            PathBuf::from(state_dir)
        } else {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("taskboard")
        }
    })
}

/// Open the token store persisted under `data_dir`
pub fn open_token_store(data_dir: &Path) -> Result<Arc<TokenStore>> {
    let config = SessionConfig::load()?;
    Ok(TokenStore::shared(FileStorage::in_dir(data_dir), &config))
}
