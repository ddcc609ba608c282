//! File-backed storage for native builds

use super::DurableStorage;
use crate::error::StorageError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// JSON object file mapping keys to raw string values
///
/// A missing file reads as empty. Writes replace the file through a sibling
/// temp file so a crash never leaves it half written.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Storage file inside `data_dir`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join("storage.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Entries to modify, and whether the file was unparsable
    ///
    /// A corrupt file is treated as empty so the next save replaces it.
    fn load_for_update(&self) -> Result<(BTreeMap<String, String>, bool), StorageError> {
        match self.load() {
            Ok(entries) => Ok((entries, false)),
            Err(StorageError::Serialization(e)) => {
                warn!(path = %self.path.display(), error = %e, "Storage file is corrupt, starting fresh");
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, content)?;
        if let Err(e) = std::fs::rename(&tmp_path, &self.path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }
}

impl DurableStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.load()?.remove(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let (mut entries, _) = self.load_for_update()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let (mut entries, corrupt) = self.load_for_update()?;
        if entries.remove(key).is_none() && !corrupt {
            return Ok(());
        }
        self.save(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::in_dir(dir.path());
        assert_eq!(storage.read("jwt").unwrap(), None);
    }

    #[test]
    fn test_values_survive_new_instance() {
        let dir = tempfile::tempdir().unwrap();
        FileStorage::in_dir(dir.path()).write("jwt", "abc").unwrap();

        let reopened = FileStorage::in_dir(dir.path());
        assert_eq!(reopened.read("jwt").unwrap().as_deref(), Some("abc"));
    }

    #[test]
    fn test_remove_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::in_dir(dir.path());
        storage.write("jwt", "abc").unwrap();
        storage.write("theme", "dark").unwrap();

        storage.remove("jwt").unwrap();
        assert_eq!(storage.read("jwt").unwrap(), None);
        assert_eq!(storage.read("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested").join("storage.json"));
        storage.write("jwt", "abc").unwrap();
        assert!(storage.path().exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::in_dir(dir.path());
        std::fs::write(storage.path(), "not json").unwrap();

        assert!(matches!(
            storage.read("jwt"),
            Err(StorageError::Serialization(_))
        ));
    }

    #[test]
    fn test_write_replaces_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::in_dir(dir.path());
        std::fs::write(storage.path(), "{ not json").unwrap();

        storage.write("jwt", "fresh-login").unwrap();

        let reopened = FileStorage::in_dir(dir.path());
        assert_eq!(reopened.read("jwt").unwrap().as_deref(), Some("fresh-login"));
    }

    #[test]
    fn test_remove_replaces_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::in_dir(dir.path());
        std::fs::write(storage.path(), "{\"jwt\": 42}").unwrap();

        storage.remove("jwt").unwrap();
        assert_eq!(storage.read("jwt").unwrap(), None);
    }

    #[test]
    fn test_failed_rename_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the target path makes the rename fail
        let target = dir.path().join("storage.json");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("occupied"), "").unwrap();
        let storage = FileStorage::new(target.clone());

        assert!(storage.save(&BTreeMap::new()).is_err());
        assert!(!dir.path().join("storage.json.tmp").exists());
    }
}
