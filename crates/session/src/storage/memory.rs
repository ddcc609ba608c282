//! In-process storage

use super::DurableStorage;
use crate::error::StorageError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Map-backed storage
///
/// Clones share the same map, so handing a clone to a second
/// [`crate::TokenStore`] behaves like reloading against the same origin.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value under `key`
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DurableStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.write("jwt", "abc").unwrap();
        assert_eq!(other.read("jwt").unwrap().as_deref(), Some("abc"));

        other.remove("jwt").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_remove_missing_is_ok() {
        let storage = MemoryStorage::new();
        assert!(storage.remove("missing").is_ok());
    }
}
