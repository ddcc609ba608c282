//! Browser `localStorage` backend

use super::DurableStorage;
use crate::error::StorageError;
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// `window.localStorage`
///
/// The handle is looked up on every call rather than held, which keeps this
/// type `Send + Sync` and copes with storage being revoked mid-session.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        Self
    }

    /// Whether `localStorage` can be reached at all
    pub fn is_available() -> bool {
        local_storage().is_ok()
    }
}

fn local_storage() -> Result<Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::unavailable("no window"))?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::unavailable("localStorage is disabled")),
        Err(e) => Err(StorageError::unavailable(js_message(&e))),
    }
}

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

impl DurableStorage for WebStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Web(js_message(&e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Web(js_message(&e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Web(js_message(&e)))
    }
}
