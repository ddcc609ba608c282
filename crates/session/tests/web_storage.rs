//! Browser storage tests, run with `wasm-pack test --headless --firefox crates/session`

#![cfg(target_arch = "wasm32")]

use taskboard_session::{DurableStorage, SessionConfig, TokenStore, WebStorage};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_local_storage_round_trip() {
    assert!(WebStorage::is_available());
    let storage = WebStorage::new();
    storage.write("taskboard-test", "abc").unwrap();
    assert_eq!(storage.read("taskboard-test").unwrap().as_deref(), Some("abc"));

    storage.remove("taskboard-test").unwrap();
    assert_eq!(storage.read("taskboard-test").unwrap(), None);
}

#[wasm_bindgen_test]
fn test_token_survives_reload() {
    let config = SessionConfig::without_default().with_storage_key("taskboard-reload");

    TokenStore::initialize(WebStorage::new(), &config).set_token("  tok-123  ");
    let reloaded = TokenStore::initialize(WebStorage::new(), &config);
    assert_eq!(reloaded.get_token().unwrap(), "tok-123");

    reloaded.clear_token();
    assert_eq!(WebStorage::new().read("taskboard-reload").unwrap(), None);
}
