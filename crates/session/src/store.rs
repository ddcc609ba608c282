//! Process-wide authentication token store

use crate::config::SessionConfig;
use crate::error::ListenerError;
use crate::listener::{self, SharedRegistry, Subscription, TokenListener};
use crate::storage::DurableStorage;
use crate::token::Token;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{debug, warn};

/// Single source of truth for the current credential
///
/// The in-memory value is authoritative. Durable storage is written on every
/// change so the value survives a reload, but a storage fault never stops a
/// change from taking effect and is never reported to the caller.
///
/// Construct one per process and share it as `Arc<TokenStore>`.
///
/// Listeners run after the write lock is released. With a single writer they
/// observe changes in the order they were made; with concurrent writers two
/// sweeps may interleave, so a listener can see an older value last. Read
/// [`TokenStore::get_token`] for the settled value.
pub struct TokenStore {
    current: RwLock<Option<Token>>,
    storage: Box<dyn DurableStorage>,
    storage_key: String,
    listeners: SharedRegistry,
    // Keeps memory update and persistence of one change together
    write_lock: Mutex<()>,
}

impl TokenStore {
    /// Build the store, restoring a persisted token if there is one
    ///
    /// Falls back to the configured default token when storage is empty or
    /// unreadable, and to no token at all when the default is blank.
    pub fn initialize(storage: impl DurableStorage + 'static, config: &SessionConfig) -> Self {
        let storage_key = config.storage_key.clone();

        let persisted = match storage.read(&storage_key) {
            Ok(value) => value.as_deref().and_then(Token::normalize),
            Err(e) => {
                warn!(key = %storage_key, error = %e, "Failed to read persisted token");
                None
            }
        };

        let initial = match persisted {
            Some(token) => {
                debug!(key = %storage_key, "Restored persisted token");
                Some(token)
            }
            None => {
                let fallback = config.default_token.as_deref().and_then(Token::normalize);
                if fallback.is_some() {
                    debug!("Using configured default token");
                }
                fallback
            }
        };

        Self {
            current: RwLock::new(initial),
            storage: Box::new(storage),
            storage_key,
            listeners: SharedRegistry::default(),
            write_lock: Mutex::new(()),
        }
    }

    /// Initialize and wrap in an `Arc` for sharing
    pub fn shared(storage: impl DurableStorage + 'static, config: &SessionConfig) -> Arc<Self> {
        Arc::new(Self::initialize(storage, config))
    }

    /// Current token; never touches storage
    pub fn get_token(&self) -> Option<Token> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Replace the token
    ///
    /// `candidate` is trimmed and a blank value clears the token. Listeners run
    /// after the value is stored, in registration order, before this returns.
    pub fn set_token(&self, candidate: &str) {
        let token = Token::normalize(candidate);

        {
            let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
            *self.current.write().unwrap_or_else(PoisonError::into_inner) = token.clone();
            self.persist(token.as_ref());
        }

        debug!(authenticated = token.is_some(), "Token updated");
        self.notify(token.as_ref());
    }

    /// Drop the token, as on logout
    pub fn clear_token(&self) {
        self.set_token("");
    }

    /// Register `listener` for future changes
    ///
    /// The listener is not called with the current value. Registering the
    /// same `Arc` again returns a handle to the existing registration.
    pub fn subscribe<L>(&self, listener: Arc<L>) -> Subscription
    where
        L: TokenListener + 'static,
    {
        listener::subscribe(&self.listeners, listener)
    }

    /// Register a closure; every call is a separate registration
    pub fn subscribe_fn<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Option<&Token>) -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        listener::subscribe(&self.listeners, Arc::new(listener))
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn persist(&self, token: Option<&Token>) {
        let result = match token {
            Some(token) => self.storage.write(&self.storage_key, token.as_str()),
            None => self.storage.remove(&self.storage_key),
        };

        if let Err(e) = result {
            warn!(key = %self.storage_key, error = %e, "Failed to persist token, keeping it in memory only");
        }
    }

    fn notify(&self, token: Option<&Token>) {
        // Snapshot so listeners can (un)subscribe from inside a callback
        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .snapshot();

        for listener in listeners {
            match catch_unwind(AssertUnwindSafe(|| listener.on_token_changed(token))) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => warn!(error = %e, "Token listener failed"),
                Err(_) => warn!("Token listener panicked"),
            }
        }
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("storage_key", &self.storage_key)
            .field("authenticated", &self.is_authenticated())
            .field("listeners", &self.listener_count())
            .finish_non_exhaustive()
    }
}
