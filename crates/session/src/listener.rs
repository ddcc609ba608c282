//! Token change listeners

use crate::error::ListenerError;
use crate::token::Token;
use std::sync::{Arc, Mutex, PoisonError, Weak};

/// Callback invoked whenever the token changes
///
/// Closures of the shape `Fn(Option<&Token>) -> Result<(), ListenerError>`
/// implement this directly.
pub trait TokenListener: Send + Sync {
    fn on_token_changed(&self, token: Option<&Token>) -> Result<(), ListenerError>;
}

impl<F> TokenListener for F
where
    F: Fn(Option<&Token>) -> Result<(), ListenerError> + Send + Sync,
{
    fn on_token_changed(&self, token: Option<&Token>) -> Result<(), ListenerError> {
        self(token)
    }
}

type ListenerId = u64;

struct Registration {
    id: ListenerId,
    listener: Arc<dyn TokenListener>,
}

/// Ordered set of listeners
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    next_id: ListenerId,
    entries: Vec<Registration>,
}

impl ListenerRegistry {
    /// Add `listener`, or return the id it is already registered under
    fn register(&mut self, listener: Arc<dyn TokenListener>) -> ListenerId {
        let identity = Arc::as_ptr(&listener).cast::<()>();
        if let Some(existing) = self
            .entries
            .iter()
            .find(|entry| Arc::as_ptr(&entry.listener).cast::<()>() == identity)
        {
            return existing.id;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Registration { id, listener });
        id
    }

    fn unregister(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Listeners in registration order
    pub(crate) fn snapshot(&self) -> Vec<Arc<dyn TokenListener>> {
        self.entries
            .iter()
            .map(|entry| Arc::clone(&entry.listener))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

pub(crate) type SharedRegistry = Arc<Mutex<ListenerRegistry>>;

pub(crate) fn subscribe(
    registry: &SharedRegistry,
    listener: Arc<dyn TokenListener>,
) -> Subscription {
    let id = registry
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .register(listener);
    Subscription {
        id,
        registry: Arc::downgrade(registry),
    }
}

/// Handle returned by [`crate::TokenStore::subscribe`]
///
/// Dropping the handle keeps the listener registered; call
/// [`Subscription::unsubscribe`] to stop notifications.
#[derive(Clone)]
pub struct Subscription {
    id: ListenerId,
    registry: Weak<Mutex<ListenerRegistry>>,
}

impl Subscription {
    /// Stop notifying this listener
    ///
    /// Returns whether a registration was removed. Calling it again, or after
    /// the store is gone, is a no-op.
    pub fn unsubscribe(&self) -> bool {
        match self.registry.upgrade() {
            Some(registry) => registry
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .unregister(self.id),
            None => false,
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
