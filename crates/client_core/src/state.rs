use std::sync::Arc;

use tokio::sync::watch;

/// A single observable value: current-value reads plus change subscription.
///
/// Mutations are synchronous and run to completion before any subscriber is
/// woken, so a transition that sets several signals is never observed
/// half-applied from within the same task.
#[derive(Debug, Clone)]
pub struct Signal<T> {
    inner: Arc<watch::Sender<T>>,
}

impl<T: Clone> Signal<T> {
    pub fn new(value: T) -> Self {
        let (tx, _rx) = watch::channel(value);
        Self {
            inner: Arc::new(tx),
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().clone()
    }

    /// Replace the current value, waking subscribers.
    pub fn set(&self, value: T) {
        self.inner.send_replace(value);
    }

    /// Register for change notifications. The receiver also exposes the
    /// current value, so late subscribers never miss the latest state.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.inner.subscribe()
    }
}

impl<T: Clone + Default> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
