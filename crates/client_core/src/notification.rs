use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::debug;

/// How long a notification stays visible before clearing itself.
pub const NOTIFICATION_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub detail: Option<String>,
}

/// Holds at most one live notification, auto-expiring after a fixed lifetime.
///
/// Superseding a notification aborts the pending expiry task before a new one
/// is spawned; at most one timer is outstanding, and a stale timer can never
/// clear a newer message early.
pub struct NotificationService {
    current: Arc<watch::Sender<Option<Notification>>>,
    timer: Mutex<Option<JoinHandle<()>>>,
    lifetime: Duration,
}

impl NotificationService {
    pub fn new() -> Self {
        Self::with_lifetime(NOTIFICATION_LIFETIME)
    }

    pub fn with_lifetime(lifetime: Duration) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            current: Arc::new(tx),
            timer: Mutex::new(None),
            lifetime,
        }
    }

    pub async fn show_success(&self, message: impl Into<String>, detail: Option<String>) {
        self.show(NotificationKind::Success, message.into(), detail)
            .await;
    }

    pub async fn show_error(&self, message: impl Into<String>, detail: Option<String>) {
        self.show(NotificationKind::Error, message.into(), detail)
            .await;
    }

    /// Remove the current notification and cancel any pending expiry.
    /// A no-op when nothing is visible.
    pub async fn clear(&self) {
        self.current.send_replace(None);
        if let Some(timer) = self.timer.lock().await.take() {
            timer.abort();
        }
    }

    /// The currently visible notification, if any.
    pub fn current(&self) -> Option<Notification> {
        self.current.borrow().clone()
    }

    /// Reactive view of the notification slot for presentation layers.
    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.current.subscribe()
    }

    async fn show(&self, kind: NotificationKind, message: String, detail: Option<String>) {
        debug!(?kind, %message, "showing notification");
        self.current.send_replace(Some(Notification {
            message,
            kind,
            detail,
        }));

        let mut timer = self.timer.lock().await;
        if let Some(previous) = timer.take() {
            previous.abort();
        }
        let slot = Arc::clone(&self.current);
        let lifetime = self.lifetime;
        *timer = Some(tokio::spawn(async move {
            tokio::time::sleep(lifetime).await;
            slot.send_replace(None);
        }));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}
