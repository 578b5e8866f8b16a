//! User-visible notifications (toasts)

use serde::Serialize;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    /// Shown whenever a fetch fails
    pub fn fetch_failed() -> Self {
        Self {
            title: "Error fetching content".to_string(),
            description: "Unable to load the requested content. Please try again later."
                .to_string(),
            variant: Variant::Destructive,
        }
    }
}

/// Sink for presentation side effects
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        tracing::warn!(
            title = %notification.title,
            "{}",
            notification.description
        );
    }
}

/// Collects notifications for display on the current page
#[derive(Debug, Default)]
pub struct Toasts {
    items: Mutex<Vec<Notification>>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every collected notification
    pub fn drain(&self) -> Vec<Notification> {
        match self.items.lock() {
            Ok(mut items) => std::mem::take(&mut *items),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for Toasts {
    fn notify(&self, notification: Notification) {
        match self.items.lock() {
            Ok(mut items) => items.push(notification),
            Err(poisoned) => poisoned.into_inner().push(notification),
        }
    }
}
