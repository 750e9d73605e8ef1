//! Transient user-facing notifications

use crate::config::AuthConfig;
use crate::observable::{Observable, SubscriptionId};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Queue of visible notifications
///
/// Removal after a delay is the renderer's job (see `Toaster`).
#[derive(Clone)]
pub struct Notifications {
    queue: Observable<Vec<Toast>>,
    next_id: Rc<Cell<u64>>,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            queue: Observable::new(Vec::new()),
            next_id: Rc::new(Cell::new(1)),
        }
    }

    /// Show a notification, returning its id
    pub fn push(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        variant: ToastVariant,
    ) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let toast = Toast {
            id,
            title: title.into(),
            description: description.into(),
            variant,
        };
        self.queue.update(|toasts| toasts.push(toast));
        id
    }

    /// Show the standard failed-request notification
    pub fn request_failed(&self, description: impl Into<String>) -> u64 {
        self.push(
            AuthConfig::REQUEST_FAILED_TITLE,
            description,
            ToastVariant::Destructive,
        )
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.get()
    }

    pub fn subscribe(&self, callback: impl Fn(&Vec<Toast>) + 'static) -> SubscriptionId {
        self.queue.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.queue.unsubscribe(id)
    }
}

impl PartialEq for Notifications {
    fn eq(&self, other: &Self) -> bool {
        self.queue.ptr_eq(&other.queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_dismiss() {
        let notifications = Notifications::new();
        let first = notifications.request_failed("Invalid credentials");
        let second = notifications.push("Welcome", "Account created", ToastVariant::Default);

        let toasts = notifications.toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].title, AuthConfig::REQUEST_FAILED_TITLE);
        assert_eq!(toasts[0].description, "Invalid credentials");
        assert_eq!(toasts[0].variant, ToastVariant::Destructive);
        assert_ne!(first, second);

        notifications.dismiss(first);
        let toasts = notifications.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].id, second);
    }
}
