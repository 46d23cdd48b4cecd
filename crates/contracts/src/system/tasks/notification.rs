//! Transient status messages shown as toasts.
//!
//! The queue only appends and removes by id. Expiry is driven from outside
//! (a timer per notification) and calls the same idempotent `dismiss` as the
//! close button, so the two may race freely.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(pub Uuid);

impl NotificationId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, severity: Severity, message: impl Into<String>) -> NotificationId {
        let id = NotificationId::new_v4();
        self.items.push(Notification {
            id,
            severity,
            message: message.into(),
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> NotificationId {
        self.push(Severity::Success, message)
    }

    /// Removes `id` if still present. Returns whether it was.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Notifications in enqueue order
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order_and_duplicates() {
        let mut queue = NotificationQueue::new();
        let a = queue.success("Task started");
        let b = queue.success("Task started");
        assert_ne!(a, b);
        let messages: Vec<_> = queue.items().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["Task started", "Task started"]);
    }

    #[test]
    fn test_dismiss_removes_only_matching_and_is_idempotent() {
        let mut queue = NotificationQueue::new();
        let a = queue.success("one");
        let b = queue.push(Severity::Error, "two");
        let c = queue.success("three");

        assert!(queue.dismiss(b));
        assert!(!queue.dismiss(b));
        let ids: Vec<_> = queue.items().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![a, c]);
    }
}
