//! User-facing notifications, the toast a front-end shows for wallet errors.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotificationType {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txid: Option<String>,
}

impl Notification {
    pub fn new(kind: NotificationType, title: impl ToString) -> Self {
        Self {
            title: title.to_string(),
            kind,
            description: None,
            txid: None,
        }
    }

    pub fn error(title: impl ToString) -> Self {
        Self::new(NotificationType::Error, title)
    }

    pub fn info(title: impl ToString) -> Self {
        Self::new(NotificationType::Info, title)
    }

    pub fn success(title: impl ToString) -> Self {
        Self::new(NotificationType::Success, title)
    }

    pub fn with_description(mut self, description: impl ToString) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_txid(mut self, txid: impl ToString) -> Self {
        self.txid = Some(txid.to_string());
        self
    }
}

pub trait Notifier: std::fmt::Debug {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let description = notification.description.as_deref().unwrap_or_default();
        match notification.kind {
            NotificationType::Error => {
                tracing::error!(title = %notification.title, "{description}")
            }
            NotificationType::Info => tracing::info!(title = %notification.title, "{description}"),
            NotificationType::Success => {
                tracing::info!(
                    title = %notification.title,
                    txid = ?notification.txid,
                    "{description}"
                )
            }
        }
    }
}

/// Keeps every notification in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        tracing::debug!("notification: {notification:?}");
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(notification);
        }
    }
}
