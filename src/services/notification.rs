//! Notification service implementation
//!
//! Views report outcomes through a fire-and-forget [`NotificationSink`].
//! [`NotificationService`] queues them for the UI to drain and mirrors each
//! one to the log.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use crate::utils::errors::EventHubError;
use crate::utils::logging::log_api_error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NotificationLevel::Success => "success",
            NotificationLevel::Error => "error",
            NotificationLevel::Info => "info",
        };
        f.write_str(label)
    }
}

/// A toast shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Info, message: message.into() }
    }

    /// "`prefix`: `server message`"
    pub fn failure(prefix: &str, err: &EventHubError) -> Self {
        Self::error(format!("{}: {}", prefix, err.user_message()))
    }
}

/// Receives notifications; never fails and never blocks
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);

    fn success(&self, message: &str) {
        self.notify(Notification::success(message));
    }

    fn error(&self, message: &str) {
        self.notify(Notification::error(message));
    }

    /// Log `err` and show "`prefix`: `message`"
    fn failure(&self, prefix: &str, err: &EventHubError) {
        log_api_error(prefix, err);
        self.notify(Notification::failure(prefix, err));
    }
}

/// Notification statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationStats {
    pub total_success: u64,
    pub total_error: u64,
    pub total_info: u64,
}

#[derive(Debug, Default)]
struct Inner {
    queue: VecDeque<Notification>,
    stats: NotificationStats,
}

/// Queueing sink shared by all views
#[derive(Debug, Default)]
pub struct NotificationService {
    inner: Mutex<Inner>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every queued notification, oldest first
    pub fn drain(&self) -> Vec<Notification> {
        match self.inner.lock() {
            Ok(mut inner) => inner.queue.drain(..).collect(),
            Err(poisoned) => poisoned.into_inner().queue.drain(..).collect(),
        }
    }

    /// Most recent notification still queued
    pub fn last(&self) -> Option<Notification> {
        match self.inner.lock() {
            Ok(inner) => inner.queue.back().cloned(),
            Err(poisoned) => poisoned.into_inner().queue.back().cloned(),
        }
    }

    pub fn stats(&self) -> NotificationStats {
        match self.inner.lock() {
            Ok(inner) => inner.stats.clone(),
            Err(poisoned) => poisoned.into_inner().stats.clone(),
        }
    }
}

impl NotificationSink for NotificationService {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => error!(message = %notification.message, "Notification"),
            level => info!(level = %level, message = %notification.message, "Notification"),
        }

        let mut inner = match self.inner.lock() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        };
        match notification.level {
            NotificationLevel::Success => inner.stats.total_success += 1,
            NotificationLevel::Error => inner.stats.total_error += 1,
            NotificationLevel::Info => inner.stats.total_info += 1,
        }
        inner.queue.push_back(notification);
    }
}
