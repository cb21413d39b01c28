//! Test context: a ServiceFactory wired to the in-memory backend

use std::sync::Arc;
use eventhub::services::{Notification, NotificationLevel, ServiceFactory};
use eventhub::Settings;
use super::backend::InMemoryBackend;

pub struct TestContext {
    pub backend: Arc<InMemoryBackend>,
    pub services: ServiceFactory,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let backend = Arc::new(InMemoryBackend::new());
        let services = ServiceFactory::with_backend(settings, backend.clone());
        Self { backend, services }
    }

    /// Drain notifications raised so far
    pub fn notifications(&self) -> Vec<Notification> {
        self.services.notifications.drain()
    }

    /// Drain and keep only the messages
    pub fn messages(&self) -> Vec<String> {
        self.notifications().into_iter().map(|n| n.message).collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter(|n| n.level == NotificationLevel::Error)
            .map(|n| n.message)
            .collect()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
