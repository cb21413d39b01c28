//! Services module
//!
//! This module contains the collaborators the views talk to: the REST
//! backend, the notification sink and CSV export.

pub mod api;
pub mod export;
pub mod notification;

// Re-export commonly used services
pub use api::{ApiClient, EventApi, NewsApi, NewsletterApi, RegistrationApi};
pub use notification::{Notification, NotificationLevel, NotificationService, NotificationSink, NotificationStats};

use std::sync::Arc;
use tracing::{debug, warn};
use crate::config::Settings;
use crate::handlers::admin::{EventsHandler, NewsHandler, ParticipantsHandler, SubscribersHandler};
use crate::handlers::public::{EventDetailHandler, LandingHandler, NewsPageHandler};
use crate::utils::errors::Result;
use crate::utils::helpers::DateDisplay;

/// Service factory for creating and wiring every view
#[derive(Clone)]
pub struct ServiceFactory {
    pub events: Arc<dyn EventApi>,
    pub registrations: Arc<dyn RegistrationApi>,
    pub news: Arc<dyn NewsApi>,
    pub newsletter: Arc<dyn NewsletterApi>,
    pub notifications: Arc<NotificationService>,
    pub settings: Settings,
    pub display: DateDisplay,
}

impl ServiceFactory {
    /// Create a new ServiceFactory talking to the configured backend over HTTP
    pub fn new(settings: Settings) -> Result<Self> {
        let client = Arc::new(ApiClient::new(&settings.api)?);
        debug!(base_url = %client.base_url(), "API client initialized");
        Ok(Self::with_backend(settings, client))
    }

    /// Wire every view to one backend implementation
    pub fn with_backend<B>(settings: Settings, backend: Arc<B>) -> Self
    where
        B: EventApi + RegistrationApi + NewsApi + NewsletterApi + 'static,
    {
        let display = DateDisplay::new(&settings.display);
        Self {
            events: backend.clone(),
            registrations: backend.clone(),
            news: backend.clone(),
            newsletter: backend,
            notifications: Arc::new(NotificationService::new()),
            settings,
            display,
        }
    }

    fn sink(&self) -> Arc<dyn NotificationSink> {
        self.notifications.clone()
    }

    pub fn events_handler(&self) -> EventsHandler {
        EventsHandler::new(
            self.events.clone(),
            self.sink(),
            self.display.clone(),
            self.settings.pagination.admin_page_size,
        )
    }

    pub fn participants_handler(&self) -> ParticipantsHandler {
        ParticipantsHandler::new(
            self.registrations.clone(),
            self.events.clone(),
            self.sink(),
            self.display.clone(),
        )
    }

    pub fn subscribers_handler(&self) -> SubscribersHandler {
        SubscribersHandler::new(self.newsletter.clone(), self.sink(), self.display.clone())
    }

    pub fn news_handler(&self) -> NewsHandler {
        NewsHandler::new(self.news.clone(), self.sink())
    }

    pub fn landing_handler(&self) -> LandingHandler {
        LandingHandler::new(
            self.events.clone(),
            self.newsletter.clone(),
            self.sink(),
            self.display.clone(),
            &self.settings.pagination,
        )
    }

    pub fn event_detail_handler(&self) -> EventDetailHandler {
        EventDetailHandler::new(self.events.clone(), self.registrations.clone(), self.sink())
    }

    pub fn news_page_handler(&self) -> NewsPageHandler {
        NewsPageHandler::new(self.news.clone(), self.sink())
    }

    /// Health check for the backend
    pub async fn health_check(&self) -> ServiceHealthStatus {
        let backend_reachable = match self.events.list_events().await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Backend health check failed");
                false
            }
        };

        ServiceHealthStatus {
            backend_reachable,
            auth_configured: self.settings.api.auth_token.is_some(),
        }
    }
}

/// Health status for the backend connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceHealthStatus {
    pub backend_reachable: bool,
    pub auth_configured: bool,
}

impl ServiceHealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.backend_reachable
    }

    /// Get list of problems worth reporting at startup
    pub fn get_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.backend_reachable {
            issues.push("Backend API is not reachable".to_string());
        }
        if !self.auth_configured {
            issues.push("No API token configured; admin calls will be rejected".to_string());
        }

        issues
    }
}
