//! Public landing page
//!
//! Shows the events open to the public (active or upcoming) with status,
//! title and day filters, a growing "load more" window, and the newsletter
//! sign-up box.

use std::sync::Arc;
use tracing::debug;
use crate::forms::{validate_email, Field, FieldErrors};
use crate::handlers::{server_message_or, SubmitOutcome};
use crate::config::PaginationConfig;
use crate::models::Event;
use crate::services::{EventApi, NewsletterApi, NotificationSink};
use crate::state::{BusyState, DatePolicy, FilterState, LoadMoreState, StatusFilter};
use crate::utils::helpers::DateDisplay;
use crate::utils::logging::log_api_error;

/// Shown when a sign-up fails without a message from the backend
pub const SUBSCRIBE_FAILED: &str = "Failed to subscribe. Please try again.";

pub struct LandingHandler {
    events_api: Arc<dyn EventApi>,
    newsletter_api: Arc<dyn NewsletterApi>,
    sink: Arc<dyn NotificationSink>,
    display: DateDisplay,
    events: Vec<Event>,
    filter: FilterState,
    window: LoadMoreState,
    busy: BusyState,
}

impl LandingHandler {
    pub fn new(
        events_api: Arc<dyn EventApi>,
        newsletter_api: Arc<dyn NewsletterApi>,
        sink: Arc<dyn NotificationSink>,
        display: DateDisplay,
        pagination: &PaginationConfig,
    ) -> Self {
        Self {
            events_api,
            newsletter_api,
            sink,
            display,
            events: Vec::new(),
            filter: FilterState::default(),
            window: LoadMoreState::new(pagination.landing_initial_count, pagination.landing_step),
            busy: BusyState::default(),
        }
    }

    /// Fetch events and keep the publicly listed ones
    pub async fn load(&mut self) -> bool {
        self.busy.set_loading(true);
        let loaded = match self.events_api.list_events().await {
            Ok(events) => {
                self.events = events.into_iter().filter(Event::is_listed).collect();
                debug!(count = self.events.len(), "Public events loaded");
                true
            }
            Err(e) => {
                log_api_error("Failed to fetch events", &e);
                self.sink.error(&server_message_or(&e, "Failed to fetch events"));
                false
            }
        };
        self.busy.set_loading(false);
        loaded
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn busy(&self) -> &BusyState {
        &self.busy
    }

    pub fn filtered(&self) -> Vec<&Event> {
        self.filter.apply(&self.events, DatePolicy::Range, &self.display)
    }

    /// The rows currently shown
    pub fn visible(&self) -> Vec<&Event> {
        let filtered = self.filtered();
        self.window.window(&filtered).to_vec()
    }

    pub fn has_more(&self) -> bool {
        self.window.has_more(self.filtered().len())
    }

    pub fn load_more(&mut self) {
        self.window.load_more();
    }

    /// "Showing N of M events"
    pub fn summary(&self) -> String {
        let total = self.filtered().len();
        let shown = self.window.display_count().min(total);
        format!("Showing {} of {} events", shown, total)
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
        self.window.reset();
    }

    pub fn set_title_filter(&mut self, title: impl Into<String>) {
        self.filter.title = title.into();
        self.window.reset();
    }

    /// `YYYY-MM-DD`; matched against each event's day span
    pub fn set_date_filter(&mut self, date: impl Into<String>) {
        self.filter.date = date.into();
        self.window.reset();
    }

    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
        self.window.reset();
    }

    /// Newsletter sign-up from the landing page footer
    pub async fn subscribe(&mut self, email: &str) -> SubmitOutcome<()> {
        let email = match validate_email(email) {
            Ok(email) => email,
            Err(e) => {
                let mut errors = FieldErrors::new();
                errors.insert(Field::Email, e.user_message());
                return SubmitOutcome::Invalid(errors);
            }
        };

        if !self.busy.begin_submit() {
            return SubmitOutcome::Busy;
        }
        let result = self.newsletter_api.subscribe(&email).await;
        self.busy.end_submit();

        match result {
            Ok(()) => {
                self.sink.success("Successfully subscribed to our newsletter!");
                SubmitOutcome::Saved(())
            }
            Err(e) => {
                log_api_error("Failed to subscribe", &e);
                self.sink.error(&server_message_or(&e, SUBSCRIBE_FAILED));
                SubmitOutcome::Failed
            }
        }
    }
}
