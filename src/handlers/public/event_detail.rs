//! Public event detail page with the registration form

use std::sync::Arc;
use tracing::{debug, info};
use crate::forms::RegistrationDraft;
use crate::handlers::{server_message_or, DetailOutcome, SubmitOutcome};
use crate::models::{Event, EventRegistration};
use crate::services::{EventApi, NotificationSink, RegistrationApi};
use crate::state::BusyState;
use crate::utils::logging::log_api_error;

/// Where the page sends the user when the event cannot be shown
pub const FALLBACK_PATH: &str = "/";

pub struct EventDetailHandler {
    events_api: Arc<dyn EventApi>,
    registrations_api: Arc<dyn RegistrationApi>,
    sink: Arc<dyn NotificationSink>,
    event: Option<Event>,
    registered: Option<usize>,
    form: Option<RegistrationDraft>,
    busy: BusyState,
}

impl EventDetailHandler {
    pub fn new(
        events_api: Arc<dyn EventApi>,
        registrations_api: Arc<dyn RegistrationApi>,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            events_api,
            registrations_api,
            sink,
            event: None,
            registered: None,
            form: None,
            busy: BusyState::default(),
        }
    }

    /// Load the event; any failure redirects to the landing page
    pub async fn load(&mut self, id: &str) -> DetailOutcome<Event> {
        self.busy.set_loading(true);
        let result = self.events_api.get_event(id).await;
        self.busy.set_loading(false);

        match result {
            Ok(event) => {
                debug!(event_id = %event.id, "Event detail loaded");
                self.event = Some(event.clone());
                self.registered = None;
                self.form = None;
                DetailOutcome::Loaded(event)
            }
            Err(e) => {
                log_api_error("Failed to fetch event", &e);
                self.sink.error(&server_message_or(&e, "Failed to fetch event"));
                self.event = None;
                DetailOutcome::Redirect(FALLBACK_PATH.to_string())
            }
        }
    }

    pub fn event(&self) -> Option<&Event> {
        self.event.as_ref()
    }

    pub fn busy(&self) -> &BusyState {
        &self.busy
    }

    /// Count registrations so the page can show the remaining places
    pub async fn load_registration_count(&mut self) -> Option<usize> {
        let id = self.event.as_ref()?.id.clone();
        match self.registrations_api.list_registrations_for_event(&id).await {
            Ok(registrations) => {
                self.registered = Some(registrations.len());
                self.registered
            }
            Err(e) => {
                log_api_error("Failed to count registrations", &e);
                None
            }
        }
    }

    /// Places left, when the event has a cap and the count is known
    pub fn spots_left(&self) -> Option<u32> {
        let max = self.event.as_ref()?.max_participants?;
        let registered = u32::try_from(self.registered?).unwrap_or(u32::MAX);
        Some(max.saturating_sub(registered))
    }

    /// "Enroll" button; nothing to enroll in until the event is loaded
    pub fn open_registration(&mut self) -> bool {
        if self.event.is_none() {
            return false;
        }
        self.form = Some(RegistrationDraft::default());
        true
    }

    pub fn registration_form(&self) -> Option<&RegistrationDraft> {
        self.form.as_ref()
    }

    pub fn registration_form_mut(&mut self) -> Option<&mut RegistrationDraft> {
        self.form.as_mut()
    }

    pub fn close_registration(&mut self) {
        self.form = None;
    }

    pub async fn submit_registration(&mut self) -> SubmitOutcome<EventRegistration> {
        let (Some(event), Some(draft)) = (self.event.as_ref(), self.form.as_ref()) else {
            return SubmitOutcome::NoForm;
        };

        let request = match draft.to_request(&event.id) {
            Ok(request) => request,
            Err(e) => {
                self.sink.error(&e.user_message());
                return SubmitOutcome::Failed;
            }
        };

        if !self.busy.begin_submit() {
            return SubmitOutcome::Busy;
        }
        let result = self.registrations_api.create_registration(&request).await;
        self.busy.end_submit();

        match result {
            Ok(registration) => {
                info!(event_id = %request.event_id, registration_id = %registration.id, "Registered for event");
                self.form = None;
                self.sink.success("Successfully registered for the event!");
                self.load_registration_count().await;
                SubmitOutcome::Saved(registration)
            }
            Err(e) => {
                log_api_error("Failed to register for event", &e);
                self.sink.error(&server_message_or(&e, "Failed to register for event"));
                SubmitOutcome::Failed
            }
        }
    }
}
