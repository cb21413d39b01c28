//! Admin events page
//!
//! Lists every event with status, title and date filters, pages through the
//! filtered list and hosts the create/edit form. After any mutation the full
//! list is fetched again.

use std::sync::Arc;
use chrono::{DateTime, Utc};
use tracing::{debug, info};
use crate::forms::{EventDraft, FieldErrors};
use crate::handlers::SubmitOutcome;
use crate::models::Event;
use crate::services::{EventApi, NotificationSink};
use crate::state::pagination::total_pages;
use crate::state::{BusyState, ConfirmationGate, ConfirmationRequest, DatePolicy, FilterState, Page, PaginationState, StatusFilter};
use crate::utils::errors::EventHubError;
use crate::utils::helpers::DateDisplay;
use crate::utils::logging::log_admin_action;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this event?";

/// The open create/edit form
#[derive(Debug, Clone, PartialEq)]
pub struct EventForm {
    /// Id of the event being edited, `None` when creating
    pub editing: Option<String>,
    pub draft: EventDraft,
    pub errors: FieldErrors,
}

impl EventForm {
    pub fn is_new(&self) -> bool {
        self.editing.is_none()
    }
}

pub struct EventsHandler {
    api: Arc<dyn EventApi>,
    sink: Arc<dyn NotificationSink>,
    display: DateDisplay,
    events: Vec<Event>,
    filter: FilterState,
    pagination: PaginationState,
    busy: BusyState,
    confirm: ConfirmationGate<String>,
    form: Option<EventForm>,
}

impl EventsHandler {
    pub fn new(
        api: Arc<dyn EventApi>,
        sink: Arc<dyn NotificationSink>,
        display: DateDisplay,
        page_size: usize,
    ) -> Self {
        Self {
            api,
            sink,
            display,
            events: Vec::new(),
            filter: FilterState::default(),
            pagination: PaginationState::new(page_size),
            busy: BusyState::default(),
            confirm: ConfirmationGate::default(),
            form: None,
        }
    }

    /// Fetch the full list; on failure the previous list stays on screen
    pub async fn load(&mut self) -> bool {
        self.busy.set_loading(true);
        let loaded = match self.api.list_events().await {
            Ok(events) => {
                debug!(count = events.len(), "Admin events loaded");
                self.events = events;
                self.clamp_page();
                true
            }
            Err(e) => {
                self.sink.failure("Failed to fetch events", &e);
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

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    /// Events passing every filter, in fetch order
    pub fn filtered(&self) -> Vec<&Event> {
        self.filter.apply(&self.events, DatePolicy::Substring, &self.display)
    }

    /// The visible page of the filtered list
    pub fn page(&self) -> Page<&Event> {
        self.pagination.page_of(&self.filtered())
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
        self.pagination.reset();
    }

    pub fn set_title_filter(&mut self, title: impl Into<String>) {
        self.filter.title = title.into();
        self.pagination.reset();
    }

    pub fn set_date_filter(&mut self, date: impl Into<String>) {
        self.filter.date = date.into();
        self.pagination.reset();
    }

    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
        self.pagination.reset();
    }

    pub fn next_page(&mut self) -> bool {
        let pages = self.total_pages();
        self.pagination.next(pages)
    }

    pub fn previous_page(&mut self) -> bool {
        self.pagination.previous()
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        let pages = self.total_pages();
        self.pagination.go_to(page, pages)
    }

    fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.pagination.page_size())
    }

    fn clamp_page(&mut self) {
        let pages = self.total_pages();
        self.pagination.clamp(pages);
    }

    pub fn form(&self) -> Option<&EventForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut EventForm> {
        self.form.as_mut()
    }

    pub fn open_create(&mut self) {
        self.form = Some(EventForm {
            editing: None,
            draft: EventDraft::default(),
            errors: FieldErrors::new(),
        });
    }

    /// Open the edit form pre-filled from a loaded event
    pub fn open_edit(&mut self, id: &str) -> bool {
        match self.events.iter().find(|event| event.id == id) {
            Some(event) => {
                self.form = Some(EventForm {
                    editing: Some(event.id.clone()),
                    draft: EventDraft::from_event(event),
                    errors: FieldErrors::new(),
                });
                true
            }
            None => false,
        }
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    pub async fn submit(&mut self) -> SubmitOutcome<Event> {
        self.submit_at(Utc::now()).await
    }

    /// Validate against `now`, send, and refetch on success
    pub async fn submit_at(&mut self, now: DateTime<Utc>) -> SubmitOutcome<Event> {
        let Some(form) = self.form.as_mut() else {
            return SubmitOutcome::NoForm;
        };

        let payload = match form.draft.to_payload_at(now) {
            Ok(payload) => payload,
            Err(EventHubError::Validation(errors)) => {
                form.errors = errors.clone();
                return SubmitOutcome::Invalid(errors);
            }
            Err(e) => {
                self.sink.failure("Failed to save event", &e);
                return SubmitOutcome::Failed;
            }
        };
        form.errors = FieldErrors::new();
        let editing = form.editing.clone();

        if !self.busy.begin_submit() {
            return SubmitOutcome::Busy;
        }

        let result = match &editing {
            Some(id) => self.api.update_event(id, &payload).await,
            None => self.api.create_event(&payload).await,
        };
        self.busy.end_submit();

        match result {
            Ok(event) => {
                let (action, message) = match editing {
                    Some(_) => ("update", "Event updated successfully"),
                    None => ("create", "Event created successfully"),
                };
                log_admin_action(action, "event", Some(&event.id));
                self.sink.success(message);
                self.form = None;
                self.load().await;
                SubmitOutcome::Saved(event)
            }
            Err(e) => {
                self.sink.failure("Failed to save event", &e);
                SubmitOutcome::Failed
            }
        }
    }

    /// First half of a delete: ask the user
    pub fn request_delete(&mut self, id: &str) -> ConfirmationRequest<String> {
        self.confirm.request(id.to_string(), DELETE_PROMPT)
    }

    pub fn pending_delete(&self) -> Option<&ConfirmationRequest<String>> {
        self.confirm.pending()
    }

    pub fn cancel_delete(&mut self) -> bool {
        self.confirm.cancel()
    }

    /// Second half of a delete: the user said yes
    pub async fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.confirm.confirm() else {
            return false;
        };
        if !self.busy.begin_delete(&id) {
            return false;
        }

        let result = self.api.delete_event(&id).await;
        self.busy.end_delete();

        match result {
            Ok(()) => {
                log_admin_action("delete", "event", Some(&id));
                info!(event_id = %id, "Event deleted");
                self.sink.success("Event deleted successfully");
                self.load().await;
                true
            }
            Err(e) => {
                self.sink.failure("Failed to delete event", &e);
                false
            }
        }
    }
}
