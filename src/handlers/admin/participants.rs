//! Admin participants page
//!
//! Registrations are shown next to the name of their event, which is
//! resolved against the event list fetched alongside them.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use chrono::{DateTime, Utc};
use tracing::{debug, info};
use crate::models::{Event, EventRegistration};
use crate::services::export::{export_to_file, participants_to_string};
use crate::services::{EventApi, NotificationSink, RegistrationApi};
use crate::state::filter::ALL_SENTINEL;
use crate::state::{BusyState, ConfirmationGate, ConfirmationRequest};
use crate::utils::errors::{EventHubError, Result};
use crate::utils::helpers::{contains_ignore_case, DateDisplay};
use crate::utils::logging::log_admin_action;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this registration?";

/// Which event's registrations to show
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EventSelector {
    #[default]
    All,
    Event(String),
}

impl EventSelector {
    pub fn matches(&self, registration: &EventRegistration) -> bool {
        match self {
            EventSelector::All => true,
            EventSelector::Event(id) => registration.event_id.id() == id,
        }
    }
}

impl fmt::Display for EventSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventSelector::All => f.write_str(ALL_SENTINEL),
            EventSelector::Event(id) => f.write_str(id),
        }
    }
}

impl FromStr for EventSelector {
    type Err = EventHubError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" => Err(EventHubError::InvalidInput("Empty event selection".to_string())),
            ALL_SENTINEL => Ok(EventSelector::All),
            id => Ok(EventSelector::Event(id.to_string())),
        }
    }
}

/// Counters shown above the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticipantStats {
    pub total: usize,
    pub this_month: usize,
    pub filtered: usize,
}

pub struct ParticipantsHandler {
    registrations_api: Arc<dyn RegistrationApi>,
    events_api: Arc<dyn EventApi>,
    sink: Arc<dyn NotificationSink>,
    display: DateDisplay,
    registrations: Vec<EventRegistration>,
    events: Vec<Event>,
    events_loaded: bool,
    search: String,
    selected: EventSelector,
    busy: BusyState,
    confirm: ConfirmationGate<String>,
}

impl ParticipantsHandler {
    pub fn new(
        registrations_api: Arc<dyn RegistrationApi>,
        events_api: Arc<dyn EventApi>,
        sink: Arc<dyn NotificationSink>,
        display: DateDisplay,
    ) -> Self {
        Self {
            registrations_api,
            events_api,
            sink,
            display,
            registrations: Vec::new(),
            events: Vec::new(),
            events_loaded: false,
            search: String::new(),
            selected: EventSelector::All,
            busy: BusyState::default(),
            confirm: ConfirmationGate::default(),
        }
    }

    /// Fetch registrations and events together
    pub async fn load(&mut self) -> bool {
        self.busy.set_loading(true);
        let result = futures::try_join!(
            self.registrations_api.list_registrations(),
            self.events_api.list_events(),
        );

        let loaded = match result {
            Ok((registrations, events)) => {
                debug!(
                    registrations = registrations.len(),
                    events = events.len(),
                    "Participants loaded"
                );
                self.registrations = registrations;
                self.events = events;
                self.events_loaded = true;
                true
            }
            Err(e) => {
                self.sink.failure("Failed to fetch data", &e);
                false
            }
        };
        self.busy.set_loading(false);
        loaded
    }

    pub fn registrations(&self) -> &[EventRegistration] {
        &self.registrations
    }

    /// Events for the selector
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn busy(&self) -> &BusyState {
        &self.busy
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn selected(&self) -> &EventSelector {
        &self.selected
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn select_event(&mut self, selector: EventSelector) {
        self.selected = selector;
    }

    fn matches_search(&self, registration: &EventRegistration) -> bool {
        let needle = self.search.as_str();
        contains_ignore_case(&registration.first_name, needle)
            || contains_ignore_case(&registration.last_name, needle)
            || contains_ignore_case(&registration.email, needle)
    }

    pub fn filtered(&self) -> Vec<&EventRegistration> {
        self.registrations
            .iter()
            .filter(|registration| self.selected.matches(registration) && self.matches_search(registration))
            .collect()
    }

    /// Event name for a row; never empty
    pub fn event_name<'a>(&'a self, registration: &'a EventRegistration) -> &'a str {
        registration.event_id.display_name(&self.events, self.events_loaded)
    }

    pub fn stats(&self) -> ParticipantStats {
        self.stats_at(Utc::now())
    }

    pub fn stats_at(&self, now: DateTime<Utc>) -> ParticipantStats {
        ParticipantStats {
            total: self.registrations.len(),
            this_month: self
                .registrations
                .iter()
                .filter(|registration| self.display.same_month(&registration.created_at, &now))
                .count(),
            filtered: self.filtered().len(),
        }
    }

    /// CSV of the filtered rows
    pub fn export_csv(&mut self) -> Option<String> {
        self.busy.set_exporting(true);
        let rows: Vec<EventRegistration> = self.filtered().into_iter().cloned().collect();
        let result = participants_to_string(&rows, &self.events, &self.display);
        self.busy.set_exporting(false);

        match result {
            Ok(csv) => {
                info!(rows = rows.len(), "Participants exported");
                self.sink.success("Participants exported successfully");
                Some(csv)
            }
            Err(e) => {
                self.sink.failure("Failed to export participants", &e);
                None
            }
        }
    }

    /// Export the filtered rows straight to a file
    pub fn export_to_path(&mut self, path: impl AsRef<Path>) -> bool {
        let Some(csv) = self.export_csv() else {
            return false;
        };
        match export_to_file(path, &csv) {
            Ok(()) => true,
            Err(e) => {
                self.sink.failure("Failed to export participants", &e);
                false
            }
        }
    }

    pub fn request_delete(&mut self, id: &str) -> ConfirmationRequest<String> {
        self.confirm.request(id.to_string(), DELETE_PROMPT)
    }

    pub fn cancel_delete(&mut self) -> bool {
        self.confirm.cancel()
    }

    pub async fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.confirm.confirm() else {
            return false;
        };
        if !self.busy.begin_delete(&id) {
            return false;
        }

        let result = self.registrations_api.delete_registration(&id).await;
        self.busy.end_delete();

        match result {
            Ok(()) => {
                log_admin_action("delete", "registration", Some(&id));
                self.sink.success("Registration deleted successfully");
                self.load().await;
                true
            }
            Err(e) => {
                self.sink.failure("Failed to delete registration", &e);
                false
            }
        }
    }
}
