//! Event registration model
//!
//! The backend sends `eventId` either as a bare id or as the populated
//! event document, depending on the query. [`EventRef`] captures both and
//! is the only place that looks inside.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use super::event::Event;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRegistration {
    #[serde(rename = "_id")]
    pub id: String,
    pub event_id: EventRef,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl EventRegistration {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Reference from a registration to its event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventRef {
    Id(String),
    Embedded(EventSummary),
}

/// The part of a populated event document a registration needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl EventRef {
    /// Normalized event id, whichever shape arrived
    pub fn id(&self) -> &str {
        match self {
            EventRef::Id(id) => id,
            EventRef::Embedded(summary) => &summary.id,
        }
    }

    /// Title carried inline by a populated reference, if non-blank
    pub fn embedded_title(&self) -> Option<&str> {
        match self {
            EventRef::Embedded(EventSummary { title: Some(title), .. }) if !title.trim().is_empty() => {
                Some(title.as_str())
            }
            _ => None,
        }
    }

    /// Title to display: the inline one first, then a lookup in `events`
    pub fn resolve_title<'a>(&'a self, events: &'a [Event]) -> Option<&'a str> {
        self.embedded_title().or_else(|| {
            let id = self.id();
            events
                .iter()
                .find(|event| event.id == id)
                .map(|event| event.title.as_str())
                .filter(|title| !title.is_empty())
        })
    }
}

/// Shown when the referenced event is not among the loaded ones
pub const UNKNOWN_EVENT: &str = "Unknown Event";
/// Shown while the event list has not arrived yet
pub const LOADING_EVENT: &str = "Loading...";

impl EventRef {
    /// Name for list rows and exports, never empty
    pub fn display_name<'a>(&'a self, events: &'a [Event], events_loaded: bool) -> &'a str {
        match self.resolve_title(events) {
            Some(title) => title,
            None if events_loaded => UNKNOWN_EVENT,
            None => LOADING_EVENT,
        }
    }
}

impl From<&str> for EventRef {
    fn from(id: &str) -> Self {
        EventRef::Id(id.to_string())
    }
}

/// Body of `POST /event-registrations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegistrationRequest {
    pub event_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}
