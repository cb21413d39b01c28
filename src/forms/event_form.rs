//! Event draft and scheduling validation
//!
//! Every rule is checked independently so the form can show all problems at
//! once. The past-date rule compares against "now" truncated to the minute.

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use crate::models::event::{Event, EventCategory, EventPayload, EventStatus};
use crate::utils::errors::{EventHubError, Result};
use crate::utils::helpers::DateDisplay;
use super::{Field, FieldErrors};

pub const TITLE_REQUIRED: &str = "Title is required.";
pub const DESCRIPTION_REQUIRED: &str = "Description is required.";
pub const STARTING_DATE_REQUIRED: &str = "Starting date is required.";
pub const STARTING_DATE_IN_PAST: &str = "Starting date cannot be in the past.";
pub const ENDING_DATE_REQUIRED: &str = "Ending date is required.";
pub const ENDING_BEFORE_START: &str = "Ending date must be after starting date.";
pub const LOCATION_REQUIRED: &str = "Location is required.";

/// Accepted `datetime-local` layouts
const LOCAL_INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// In-progress event held by the admin create/edit form
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    pub language: String,
    pub status: EventStatus,
    pub starting_date: Option<DateTime<Utc>>,
    pub ending_date: Option<DateTime<Utc>>,
    pub location: String,
    pub max_participants: Option<u32>,
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: EventCategory::Training,
            language: "english".to_string(),
            status: EventStatus::Pending,
            starting_date: None,
            ending_date: None,
            location: String::new(),
            max_participants: None,
        }
    }
}

impl EventDraft {
    /// Pre-fill the edit form from a loaded event
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone(),
            category: event.category,
            language: event.language.clone(),
            status: event.status,
            starting_date: Some(truncate_to_minute(event.starting_date)),
            ending_date: Some(truncate_to_minute(event.ending_date)),
            location: event.location.clone(),
            max_participants: event.max_participants,
        }
    }

    /// Set the starting date from raw form input; blank clears it
    pub fn set_starting_date_input(&mut self, input: &str, display: &DateDisplay) -> Result<()> {
        self.starting_date = parse_datetime_local(input, display)?;
        Ok(())
    }

    /// Set the ending date from raw form input; blank clears it
    pub fn set_ending_date_input(&mut self, input: &str, display: &DateDisplay) -> Result<()> {
        self.ending_date = parse_datetime_local(input, display)?;
        Ok(())
    }

    /// Build the request body; fails with the field errors if the draft is invalid
    pub fn to_payload_at(&self, now: DateTime<Utc>) -> Result<EventPayload> {
        let errors = validate_at(self, now);
        match (self.starting_date, self.ending_date) {
            (Some(starting_date), Some(ending_date)) if errors.is_empty() => Ok(EventPayload {
                title: self.title.clone(),
                description: self.description.clone(),
                category: self.category,
                language: self.language.clone(),
                status: self.status,
                starting_date,
                ending_date,
                location: self.location.clone(),
                max_participants: self.max_participants,
            }),
            _ => Err(EventHubError::Validation(errors)),
        }
    }

    pub fn to_payload(&self) -> Result<EventPayload> {
        self.to_payload_at(Utc::now())
    }
}

/// Parse a `datetime-local` value (or RFC 3339) in the display zone
pub fn parse_datetime_local(input: &str, display: &DateDisplay) -> Result<Option<DateTime<Utc>>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Ok(Some(timestamp.with_timezone(&Utc)));
    }

    LOCAL_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .and_then(|naive| display.from_local(naive))
        .map(Some)
        .ok_or_else(|| EventHubError::InvalidInput(format!("Invalid date and time: {}", input)))
}

/// Validate a draft against the current wall-clock time
pub fn validate(draft: &EventDraft) -> FieldErrors {
    validate_at(draft, Utc::now())
}

/// Validate a draft against a given "now"
pub fn validate_at(draft: &EventDraft, now: DateTime<Utc>) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.title.trim().is_empty() {
        errors.insert(Field::Title, TITLE_REQUIRED);
    }

    if draft.description.trim().is_empty() {
        errors.insert(Field::Description, DESCRIPTION_REQUIRED);
    }

    match draft.starting_date {
        None => errors.insert(Field::StartingDate, STARTING_DATE_REQUIRED),
        Some(start) if start < truncate_to_minute(now) => {
            errors.insert(Field::StartingDate, STARTING_DATE_IN_PAST)
        }
        Some(_) => {}
    }

    match (draft.starting_date, draft.ending_date) {
        (_, None) => errors.insert(Field::EndingDate, ENDING_DATE_REQUIRED),
        (Some(start), Some(end)) if start >= end => errors.insert(Field::EndingDate, ENDING_BEFORE_START),
        _ => {}
    }

    if draft.location.trim().is_empty() {
        errors.insert(Field::Location, LOCATION_REQUIRED);
    }

    errors
}

fn truncate_to_minute(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    timestamp
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(timestamp)
}
