//! Event model

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::utils::errors::EventHubError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "eventCategory")]
    pub category: EventCategory,
    pub language: String,
    pub status: EventStatus,
    pub starting_date: DateTime<Utc>,
    pub ending_date: DateTime<Utc>,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Publicly listed on the landing page
    pub fn is_listed(&self) -> bool {
        matches!(self.status, EventStatus::Active | EventStatus::Upcoming)
    }
}

/// Body of a create or full-replace update, as the admin form submits it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub title: String,
    pub description: String,
    #[serde(rename = "eventCategory")]
    pub category: EventCategory,
    pub language: String,
    pub status: EventStatus,
    pub starting_date: DateTime<Utc>,
    pub ending_date: DateTime<Utc>,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    #[default]
    Training,
    Seminar,
    Conference,
    Workshop,
    Other,
}

impl EventCategory {
    pub const ALL: [EventCategory; 5] = [
        EventCategory::Training,
        EventCategory::Seminar,
        EventCategory::Conference,
        EventCategory::Workshop,
        EventCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Training => "training",
            EventCategory::Seminar => "seminar",
            EventCategory::Conference => "conference",
            EventCategory::Workshop => "workshop",
            EventCategory::Other => "other",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = EventHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| EventHubError::InvalidInput(format!("Unknown event category: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Pending,
    Active,
    Upcoming,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub const ALL: [EventStatus; 5] = [
        EventStatus::Pending,
        EventStatus::Active,
        EventStatus::Upcoming,
        EventStatus::Completed,
        EventStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Pending => "pending",
            EventStatus::Active => "active",
            EventStatus::Upcoming => "upcoming",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the wire name
impl FromStr for EventStatus {
    type Err = EventHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| EventHubError::InvalidInput(format!("Unknown event status: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_event_deserialization() {
        let json = r#"{
            "_id": "e1",
            "title": "Gala",
            "description": "<p>Annual gala</p>",
            "eventCategory": "conference",
            "language": "english",
            "status": "upcoming",
            "startingDate": "2099-01-05T10:00:00.000Z",
            "endingDate": "2099-01-05T18:00:00.000Z",
            "location": "Main Hall",
            "maxParticipants": 120,
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-02T00:00:00.000Z",
            "__v": 0
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, "e1");
        assert_eq!(event.category, EventCategory::Conference);
        assert_eq!(event.status, EventStatus::Upcoming);
        assert_eq!(event.starting_date, Utc.with_ymd_and_hms(2099, 1, 5, 10, 0, 0).unwrap());
        assert_eq!(event.max_participants, Some(120));
        assert!(event.is_listed());
    }

    #[test]
    fn test_payload_uses_wire_names() {
        let payload = EventPayload {
            title: "Gala".to_string(),
            description: "desc".to_string(),
            category: EventCategory::Workshop,
            language: "english".to_string(),
            status: EventStatus::Pending,
            starting_date: Utc.with_ymd_and_hms(2099, 1, 5, 10, 0, 0).unwrap(),
            ending_date: Utc.with_ymd_and_hms(2099, 1, 5, 12, 0, 0).unwrap(),
            location: "Hall".to_string(),
            max_participants: None,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["eventCategory"], "workshop");
        assert_eq!(value["status"], "pending");
        assert!(value.get("startingDate").is_some());
        assert!(value.get("maxParticipants").is_none());
    }

    #[test]
    fn test_status_parsing_is_case_sensitive() {
        assert_eq!("upcoming".parse::<EventStatus>().unwrap(), EventStatus::Upcoming);
        assert!("Upcoming".parse::<EventStatus>().is_err());
        assert!("all".parse::<EventStatus>().is_err());
    }
}
