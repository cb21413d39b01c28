//! Test data helpers for creating records and drafts

use chrono::{DateTime, Duration, TimeZone, Utc};
use eventhub::forms::{EventDraft, NewsDraft, RegistrationDraft};
use eventhub::models::{
    Event, EventCategory, EventRef, EventRegistration, EventStatus, EventSummary, ImageUpload, News, Subscriber,
};

/// Fixed "now" used by validation in tests
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2098, 6, 15, 12, 0, 30).unwrap()
}

/// `day` of January 2099 at `hour`:00 UTC
pub fn jan_2099(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2099, 1, day, hour, 0, 0).unwrap()
}

/// Two-hour event starting at `start`
pub fn create_test_event(id: &str, title: &str, status: EventStatus, start: DateTime<Utc>) -> Event {
    create_test_event_spanning(id, title, status, start, start + Duration::hours(2))
}

pub fn create_test_event_spanning(
    id: &str,
    title: &str,
    status: EventStatus,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("<p>{} description</p>", title),
        category: EventCategory::Workshop,
        language: "english".to_string(),
        status,
        starting_date: start,
        ending_date: end,
        location: "Main Hall".to_string(),
        max_participants: None,
        created_at: test_now(),
        updated_at: test_now(),
    }
}

/// `count` events titled "Event 1".."Event n", one per day
pub fn create_numbered_events(count: usize, status: EventStatus) -> Vec<Event> {
    (1..=count)
        .map(|n| {
            let start = jan_2099(1, 10) + Duration::days(n as i64);
            create_test_event(&format!("e{}", n), &format!("Event {}", n), status, start)
        })
        .collect()
}

pub fn create_test_registration(
    id: &str,
    event_id: EventRef,
    first_name: &str,
    last_name: &str,
    email: &str,
    created_at: DateTime<Utc>,
) -> EventRegistration {
    EventRegistration {
        id: id.to_string(),
        event_id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        phone: "555-0100".to_string(),
        address: None,
        additional_info: None,
        created_at,
        updated_at: None,
    }
}

pub fn embedded_ref(id: &str, title: &str) -> EventRef {
    EventRef::Embedded(EventSummary { id: id.to_string(), title: Some(title.to_string()) })
}

/// Draft that passes validation against [`test_now`]
pub fn valid_event_draft(title: &str) -> EventDraft {
    EventDraft {
        title: title.to_string(),
        description: "<p>Bring water</p>".to_string(),
        starting_date: Some(jan_2099(10, 10)),
        ending_date: Some(jan_2099(10, 12)),
        location: "Studio B".to_string(),
        ..EventDraft::default()
    }
}

pub fn complete_registration_draft() -> RegistrationDraft {
    RegistrationDraft {
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        email: "grace@example.com".to_string(),
        phone: "555-0199".to_string(),
        address: "1 Navy Way, Arlington".to_string(),
        additional_info: String::new(),
    }
}

pub fn create_test_news(id: &str, title: &str, description: &str) -> News {
    News {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: format!("/uploads/{}.png", id),
        created_at: test_now(),
        updated_at: test_now(),
    }
}

pub fn test_image() -> ImageUpload {
    ImageUpload {
        file_name: "cover.png".to_string(),
        content_type: "image/png".to_string(),
        bytes: vec![0x89, b'P', b'N', b'G'],
    }
}

pub fn valid_news_draft(title: &str) -> NewsDraft {
    NewsDraft {
        title: title.to_string(),
        description: "<p>Big news</p>".to_string(),
        image: Some(test_image()),
    }
}

pub fn create_test_subscriber(id: &str, email: &str, created_at: DateTime<Utc>) -> Subscriber {
    Subscriber {
        id: id.to_string(),
        email: email.to_string(),
        created_at,
        updated_at: None,
    }
}
