//! CSV export of participants and newsletter subscribers
//!
//! Fields containing a comma, a quote or a line break are quoted and inner
//! quotes doubled (RFC 4180), so free-text addresses survive a round trip
//! through a spreadsheet.

use std::io::Write;
use std::path::Path;
use tracing::info;
use crate::models::{Event, EventRegistration, Subscriber};
use crate::utils::errors::{EventHubError, Result};
use crate::utils::helpers::DateDisplay;

pub const PARTICIPANTS_HEADER: [&str; 7] = [
    "Event",
    "First Name",
    "Last Name",
    "Email",
    "Phone",
    "Address",
    "Registration Date",
];

pub const SUBSCRIBERS_HEADER: [&str; 2] = ["Email", "Subscription Date"];

/// Write one row per registration, event names resolved against `events`
pub fn write_participants<W: Write>(
    writer: W,
    registrations: &[EventRegistration],
    events: &[Event],
    display: &DateDisplay,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(PARTICIPANTS_HEADER)?;

    for registration in registrations {
        wtr.write_record([
            registration.event_id.display_name(events, true),
            registration.first_name.as_str(),
            registration.last_name.as_str(),
            registration.email.as_str(),
            registration.phone.as_str(),
            registration.address.as_deref().unwrap_or(""),
            display.date(&registration.created_at).as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn participants_to_string(
    registrations: &[EventRegistration],
    events: &[Event],
    display: &DateDisplay,
) -> Result<String> {
    let mut buffer = Vec::new();
    write_participants(&mut buffer, registrations, events, display)?;
    String::from_utf8(buffer).map_err(|e| EventHubError::InvalidInput(e.to_string()))
}

pub fn write_subscribers<W: Write>(writer: W, subscribers: &[Subscriber], display: &DateDisplay) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(SUBSCRIBERS_HEADER)?;
    for subscriber in subscribers {
        wtr.write_record([subscriber.email.as_str(), display.date(&subscriber.created_at).as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn subscribers_to_string(subscribers: &[Subscriber], display: &DateDisplay) -> Result<String> {
    let mut buffer = Vec::new();
    write_subscribers(&mut buffer, subscribers, display)?;
    String::from_utf8(buffer).map_err(|e| EventHubError::InvalidInput(e.to_string()))
}

/// Write already rendered CSV content to `path`
pub fn export_to_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, content)?;
    info!(path = %path.display(), bytes = content.len(), "CSV export written");
    Ok(())
}
