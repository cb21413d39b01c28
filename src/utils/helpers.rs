//! Helper functions and utilities
//!
//! Date rendering in the configured display zone, text helpers and
//! the small pieces of arithmetic shared by the list views.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use crate::config::DisplayConfig;

/// Renders and parses dates the way the site shows them to users
#[derive(Debug, Clone)]
pub struct DateDisplay {
    offset: FixedOffset,
    date_format: String,
    datetime_format: String,
}

impl DateDisplay {
    pub fn new(config: &DisplayConfig) -> Self {
        let offset = FixedOffset::east_opt(config.utc_offset_minutes * 60)
            .unwrap_or_else(|| Utc.fix());

        Self {
            offset,
            date_format: config.date_format.clone(),
            datetime_format: config.datetime_format.clone(),
        }
    }

    /// UTC with the default formats
    pub fn utc() -> Self {
        Self::new(&DisplayConfig::default())
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Short date, e.g. `1/5/2099`
    pub fn date(&self, timestamp: &DateTime<Utc>) -> String {
        timestamp.with_timezone(&self.offset).format(&self.date_format).to_string()
    }

    /// Date and time, e.g. `Jan 5, 2099, 10:00 AM`
    pub fn datetime(&self, timestamp: &DateTime<Utc>) -> String {
        timestamp.with_timezone(&self.offset).format(&self.datetime_format).to_string()
    }

    /// Calendar day of a timestamp in the display zone (its midnight)
    pub fn local_day(&self, timestamp: &DateTime<Utc>) -> NaiveDate {
        timestamp.with_timezone(&self.offset).date_naive()
    }

    /// Interpret a wall-clock time in the display zone
    pub fn from_local(&self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        self.offset
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Format a timestamp as a `datetime-local` input value (`YYYY-MM-DDTHH:MM`)
    pub fn to_input_value(&self, timestamp: &DateTime<Utc>) -> String {
        timestamp.with_timezone(&self.offset).format("%Y-%m-%dT%H:%M").to_string()
    }

    /// Whether `timestamp` falls in the same calendar month as `now`
    pub fn same_month(&self, timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> bool {
        let a = timestamp.with_timezone(&self.offset);
        let b = now.with_timezone(&self.offset);
        a.year() == b.year() && a.month() == b.month()
    }
}

impl Default for DateDisplay {
    fn default() -> Self {
        Self::utc()
    }
}

/// Case-insensitive substring test; an empty needle always matches
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Calculate pagination offset
pub fn calculate_offset(page: usize, page_size: usize) -> usize {
    page.saturating_sub(1) * page_size
}

/// Keep the first `max_chars` characters, marking a cut with "..."
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars).collect();
        format!("{}...", kept)
    }
}

/// Drop HTML tags from rich-text descriptions for plain previews
pub fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    normalize_whitespace(&out)
}

/// Normalize whitespace in text
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
