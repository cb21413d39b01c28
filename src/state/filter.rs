//! Event list filtering
//!
//! A record passes when it satisfies every active filter. Each sub-filter is
//! exposed on its own so callers (and tests) can reason about them separately.

use std::fmt;
use std::str::FromStr;
use chrono::NaiveDate;
use crate::models::event::{Event, EventStatus};
use crate::utils::errors::EventHubError;
use crate::utils::helpers::{contains_ignore_case, DateDisplay};

/// Sentinel value of the status selector meaning "no status filter"
pub const ALL_SENTINEL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(EventStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: EventStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str(ALL_SENTINEL),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = EventHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_SENTINEL {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

/// How the date filter text is matched against an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePolicy {
    /// Filter text is a substring of the rendered start or end date
    Substring,
    /// Filter is a `YYYY-MM-DD` day within the event's day span, inclusive
    Range,
}

/// Per-view filter selections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub status: StatusFilter,
    pub title: String,
    pub date: String,
}

impl FilterState {
    pub fn is_active(&self) -> bool {
        self.status != StatusFilter::All || !self.title.is_empty() || !self.date.is_empty()
    }

    pub fn matches_status(&self, event: &Event) -> bool {
        self.status.matches(event.status)
    }

    pub fn matches_title(&self, event: &Event) -> bool {
        contains_ignore_case(&event.title, &self.title)
    }

    pub fn matches_date(&self, event: &Event, policy: DatePolicy, display: &DateDisplay) -> bool {
        if self.date.is_empty() {
            return true;
        }

        match policy {
            DatePolicy::Substring => {
                display.date(&event.starting_date).contains(&self.date)
                    || display.date(&event.ending_date).contains(&self.date)
            }
            DatePolicy::Range => match NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d") {
                Ok(day) => {
                    let start = display.local_day(&event.starting_date);
                    let end = display.local_day(&event.ending_date);
                    (start <= day && day <= end) || day == start || day == end
                }
                // An unreadable date matches nothing
                Err(_) => false,
            },
        }
    }

    /// Conjunction of the status, title and date filters
    pub fn matches(&self, event: &Event, policy: DatePolicy, display: &DateDisplay) -> bool {
        self.matches_status(event) && self.matches_title(event) && self.matches_date(event, policy, display)
    }

    /// Filtered view over `events`, preserving their order
    pub fn apply<'a>(&self, events: &'a [Event], policy: DatePolicy, display: &DateDisplay) -> Vec<&'a Event> {
        events.iter().filter(|event| self.matches(event, policy, display)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use proptest::prelude::*;
    use crate::models::event::EventCategory;

    fn event(id: &str, title: &str, status: EventStatus, start: DateTime<Utc>, end: DateTime<Utc>) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            description: "d".to_string(),
            category: EventCategory::Workshop,
            language: "english".to_string(),
            status,
            starting_date: start,
            ending_date: end,
            location: "Hall".to_string(),
            max_participants: None,
            created_at: start,
            updated_at: start,
        }
    }

    fn jan(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2099, 1, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_status_filter_parsing() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "upcoming".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(EventStatus::Upcoming)
        );
        assert!("Upcoming".parse::<StatusFilter>().is_err());
        assert_eq!(StatusFilter::Only(EventStatus::Active).to_string(), "active");
    }

    #[test]
    fn test_upcoming_filter_counts_regardless_of_order() {
        let mut events = Vec::new();
        for i in 0..15 {
            let status = if i % 3 == 0 { EventStatus::Upcoming } else { EventStatus::Completed };
            events.push(event(&format!("e{}", i), "Talk", status, jan(2, 9), jan(2, 11)));
        }
        let filter = FilterState { status: StatusFilter::Only(EventStatus::Upcoming), ..FilterState::default() };
        let display = DateDisplay::utc();

        assert_eq!(filter.apply(&events, DatePolicy::Substring, &display).len(), 5);
        events.reverse();
        assert_eq!(filter.apply(&events, DatePolicy::Substring, &display).len(), 5);
    }

    #[test]
    fn test_title_filter_ignores_case() {
        let e = event("e1", "Annual ABC Summit", EventStatus::Active, jan(2, 9), jan(2, 11));
        let upper = FilterState { title: "ABC".to_string(), ..FilterState::default() };
        let lower = FilterState { title: "abc".to_string(), ..FilterState::default() };
        assert!(upper.matches_title(&e));
        assert!(lower.matches_title(&e));
    }

    #[test]
    fn test_substring_policy_matches_rendered_dates() {
        let display = DateDisplay::utc();
        let e = event("e1", "Talk", EventStatus::Active, jan(5, 9), jan(7, 17));
        let by_start = FilterState { date: "1/5/".to_string(), ..FilterState::default() };
        let by_end = FilterState { date: "1/7/2099".to_string(), ..FilterState::default() };
        let neither = FilterState { date: "1/6/2099".to_string(), ..FilterState::default() };

        assert!(by_start.matches_date(&e, DatePolicy::Substring, &display));
        assert!(by_end.matches_date(&e, DatePolicy::Substring, &display));
        assert!(!neither.matches_date(&e, DatePolicy::Substring, &display));
    }

    #[test]
    fn test_range_policy_is_inclusive_on_days() {
        let display = DateDisplay::utc();
        let e = event("e1", "Conference", EventStatus::Upcoming, jan(5, 18), jan(7, 9));
        let on = |date: &str| FilterState { date: date.to_string(), ..FilterState::default() };

        assert!(on("2099-01-05").matches_date(&e, DatePolicy::Range, &display));
        assert!(on("2099-01-06").matches_date(&e, DatePolicy::Range, &display));
        assert!(on("2099-01-07").matches_date(&e, DatePolicy::Range, &display));
        assert!(!on("2099-01-04").matches_date(&e, DatePolicy::Range, &display));
        assert!(!on("2099-01-08").matches_date(&e, DatePolicy::Range, &display));
        assert!(!on("garbage").matches_date(&e, DatePolicy::Range, &display));
    }

    #[test]
    fn test_range_policy_single_day_event() {
        let display = DateDisplay::utc();
        let e = event("e1", "Workshop", EventStatus::Active, jan(5, 9), jan(5, 17));
        let same = FilterState { date: "2099-01-05".to_string(), ..FilterState::default() };
        let next = FilterState { date: "2099-01-06".to_string(), ..FilterState::default() };
        assert!(same.matches_date(&e, DatePolicy::Range, &display));
        assert!(!next.matches_date(&e, DatePolicy::Range, &display));
    }

    fn status_strategy() -> impl Strategy<Value = EventStatus> {
        prop::sample::select(EventStatus::ALL.to_vec())
    }

    fn status_filter_strategy() -> impl Strategy<Value = StatusFilter> {
        prop_oneof![Just(StatusFilter::All), status_strategy().prop_map(StatusFilter::Only)]
    }

    proptest! {
        #[test]
        fn prop_matches_is_conjunction(
            status in status_strategy(),
            wanted in status_filter_strategy(),
            title in "[a-zA-Z ]{0,12}",
            needle in "[a-zA-Z]{0,3}",
            day in 1u32..28,
            span in 0i64..5,
            filter_day in 1u32..28,
            range in any::<bool>(),
        ) {
            let start = jan(day, 10);
            let e = event("e", &title, status, start, start + Duration::days(span));
            let policy = if range { DatePolicy::Range } else { DatePolicy::Substring };
            let date = if range { format!("2099-01-{:02}", filter_day) } else { format!("1/{}/", filter_day) };
            let filter = FilterState { status: wanted, title: needle, date };
            let display = DateDisplay::utc();

            let expected = filter.matches_status(&e)
                && filter.matches_title(&e)
                && filter.matches_date(&e, policy, &display);
            prop_assert_eq!(filter.matches(&e, policy, &display), expected);
        }

        #[test]
        fn prop_title_filter_case_insensitive(title in "[a-zA-Z ]{0,16}", needle in "[a-zA-Z]{1,4}") {
            let e = event("e", &title, EventStatus::Active, jan(3, 9), jan(3, 10));
            let upper = FilterState { title: needle.to_uppercase(), ..FilterState::default() };
            let lower = FilterState { title: needle.to_lowercase(), ..FilterState::default() };
            let display = DateDisplay::utc();
            prop_assert_eq!(
                upper.matches(&e, DatePolicy::Substring, &display),
                lower.matches(&e, DatePolicy::Substring, &display)
            );
        }
    }
}
