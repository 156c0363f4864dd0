use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Event;

/// Whether an event sits before or after a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
#[serde(rename_all = "lowercase")]
pub enum EventBucket {
    Upcoming,
    Past,
}

impl EventBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventBucket::Upcoming => "upcoming",
            EventBucket::Past => "past",
        }
    }
}

impl std::str::FromStr for EventBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(EventBucket::Upcoming),
            "past" => Ok(EventBucket::Past),
            other => Err(format!("unknown event bucket: {other}")),
        }
    }
}

/// Parses the date strings the backend actually sends. Tries, in order:
/// RFC 3339 (any offset, converted to UTC), a naive `YYYY-MM-DDTHH:MM:SS`
/// timestamp read as UTC, and a bare `YYYY-MM-DD` read as UTC midnight.
pub fn parse_event_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(DateTime::from_naive_utc_and_offset(naive, Utc));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

impl Event {
    /// The event's start as an instant, if its `startDate` parses.
    pub fn start_instant(&self) -> Option<DateTime<Utc>> {
        self.start_date.as_deref().and_then(parse_event_datetime)
    }

    /// The event's end as an instant, if an `endDate` is set and parses.
    pub fn end_instant(&self) -> Option<DateTime<Utc>> {
        self.end_date.as_deref().and_then(parse_event_datetime)
    }
}

/// Buckets an event by its start date alone; the end date plays no part, so a
/// multi-day event already underway still counts as past. `None` means the
/// start date is missing or unparsable and the event belongs in no bucket.
pub fn classify_event(event: &Event, now: DateTime<Utc>) -> Option<EventBucket> {
    let start = event.start_instant()?;
    if start >= now {
        Some(EventBucket::Upcoming)
    } else {
        Some(EventBucket::Past)
    }
}

/// Splits events into `(upcoming, past)`, each keeping the input order.
/// Events with no usable start date are dropped from both, never an error.
pub fn partition_events(events: &[Event], now: DateTime<Utc>) -> (Vec<Event>, Vec<Event>) {
    let mut upcoming = Vec::new();
    let mut past = Vec::new();
    for event in events {
        match classify_event(event, now) {
            Some(EventBucket::Upcoming) => upcoming.push(event.clone()),
            Some(EventBucket::Past) => past.push(event.clone()),
            None => {
                tracing::debug!(id = %event.id, "skipping event with unparsable start date")
            }
        }
    }
    (upcoming, past)
}
