//! Busy-interval events and fetch windows

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Where a busy interval was sourced from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSource {
    /// Event fetched from the external calendar API
    ExternalCalendar,
    /// Synthetic event projected from a stored interview record
    InterviewStore,
}

/// A busy interval, read-only projection from either source.
///
/// Not owned by the scheduling engine; lifetime is bounded by the query
/// that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub source: EventSource,
}

impl CalendarEvent {
    /// Whether this event overlaps the half-open interval `[start, end)`.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start < end && self.end > start
    }
}

/// An inclusive UTC window used when fetching busy intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Window starting at `from` and extending `days` forward.
    pub fn next_days(from: DateTime<Utc>, days: i64) -> Self {
        Self { start: from, end: from + Duration::days(days) }
    }
}
