//! Reconciliation of busy intervals fetched from multiple sources.
//!
//! The same interview frequently exists both in the internal store and,
//! independently, on the external calendar; the two copies can disagree by
//! a few minutes due to timezone/precision differences and must not
//! double-count busy time.

use chrono::Duration;
use hireflow_domain::constants::DUPLICATE_START_TOLERANCE_MINUTES;
use hireflow_domain::CalendarEvent;
use tracing::debug;

/// Drop events that duplicate an already-accepted one.
///
/// Two events are the same real-world meeting when their starts differ by
/// less than five minutes; the earliest-seen event wins. Each candidate is
/// compared only against previously accepted events (stable prefix scan),
/// which is quadratic but fine for the tens of events a request sees.
pub fn dedup_events(events: Vec<CalendarEvent>) -> Vec<CalendarEvent> {
    let tolerance = Duration::minutes(DUPLICATE_START_TOLERANCE_MINUTES);
    let mut accepted: Vec<CalendarEvent> = Vec::with_capacity(events.len());

    for event in events {
        let duplicate_of = accepted
            .iter()
            .find(|kept| (event.start - kept.start).abs() < tolerance)
            .map(|kept| kept.id.clone());

        match duplicate_of {
            Some(kept_id) => {
                debug!(event_id = %event.id, kept_id = %kept_id, "dropping duplicate busy event");
            }
            None => accepted.push(event),
        }
    }

    accepted
}
