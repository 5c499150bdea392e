//! Availability service - fetch, reconcile, compute

use std::sync::Arc;

use chrono_tz::Tz;
use hireflow_domain::{AvailableSlot, CalendarEvent, DateRange, HireflowError, Result};
use tracing::{debug, warn};

use super::availability::find_slots;
use super::ports::BusyEventSource;
use super::reconcile::dedup_events;

/// Computes free slots from the external calendar and the engine's own
/// interview records.
pub struct AvailabilityService {
    calendar: Arc<dyn BusyEventSource>,
    interviews: Arc<dyn BusyEventSource>,
}

impl AvailabilityService {
    /// Create a new availability service over the two busy sources.
    pub fn new(calendar: Arc<dyn BusyEventSource>, interviews: Arc<dyn BusyEventSource>) -> Self {
        Self { calendar, interviews }
    }

    /// Fetch both sources concurrently and reconcile the result.
    ///
    /// Fail-open: a failed source is logged and skipped, so an outage
    /// produces over-optimistic availability instead of blocking
    /// scheduling entirely.
    pub async fn busy_events(&self, window: DateRange) -> Vec<CalendarEvent> {
        let (calendar_result, interviews_result) =
            tokio::join!(self.calendar.fetch_busy(window), self.interviews.fetch_busy(window));

        let mut events = Vec::new();
        match calendar_result {
            Ok(mut fetched) => events.append(&mut fetched),
            Err(err) => {
                warn!(error = %err, "calendar source unavailable, proceeding without it");
            }
        }
        match interviews_result {
            Ok(mut fetched) => events.append(&mut fetched),
            Err(err) => {
                warn!(error = %err, "interview store unavailable, proceeding without it");
            }
        }

        let deduped = dedup_events(events);
        debug!(count = deduped.len(), "reconciled busy events");
        deduped
    }

    /// Compute free slots for the window. Exposed directly for manual
    /// (non-AI) scheduling UIs.
    pub async fn compute_availability(
        &self,
        window: DateRange,
        duration_minutes: i64,
        tz: Tz,
    ) -> Result<Vec<AvailableSlot>> {
        if duration_minutes <= 0 {
            return Err(HireflowError::InvalidInput(format!(
                "duration must be positive, got {duration_minutes}"
            )));
        }
        if window.end <= window.start {
            return Err(HireflowError::InvalidInput("date range is empty".into()));
        }

        let busy = self.busy_events(window).await;
        Ok(find_slots(&busy, window, duration_minutes, tz))
    }
}
