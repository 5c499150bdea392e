//! Port interfaces for busy-interval sources

use async_trait::async_trait;
use hireflow_domain::{CalendarEvent, DateRange, Result};

/// Trait for anything that can report busy intervals.
///
/// Implemented by the external calendar client and by the projection over
/// the engine's own interview records. Both ends of the window are
/// inclusive.
#[async_trait]
pub trait BusyEventSource: Send + Sync {
    /// Fetch busy intervals within the window.
    async fn fetch_busy(&self, window: DateRange) -> Result<Vec<CalendarEvent>>;
}
