//! Busy-interval projection over the engine's own interview records

use std::sync::Arc;

use async_trait::async_trait;
use hireflow_domain::constants::SCHEDULED_TITLE_PREFIX;
use hireflow_domain::{CalendarEvent, DateRange, EventSource, Result};

use crate::interviews::ports::InterviewRepository;
use crate::scheduling::ports::BusyEventSource;

/// Adapts stored interviews into the `BusyEventSource` contract.
///
/// Only `pending` and `scheduled` interviews count; terminal statuses
/// fall out of availability automatically once set.
pub struct InterviewBusySource {
    repository: Arc<dyn InterviewRepository>,
}

impl InterviewBusySource {
    pub fn new(repository: Arc<dyn InterviewRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl BusyEventSource for InterviewBusySource {
    async fn fetch_busy(&self, window: DateRange) -> Result<Vec<CalendarEvent>> {
        let interviews = self.repository.list_busy_between(window).await?;

        Ok(interviews
            .into_iter()
            .filter(|interview| interview.status.counts_as_busy())
            .map(|interview| CalendarEvent {
                id: interview.id.to_string(),
                title: format!("{SCHEDULED_TITLE_PREFIX} {}", interview.title),
                start: interview.scheduled_at,
                end: interview.end_at(),
                source: EventSource::InterviewStore,
            })
            .collect())
    }
}
