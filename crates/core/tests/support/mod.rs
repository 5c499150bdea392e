//! Shared test helpers for `hireflow-core` integration tests.
//!
//! Lightweight in-memory mocks for the persistence, directory, calendar,
//! and model ports so the scheduling tests can focus on behaviour instead
//! of boilerplate.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use hireflow_core::assistant::ports::{ChatTurn, LanguageModel};
use hireflow_core::interviews::ports::{ApplicationDirectory, InterviewRepository};
use hireflow_core::scheduling::ports::BusyEventSource;
use hireflow_domain::{
    CalendarEvent, DateRange, HireflowError, InterviewStatus, InterviewUpdate, JobApplication,
    NewInterview, Result as DomainResult, ScheduledInterview,
};
use uuid::Uuid;

/// In-memory mock for `InterviewRepository`.
#[derive(Default, Clone)]
pub struct MockInterviewRepository {
    records: Arc<Mutex<HashMap<Uuid, ScheduledInterview>>>,
}

impl MockInterviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of one stored record, for assertions.
    pub fn stored(&self, id: Uuid) -> Option<ScheduledInterview> {
        self.records.lock().expect("lock").get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().expect("lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl InterviewRepository for MockInterviewRepository {
    async fn create(
        &self,
        new: NewInterview,
        status: InterviewStatus,
    ) -> DomainResult<ScheduledInterview> {
        let now = Utc::now();
        let interview = ScheduledInterview {
            id: Uuid::new_v4(),
            application_id: new.application_id,
            title: new.title,
            interview_type: new.interview_type,
            scheduled_at: new.scheduled_at,
            duration_minutes: new.duration_minutes,
            timezone: new.timezone,
            location: new.location,
            meeting_link: new.meeting_link,
            interviewer_name: new.interviewer_name,
            interviewer_email: new.interviewer_email,
            notes: new.notes,
            status,
            created_at: now,
            updated_at: now,
        };
        self.records.lock().expect("lock").insert(interview.id, interview.clone());
        Ok(interview)
    }

    async fn get(&self, id: Uuid) -> DomainResult<ScheduledInterview> {
        self.records
            .lock()
            .expect("lock")
            .get(&id)
            .cloned()
            .ok_or_else(|| HireflowError::NotFound(format!("interview {id}")))
    }

    async fn update(&self, id: Uuid, patch: InterviewUpdate) -> DomainResult<ScheduledInterview> {
        let mut records = self.records.lock().expect("lock");
        let interview = records
            .get_mut(&id)
            .ok_or_else(|| HireflowError::NotFound(format!("interview {id}")))?;

        if let Some(title) = patch.title {
            interview.title = title;
        }
        if let Some(interview_type) = patch.interview_type {
            interview.interview_type = interview_type;
        }
        if let Some(scheduled_at) = patch.scheduled_at {
            interview.scheduled_at = scheduled_at;
        }
        if let Some(duration) = patch.duration_minutes {
            interview.duration_minutes = duration;
        }
        if let Some(timezone) = patch.timezone {
            interview.timezone = timezone;
        }
        if let Some(location) = patch.location {
            interview.location = Some(location);
        }
        if let Some(meeting_link) = patch.meeting_link {
            interview.meeting_link = Some(meeting_link);
        }
        if let Some(interviewer_name) = patch.interviewer_name {
            interview.interviewer_name = Some(interviewer_name);
        }
        if let Some(interviewer_email) = patch.interviewer_email {
            interview.interviewer_email = Some(interviewer_email);
        }
        if let Some(notes) = patch.notes {
            interview.notes = Some(notes);
        }
        if let Some(status) = patch.status {
            interview.status = status;
        }
        interview.updated_at = Utc::now();
        Ok(interview.clone())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.records
            .lock()
            .expect("lock")
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| HireflowError::NotFound(format!("interview {id}")))
    }

    async fn transition_status(
        &self,
        id: Uuid,
        from: InterviewStatus,
        to: InterviewStatus,
    ) -> DomainResult<ScheduledInterview> {
        let mut records = self.records.lock().expect("lock");
        let interview = records
            .get_mut(&id)
            .ok_or_else(|| HireflowError::NotFound(format!("interview {id}")))?;
        if interview.status != from {
            return Err(HireflowError::Conflict(format!(
                "interview {id} is no longer {}",
                from.as_str()
            )));
        }
        interview.status = to;
        interview.updated_at = Utc::now();
        Ok(interview.clone())
    }

    async fn list_busy_between(&self, window: DateRange) -> DomainResult<Vec<ScheduledInterview>> {
        let mut busy: Vec<ScheduledInterview> = self
            .records
            .lock()
            .expect("lock")
            .values()
            .filter(|i| i.status.counts_as_busy())
            .filter(|i| i.scheduled_at <= window.end && i.end_at() >= window.start)
            .cloned()
            .collect();
        busy.sort_by_key(|i| i.scheduled_at);
        Ok(busy)
    }

    async fn list_by_application(
        &self,
        application_id: Uuid,
    ) -> DomainResult<Vec<ScheduledInterview>> {
        Ok(self
            .records
            .lock()
            .expect("lock")
            .values()
            .filter(|i| i.application_id == application_id)
            .cloned()
            .collect())
    }
}

/// Busy source returning a fixed event list.
#[derive(Default, Clone)]
pub struct StaticBusySource {
    events: Vec<CalendarEvent>,
}

impl StaticBusySource {
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl BusyEventSource for StaticBusySource {
    async fn fetch_busy(&self, window: DateRange) -> DomainResult<Vec<CalendarEvent>> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.start <= window.end && e.end >= window.start)
            .cloned()
            .collect())
    }
}

/// Busy source that always fails, for fail-open tests.
pub struct FailingBusySource;

#[async_trait]
impl BusyEventSource for FailingBusySource {
    async fn fetch_busy(&self, _window: DateRange) -> DomainResult<Vec<CalendarEvent>> {
        Err(HireflowError::CollaboratorUnavailable("calendar API timed out".into()))
    }
}

/// Language model returning scripted replies in order and recording what
/// it was asked.
#[derive(Default)]
pub struct ScriptedLanguageModel {
    replies: Mutex<Vec<String>>,
    calls: Mutex<Vec<(String, Vec<ChatTurn>)>>,
}

impl ScriptedLanguageModel {
    pub fn new(replies: Vec<&str>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().rev().map(String::from).collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Prompts and turns seen so far.
    pub fn calls(&self) -> Vec<(String, Vec<ChatTurn>)> {
        self.calls.lock().expect("lock").clone()
    }
}

#[async_trait]
impl LanguageModel for ScriptedLanguageModel {
    async fn generate(&self, system_prompt: &str, turns: &[ChatTurn]) -> DomainResult<String> {
        self.calls.lock().expect("lock").push((system_prompt.to_string(), turns.to_vec()));
        self.replies
            .lock()
            .expect("lock")
            .pop()
            .ok_or_else(|| HireflowError::Network("no scripted reply left".into()))
    }
}

/// Fixed application directory.
#[derive(Default, Clone)]
pub struct MockApplicationDirectory {
    applications: Vec<JobApplication>,
}

impl MockApplicationDirectory {
    pub fn new(applications: Vec<JobApplication>) -> Self {
        Self { applications }
    }
}

#[async_trait]
impl ApplicationDirectory for MockApplicationDirectory {
    async fn list_applications(&self) -> DomainResult<Vec<JobApplication>> {
        Ok(self.applications.clone())
    }
}

/// Convenience application fixture.
pub fn application(company: &str) -> JobApplication {
    JobApplication {
        id: Uuid::new_v4(),
        company_name: company.to_string(),
        role_title: "Software Engineer".to_string(),
    }
}
