//! Scheduling assistant service - the dialogue controller
//!
//! Turns a free-text scheduling request plus computed availability into a
//! slot proposal, and a user-confirmed slot into an interview record.
//! Two-phase by design: proposing is a pure read, persistence happens
//! only on explicit confirmation.

use std::sync::Arc;

use chrono::Utc;
use chrono_tz::Tz;
use hireflow_domain::constants::DEFAULT_LOOKAHEAD_DAYS;
use hireflow_domain::{
    AssistantReply, ConversationSession, DateRange, HireflowError, InterviewType, InterviewUpdate,
    JobApplication, NewInterview, Result, ScheduledInterview, SuggestedSlot,
};
use tracing::{debug, info};
use uuid::Uuid;

use super::parser::parse_assistant_reply;
use super::ports::LanguageModel;
use super::prompt::build_system_prompt;
use super::session::history_turns;
use crate::interviews::ports::ApplicationDirectory;
use crate::interviews::InterviewService;
use crate::scheduling::availability::find_slots;
use crate::scheduling::timezone::{local_to_utc, parse_local_date, parse_local_time};
use crate::scheduling::AvailabilityService;

/// Mediates between free-text requests, computed availability, and the
/// language model collaborator.
pub struct SchedulingAssistant {
    availability: Arc<AvailabilityService>,
    interviews: Arc<InterviewService>,
    applications: Arc<dyn ApplicationDirectory>,
    model: Arc<dyn LanguageModel>,
}

impl SchedulingAssistant {
    pub fn new(
        availability: Arc<AvailabilityService>,
        interviews: Arc<InterviewService>,
        applications: Arc<dyn ApplicationDirectory>,
        model: Arc<dyn LanguageModel>,
    ) -> Self {
        Self { availability, interviews, applications, model }
    }

    /// Process one user turn: recompute availability, ask the model for
    /// up to three slots, and append both sides to the session log.
    ///
    /// Busy and free sets are recomputed per message, not cached, since
    /// calendar state may have changed between turns.
    pub async fn get_suggestions(
        &self,
        session: &mut ConversationSession,
        user_message: &str,
        duration_minutes: i64,
        window: Option<DateRange>,
        tz: Tz,
    ) -> Result<AssistantReply> {
        if duration_minutes <= 0 {
            return Err(HireflowError::InvalidInput(format!(
                "duration must be positive, got {duration_minutes}"
            )));
        }

        session.push_user(user_message);

        let window =
            window.unwrap_or_else(|| DateRange::next_days(Utc::now(), DEFAULT_LOOKAHEAD_DAYS));
        let busy = self.availability.busy_events(window).await;
        let free = find_slots(&busy, window, duration_minutes, tz);
        session.last_availability = free.clone();

        let today = Utc::now().with_timezone(&tz).date_naive();
        let prompt = build_system_prompt(today, tz, duration_minutes, &busy, &free);
        let turns = history_turns(session);
        debug!(busy = busy.len(), free = free.len(), turns = turns.len(), "requesting suggestions");

        let raw = self.model.generate(&prompt, &turns).await?;
        let reply = parse_assistant_reply(&raw);

        session.push_assistant(reply.message.clone(), reply.suggested_slots.clone());
        Ok(reply)
    }

    /// Confirm a proposed slot: resolve the owning application, convert
    /// the wall-clock slot to UTC, and persist.
    ///
    /// Creates a pending interview, or moves the referenced one when the
    /// slot carries an `interview_id`. Fails without writing anything if
    /// no application can be resolved.
    pub async fn confirm_slot(
        &self,
        slot: &SuggestedSlot,
        duration_minutes: i64,
        tz: Tz,
        interview_type: InterviewType,
        title: Option<String>,
    ) -> Result<ScheduledInterview> {
        let date = parse_local_date(&slot.date)?;
        let time = parse_local_time(&slot.start_time)?;
        let scheduled_at = local_to_utc(date, time, tz);

        if let Some(interview_id) = slot.interview_id {
            let patch = InterviewUpdate {
                scheduled_at: Some(scheduled_at),
                duration_minutes: Some(duration_minutes),
                timezone: Some(tz.name().to_string()),
                ..InterviewUpdate::default()
            };
            let updated = self.interviews.update(interview_id, patch).await?;
            info!(id = %updated.id, "interview rescheduled from confirmed slot");
            return Ok(updated);
        }

        let application = self
            .resolve_application(slot.application_id, slot.company_name.as_deref())
            .await?;
        let title = title.unwrap_or_else(|| format!("Interview with {}", application.company_name));

        let created = self
            .interviews
            .create_pending(NewInterview {
                application_id: application.id,
                title,
                interview_type,
                scheduled_at,
                duration_minutes,
                timezone: tz.name().to_string(),
                location: None,
                meeting_link: None,
                interviewer_name: None,
                interviewer_email: None,
                notes: if slot.reason.is_empty() { None } else { Some(slot.reason.clone()) },
            })
            .await?;
        info!(id = %created.id, application_id = %application.id, "interview created from confirmed slot");
        Ok(created)
    }

    /// Explicit id wins; otherwise fuzzy-match by company name. Never
    /// silently guesses.
    async fn resolve_application(
        &self,
        id: Option<Uuid>,
        company: Option<&str>,
    ) -> Result<JobApplication> {
        let applications = self.applications.list_applications().await?;

        if let Some(id) = id {
            return applications.into_iter().find(|a| a.id == id).ok_or_else(|| {
                HireflowError::NoMatchingApplication(format!("no application with id {id}"))
            });
        }

        let company = company.map(str::trim).unwrap_or_default();
        if company.is_empty() {
            return Err(HireflowError::NoMatchingApplication(
                "slot carries neither an application id nor a company name".into(),
            ));
        }

        let needle = company.to_lowercase();
        applications
            .into_iter()
            .find(|a| {
                let haystack = a.company_name.to_lowercase();
                haystack.contains(&needle) || needle.contains(&haystack)
            })
            .ok_or_else(|| {
                HireflowError::NoMatchingApplication(format!(
                    "no tracked application matches company {company:?}"
                ))
            })
    }
}
