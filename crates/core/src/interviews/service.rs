//! Interview lifecycle service

use std::sync::Arc;

use hireflow_domain::{
    HireflowError, InterviewStatus, InterviewUpdate, NewInterview, Result, ScheduledInterview,
};
use tracing::info;
use uuid::Uuid;

use super::ports::InterviewRepository;

/// Owns the `ScheduledInterview` state machine and its CRUD operations.
pub struct InterviewService {
    repository: Arc<dyn InterviewRepository>,
}

impl InterviewService {
    pub fn new(repository: Arc<dyn InterviewRepository>) -> Self {
        Self { repository }
    }

    /// Direct manual scheduling: the record is live immediately.
    pub async fn schedule(&self, new: NewInterview) -> Result<ScheduledInterview> {
        let interview = self.repository.create(new, InterviewStatus::Scheduled).await?;
        info!(id = %interview.id, "interview scheduled");
        Ok(interview)
    }

    /// AI-assisted entry path: the record awaits human approval.
    pub async fn create_pending(&self, new: NewInterview) -> Result<ScheduledInterview> {
        let interview = self.repository.create(new, InterviewStatus::Pending).await?;
        info!(id = %interview.id, "interview created pending approval");
        Ok(interview)
    }

    pub async fn get(&self, id: Uuid) -> Result<ScheduledInterview> {
        self.repository.get(id).await
    }

    pub async fn list_by_application(
        &self,
        application_id: Uuid,
    ) -> Result<Vec<ScheduledInterview>> {
        self.repository.list_by_application(application_id).await
    }

    /// `pending -> scheduled`. Rejected from any other state, record
    /// unchanged.
    pub async fn approve(&self, id: Uuid) -> Result<ScheduledInterview> {
        self.guarded_transition(id, InterviewStatus::Pending, InterviewStatus::Scheduled).await
    }

    /// `scheduled -> pending`. Rejected from any other state, record
    /// unchanged.
    pub async fn revert_to_pending(&self, id: Uuid) -> Result<ScheduledInterview> {
        self.guarded_transition(id, InterviewStatus::Scheduled, InterviewStatus::Pending).await
    }

    /// Partial update. Unlike approve/revert, a status carried here is an
    /// arbitrary overwrite (used for completed/cancelled/no_show/
    /// rescheduled bookkeeping).
    pub async fn update(&self, id: Uuid, patch: InterviewUpdate) -> Result<ScheduledInterview> {
        if let Some(duration) = patch.duration_minutes {
            if duration <= 0 {
                return Err(HireflowError::InvalidInput(format!(
                    "duration must be positive, got {duration}"
                )));
            }
        }
        self.repository.update(id, patch).await
    }

    /// Hard delete; no soft-delete or undo. Terminal or deleted records
    /// drop out of availability via the busy projection.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.repository.delete(id).await?;
        info!(%id, "interview deleted");
        Ok(())
    }

    async fn guarded_transition(
        &self,
        id: Uuid,
        from: InterviewStatus,
        to: InterviewStatus,
    ) -> Result<ScheduledInterview> {
        let current = self.repository.get(id).await?;
        if current.status != from {
            return Err(HireflowError::InvalidTransition(format!(
                "interview {id} is {}, expected {}",
                current.status.as_str(),
                from.as_str()
            )));
        }

        // The repository re-checks the status inside the write; a racing
        // update surfaces as Conflict rather than being overwritten.
        let updated = self.repository.transition_status(id, from, to).await?;
        info!(%id, from = from.as_str(), to = to.as_str(), "interview status transition");
        Ok(updated)
    }
}
