//! Port interfaces for interview persistence and application lookup

use async_trait::async_trait;
use hireflow_domain::{
    DateRange, InterviewStatus, InterviewUpdate, JobApplication, NewInterview, Result,
    ScheduledInterview,
};
use uuid::Uuid;

/// Trait for persisting interview records
#[async_trait]
pub trait InterviewRepository: Send + Sync {
    /// Create an interview with the given initial status.
    async fn create(&self, new: NewInterview, status: InterviewStatus)
        -> Result<ScheduledInterview>;

    /// Fetch one interview by id.
    async fn get(&self, id: Uuid) -> Result<ScheduledInterview>;

    /// Apply a partial update. Status set through this path is an
    /// unguarded overwrite.
    async fn update(&self, id: Uuid, patch: InterviewUpdate) -> Result<ScheduledInterview>;

    /// Hard delete, unconditional.
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Move `id` from `from` to `to` only if it is still in `from`.
    ///
    /// The guard is the optimistic-concurrency check for approvals: a
    /// record that raced to a different status yields `Conflict` and
    /// stays unchanged.
    async fn transition_status(
        &self,
        id: Uuid,
        from: InterviewStatus,
        to: InterviewStatus,
    ) -> Result<ScheduledInterview>;

    /// Interviews in a busy-counting status within the window.
    async fn list_busy_between(&self, window: DateRange) -> Result<Vec<ScheduledInterview>>;

    /// All interviews for one application.
    async fn list_by_application(&self, application_id: Uuid) -> Result<Vec<ScheduledInterview>>;
}

/// Trait for listing known job applications (confirmation-time matching)
#[async_trait]
pub trait ApplicationDirectory: Send + Sync {
    async fn list_applications(&self) -> Result<Vec<JobApplication>>;
}
