//! SQLite-backed implementation of the InterviewRepository port.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hireflow_core::interviews::ports::InterviewRepository;
use hireflow_domain::{
    DateRange, HireflowError, InterviewStatus, InterviewType, InterviewUpdate, NewInterview,
    Result, ScheduledInterview,
};
use rusqlite::{params, Row};
use tracing::{debug, instrument};
use uuid::Uuid;

use super::manager::DbPool;
use crate::errors::InfraError;

const SELECT_COLUMNS: &str = "id, application_id, title, interview_type, scheduled_at, \
     duration_minutes, timezone, location, meeting_link, interviewer_name, interviewer_email, \
     notes, status, created_at, updated_at";

/// SQLite implementation of [`InterviewRepository`].
pub struct SqliteInterviewRepository {
    pool: DbPool,
}

impl SqliteInterviewRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn fetch(&self, id: Uuid) -> Result<ScheduledInterview> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        let row = conn
            .query_row(
                &format!("SELECT {SELECT_COLUMNS} FROM scheduled_interviews WHERE id = ?1"),
                params![id.to_string()],
                read_row,
            )
            .map_err(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => {
                    HireflowError::NotFound(format!("interview {id}"))
                }
                other => InfraError::from(other).into(),
            })?;
        row.into_interview()
    }
}

#[async_trait]
impl InterviewRepository for SqliteInterviewRepository {
    #[instrument(skip(self, new), fields(title = %new.title))]
    async fn create(
        &self,
        new: NewInterview,
        status: InterviewStatus,
    ) -> Result<ScheduledInterview> {
        let conn = self.pool.get().map_err(InfraError::from)?;
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

        conn.execute(
            "INSERT INTO scheduled_interviews (
                id, application_id, title, interview_type, scheduled_at,
                duration_minutes, timezone, location, meeting_link,
                interviewer_name, interviewer_email, notes, status,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
            params![
                interview.id.to_string(),
                interview.application_id.to_string(),
                interview.title,
                interview.interview_type.as_str(),
                interview.scheduled_at.timestamp(),
                interview.duration_minutes,
                interview.timezone,
                interview.location,
                interview.meeting_link,
                interview.interviewer_name,
                interview.interviewer_email,
                interview.notes,
                interview.status.as_str(),
                interview.created_at.timestamp(),
                interview.updated_at.timestamp(),
            ],
        )
        .map_err(InfraError::from)?;

        debug!(id = %interview.id, status = interview.status.as_str(), "interview created");
        Ok(interview)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: Uuid) -> Result<ScheduledInterview> {
        self.fetch(id)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: Uuid, patch: InterviewUpdate) -> Result<ScheduledInterview> {
        let mut interview = self.fetch(id)?;

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

        let conn = self.pool.get().map_err(InfraError::from)?;
        let changed = conn
            .execute(
                "UPDATE scheduled_interviews SET
                    title = ?1, interview_type = ?2, scheduled_at = ?3,
                    duration_minutes = ?4, timezone = ?5, location = ?6,
                    meeting_link = ?7, interviewer_name = ?8, interviewer_email = ?9,
                    notes = ?10, status = ?11, updated_at = ?12
                 WHERE id = ?13",
                params![
                    interview.title,
                    interview.interview_type.as_str(),
                    interview.scheduled_at.timestamp(),
                    interview.duration_minutes,
                    interview.timezone,
                    interview.location,
                    interview.meeting_link,
                    interview.interviewer_name,
                    interview.interviewer_email,
                    interview.notes,
                    interview.status.as_str(),
                    interview.updated_at.timestamp(),
                    id.to_string(),
                ],
            )
            .map_err(InfraError::from)?;

        if changed == 0 {
            return Err(HireflowError::NotFound(format!("interview {id}")));
        }
        Ok(interview)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<()> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        let deleted = conn
            .execute("DELETE FROM scheduled_interviews WHERE id = ?1", params![id.to_string()])
            .map_err(InfraError::from)?;
        if deleted == 0 {
            return Err(HireflowError::NotFound(format!("interview {id}")));
        }
        Ok(())
    }

    #[instrument(skip(self), fields(from = from.as_str(), to = to.as_str()))]
    async fn transition_status(
        &self,
        id: Uuid,
        from: InterviewStatus,
        to: InterviewStatus,
    ) -> Result<ScheduledInterview> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        // The status guard in the WHERE clause is the concurrency check:
        // a racing writer leaves zero rows changed.
        let changed = conn
            .execute(
                "UPDATE scheduled_interviews SET status = ?1, updated_at = ?2
                 WHERE id = ?3 AND status = ?4",
                params![to.as_str(), Utc::now().timestamp(), id.to_string(), from.as_str()],
            )
            .map_err(InfraError::from)?;
        drop(conn);

        if changed == 0 {
            // Distinguish a missing record from a lost race.
            let current = self.fetch(id)?;
            return Err(HireflowError::Conflict(format!(
                "interview {id} is no longer {}, found {}",
                from.as_str(),
                current.status.as_str()
            )));
        }

        self.fetch(id)
    }

    #[instrument(skip(self))]
    async fn list_busy_between(&self, window: DateRange) -> Result<Vec<ScheduledInterview>> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {SELECT_COLUMNS} FROM scheduled_interviews
                 WHERE status IN ('pending', 'scheduled')
                   AND scheduled_at <= ?1
                   AND scheduled_at + duration_minutes * 60 >= ?2
                 ORDER BY scheduled_at"
            ))
            .map_err(InfraError::from)?;

        let rows = stmt
            .query_map(params![window.end.timestamp(), window.start.timestamp()], read_row)
            .map_err(InfraError::from)?;

        let mut interviews = Vec::new();
        for row in rows {
            interviews.push(row.map_err(InfraError::from)?.into_interview()?);
        }
        Ok(interviews)
    }

    #[instrument(skip(self))]
    async fn list_by_application(&self, application_id: Uuid) -> Result<Vec<ScheduledInterview>> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {SELECT_COLUMNS} FROM scheduled_interviews
                 WHERE application_id = ?1 ORDER BY scheduled_at"
            ))
            .map_err(InfraError::from)?;

        let rows = stmt
            .query_map(params![application_id.to_string()], read_row)
            .map_err(InfraError::from)?;

        let mut interviews = Vec::new();
        for row in rows {
            interviews.push(row.map_err(InfraError::from)?.into_interview()?);
        }
        Ok(interviews)
    }
}

/// Raw column values before uuid/enum/timestamp decoding.
struct InterviewRow {
    id: String,
    application_id: String,
    title: String,
    interview_type: String,
    scheduled_at: i64,
    duration_minutes: i64,
    timezone: String,
    location: Option<String>,
    meeting_link: Option<String>,
    interviewer_name: Option<String>,
    interviewer_email: Option<String>,
    notes: Option<String>,
    status: String,
    created_at: i64,
    updated_at: i64,
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<InterviewRow> {
    Ok(InterviewRow {
        id: row.get(0)?,
        application_id: row.get(1)?,
        title: row.get(2)?,
        interview_type: row.get(3)?,
        scheduled_at: row.get(4)?,
        duration_minutes: row.get(5)?,
        timezone: row.get(6)?,
        location: row.get(7)?,
        meeting_link: row.get(8)?,
        interviewer_name: row.get(9)?,
        interviewer_email: row.get(10)?,
        notes: row.get(11)?,
        status: row.get(12)?,
        created_at: row.get(13)?,
        updated_at: row.get(14)?,
    })
}

impl InterviewRow {
    fn into_interview(self) -> Result<ScheduledInterview> {
        Ok(ScheduledInterview {
            id: parse_uuid(&self.id)?,
            application_id: parse_uuid(&self.application_id)?,
            title: self.title,
            interview_type: InterviewType::from_str(&self.interview_type)
                .map_err(|e| HireflowError::Database(e.to_string()))?,
            scheduled_at: parse_timestamp(self.scheduled_at)?,
            duration_minutes: self.duration_minutes,
            timezone: self.timezone,
            location: self.location,
            meeting_link: self.meeting_link,
            interviewer_name: self.interviewer_name,
            interviewer_email: self.interviewer_email,
            notes: self.notes,
            status: InterviewStatus::from_str(&self.status)
                .map_err(|e| HireflowError::Database(e.to_string()))?,
            created_at: parse_timestamp(self.created_at)?,
            updated_at: parse_timestamp(self.updated_at)?,
        })
    }
}

fn parse_uuid(value: &str) -> Result<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| HireflowError::Database(format!("invalid uuid in database: {e}")))
}

fn parse_timestamp(secs: i64) -> Result<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .ok_or_else(|| HireflowError::Database(format!("timestamp out of range: {secs}")))
}
