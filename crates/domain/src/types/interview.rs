//! Scheduled interview entity and its lifecycle states

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::HireflowError;

/// Interview format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewType {
    Phone,
    Video,
    Onsite,
    Technical,
    Behavioral,
    Panel,
    Other,
}

impl InterviewType {
    /// Stable string form used at the database boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Video => "video",
            Self::Onsite => "onsite",
            Self::Technical => "technical",
            Self::Behavioral => "behavioral",
            Self::Panel => "panel",
            Self::Other => "other",
        }
    }
}

impl std::str::FromStr for InterviewType {
    type Err = HireflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "phone" => Ok(Self::Phone),
            "video" => Ok(Self::Video),
            "onsite" => Ok(Self::Onsite),
            "technical" => Ok(Self::Technical),
            "behavioral" => Ok(Self::Behavioral),
            "panel" => Ok(Self::Panel),
            "other" => Ok(Self::Other),
            other => Err(HireflowError::InvalidInput(format!("unknown interview type: {other}"))),
        }
    }
}

/// Lifecycle state of a scheduled interview.
///
/// `Pending` and `Scheduled` are the only states that count as busy time
/// for availability computation; the rest are terminal bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    /// Created by the AI flow, awaiting human approval
    Pending,
    /// Approved, or created directly through manual scheduling
    Scheduled,
    Completed,
    Cancelled,
    Rescheduled,
    NoShow,
}

impl InterviewStatus {
    /// Stable string form used at the database boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Rescheduled => "rescheduled",
            Self::NoShow => "no_show",
        }
    }

    /// Whether an interview in this state blocks availability.
    pub fn counts_as_busy(&self) -> bool {
        matches!(self, Self::Pending | Self::Scheduled)
    }
}

impl std::str::FromStr for InterviewStatus {
    type Err = HireflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "scheduled" => Ok(Self::Scheduled),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            "rescheduled" => Ok(Self::Rescheduled),
            "no_show" => Ok(Self::NoShow),
            other => Err(HireflowError::InvalidInput(format!("unknown interview status: {other}"))),
        }
    }
}

/// The durable interview entity.
///
/// Invariant: `scheduled_at` is always stored in UTC. Display conversions
/// are derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledInterview {
    pub id: Uuid,
    pub application_id: Uuid,
    pub title: String,
    pub interview_type: InterviewType,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i64,
    /// IANA zone the interview was scheduled against, for display
    pub timezone: String,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    pub interviewer_name: Option<String>,
    pub interviewer_email: Option<String>,
    pub notes: Option<String>,
    pub status: InterviewStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ScheduledInterview {
    /// End instant derived from start and duration.
    pub fn end_at(&self) -> DateTime<Utc> {
        self.scheduled_at + chrono::Duration::minutes(self.duration_minutes)
    }
}

/// Fields required to create an interview record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInterview {
    pub application_id: Uuid,
    pub title: String,
    pub interview_type: InterviewType,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i64,
    pub timezone: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub meeting_link: Option<String>,
    #[serde(default)]
    pub interviewer_name: Option<String>,
    #[serde(default)]
    pub interviewer_email: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update for an interview record.
///
/// `status` here is the unguarded overwrite path used for terminal
/// states; the guarded approve/revert operations live on the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterviewUpdate {
    pub title: Option<String>,
    pub interview_type: Option<InterviewType>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i64>,
    pub timezone: Option<String>,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    pub interviewer_name: Option<String>,
    pub interviewer_email: Option<String>,
    pub notes: Option<String>,
    pub status: Option<InterviewStatus>,
}
