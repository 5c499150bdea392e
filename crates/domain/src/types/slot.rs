//! Computed and model-proposed time slots

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A candidate free window of exactly the requested duration.
///
/// Computed value, never persisted; regenerated per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableSlot {
    pub date: NaiveDate,
    /// Weekday name for display ("Monday", ...)
    pub day_name: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub duration_minutes: i64,
}

/// A slot proposed by the language model, with a human-readable
/// justification. Transient; held only in the in-memory conversation.
///
/// Field names follow the camelCase JSON contract spoken by the model.
/// Date and time fields stay string-typed at this boundary and are
/// validated at confirmation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedSlot {
    /// Calendar date, "YYYY-MM-DD"
    pub date: String,
    /// Wall-clock start, "HH:MM"
    pub start_time: String,
    /// Wall-clock end, "HH:MM"
    pub end_time: String,
    /// Combined local datetime, "YYYY-MM-DDTHH:MM"
    pub datetime_local: String,
    /// Why the model picked this slot
    #[serde(default)]
    pub reason: String,
    /// Application the interview belongs to, when the model knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Uuid>,
    /// Company name for fuzzy application matching
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Present when confirming reschedules an existing interview
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_id: Option<Uuid>,
}

/// Typed reply from the language model adapter.
///
/// Always well-formed: when the raw model output cannot be parsed the
/// adapter substitutes a fallback message and an empty slot list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantReply {
    pub message: String,
    #[serde(default)]
    pub suggested_slots: Vec<SuggestedSlot>,
}
