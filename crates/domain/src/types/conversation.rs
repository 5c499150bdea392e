//! Conversation state for the scheduling assistant

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::slot::{AvailableSlot, SuggestedSlot};

/// Author of a conversation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One entry in the append-only conversation log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantMessage {
    pub role: MessageRole,
    pub content: String,
    /// Slots that accompanied an assistant reply, if any. Entries carrying
    /// slots are excluded from the history echoed back to the model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_slots: Option<Vec<SuggestedSlot>>,
    pub timestamp: DateTime<Utc>,
}

/// Explicit conversation state owned by the calling session.
///
/// Modeled as a value passed by handle rather than ambient state so the
/// assistant stays a pure request/response service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationSession {
    pub id: Uuid,
    pub messages: Vec<AssistantMessage>,
    /// Availability computed on the most recent turn, kept for display.
    #[serde(default)]
    pub last_availability: Vec<AvailableSlot>,
}

impl ConversationSession {
    pub fn new() -> Self {
        Self { id: Uuid::new_v4(), messages: Vec::new(), last_availability: Vec::new() }
    }

    /// Append a user message to the log.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(AssistantMessage {
            role: MessageRole::User,
            content: content.into(),
            suggested_slots: None,
            timestamp: Utc::now(),
        });
    }

    /// Append an assistant reply, recording any proposed slots with it.
    pub fn push_assistant(&mut self, content: impl Into<String>, slots: Vec<SuggestedSlot>) {
        let suggested_slots = if slots.is_empty() { None } else { Some(slots) };
        self.messages.push(AssistantMessage {
            role: MessageRole::Assistant,
            content: content.into(),
            suggested_slots,
            timestamp: Utc::now(),
        });
    }
}
