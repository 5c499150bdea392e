//! Error types used throughout the scheduling engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Hireflow
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum HireflowError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    /// A calendar or store fetch failed. Non-fatal: availability is
    /// computed from whatever sources responded.
    #[error("Collaborator unavailable: {0}")]
    CollaboratorUnavailable(String),

    /// The language model returned output that could not be parsed. The
    /// assistant degrades to a fallback reply instead of surfacing this.
    #[error("Malformed model response: {0}")]
    LlmResponse(String),

    /// Slot confirmation could not resolve which application the
    /// interview belongs to. Fatal to that confirmation attempt.
    #[error("No matching application: {0}")]
    NoMatchingApplication(String),

    /// A guarded lifecycle operation was called from the wrong state.
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// A write raced with a concurrent update. The caller must re-fetch
    /// and retry manually; writes are never retried automatically.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Hireflow operations
pub type Result<T> = std::result::Result<T, HireflowError>;
