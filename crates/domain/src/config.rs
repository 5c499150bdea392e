//! Configuration structures for the scheduling engine

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub calendar: CalendarConfig,
    pub assistant: AssistantConfig,
}

/// Database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    pub path: String,
    /// Connection pool size
    pub pool_size: u32,
}

/// External calendar collaborator settings. Authentication happens
/// out-of-band; the engine only carries the resulting access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Calendar to query for busy intervals (e.g. "primary")
    pub calendar_id: String,
    /// Bearer token for the calendar API
    pub access_token: String,
}

/// Language model collaborator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// API key for the model provider
    pub api_key: String,
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// IANA timezone used when a request does not specify one
    #[serde(default = "default_timezone")]
    pub default_timezone: String,
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_timezone() -> String {
    "America/New_York".to_string()
}
