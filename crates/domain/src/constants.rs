//! Scheduling policy constants
//!
//! Centralized location for the fixed scheduling policy. These are product
//! decisions, not per-call configuration.

/// Interviews may only be proposed inside this local working window.
pub const WORKING_DAY_START_HOUR: u32 = 12;
pub const WORKING_DAY_END_HOUR: u32 = 18;

/// Mandatory idle time between a busy interval and an adjacent slot.
pub const SLOT_BUFFER_MINUTES: i64 = 15;

/// Two events whose starts differ by less than this are treated as the
/// same real-world meeting seen through different sources.
pub const DUPLICATE_START_TOLERANCE_MINUTES: i64 = 5;

/// Title prefix for synthetic busy events projected from interview records.
pub const SCHEDULED_TITLE_PREFIX: &str = "[Scheduled]";

/// Conversation entries echoed back to the model are capped at this count.
pub const CONVERSATION_HISTORY_LIMIT: usize = 10;

/// Date range assumed when a scheduling request does not carry one.
pub const DEFAULT_LOOKAHEAD_DAYS: i64 = 14;

/// Upper bound on wall-clock -> UTC fixed-point iterations.
pub const TZ_CONVERGENCE_ROUNDS: usize = 3;

/// Client-side timeout for the interactive model call.
pub const LLM_TIMEOUT_SECS: u64 = 30;

/// At most this many slots are requested from the model per turn.
pub const MAX_SUGGESTED_SLOTS: usize = 3;
