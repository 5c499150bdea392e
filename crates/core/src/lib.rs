//! # Hireflow Core
//!
//! Pure business logic layer for the interview scheduling engine - no
//! infrastructure dependencies.
//!
//! This crate contains:
//! - Availability computation, event reconciliation, timezone conversion
//! - Port/adapter interfaces (traits) for calendars, storage, and the model
//! - The scheduling assistant and interview lifecycle services
//!
//! ## Architecture Principles
//! - Only depends on `hireflow-domain`
//! - No database, HTTP, or provider code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod assistant;
pub mod interviews;
pub mod scheduling;

// Re-export specific items to avoid ambiguity
pub use assistant::parser::parse_assistant_reply;
pub use assistant::ports::{ChatTurn, LanguageModel};
pub use assistant::SchedulingAssistant;
pub use interviews::busy::InterviewBusySource;
pub use interviews::ports::{ApplicationDirectory, InterviewRepository};
pub use interviews::InterviewService;
pub use scheduling::availability::find_slots;
pub use scheduling::ports::BusyEventSource;
pub use scheduling::reconcile::dedup_events;
pub use scheduling::timezone::{local_to_utc, utc_to_local};
pub use scheduling::AvailabilityService;
