//! # Hireflow Domain
//!
//! Business domain types and models for the Hireflow scheduling engine.
//!
//! This crate contains:
//! - Domain data types (CalendarEvent, ScheduledInterview, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Scheduling policy constants
//!
//! ## Architecture
//! - No dependencies on other Hireflow crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
