//! # Hireflow Infrastructure
//!
//! Infrastructure implementations of core scheduling ports.
//!
//! This crate contains:
//! - SQLite persistence for interviews and applications
//! - HTTP client with retry support
//! - External service integrations (calendar API, OpenAI)
//! - Configuration loading (environment and files)
//!
//! ## Architecture
//! - Implements traits defined in `hireflow-core`
//! - Depends on `hireflow-domain` and `hireflow-core`
//! - Contains all "impure" code (I/O, network, database)

pub mod config;
pub mod database;
pub mod errors;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use database::*;
pub use errors::*;
pub use http::*;
pub use integrations::*;
