//! Conversational scheduling assistant: prompt assembly, model output
//! parsing, slot confirmation.

pub mod parser;
pub mod ports;
pub mod prompt;
pub mod session;
pub mod service;

pub use service::SchedulingAssistant;
