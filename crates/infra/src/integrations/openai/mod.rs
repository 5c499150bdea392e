//! OpenAI chat-completions integration backing the language model port.

pub mod client;
pub mod types;

pub use client::OpenAiClient;
