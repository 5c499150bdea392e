//! Port interface for the language model collaborator

use async_trait::async_trait;
use hireflow_domain::{MessageRole, Result};

/// One turn of conversation as sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: MessageRole,
    pub content: String,
}

/// Trait for the generative model behind slot proposals.
///
/// A single blocking round-trip, time-bounded on the adapter side. A
/// timed-out call surfaces as an error ("try again"), never an automatic
/// retry: generative calls are not idempotent.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Generate raw text for the prompt and conversation turns.
    async fn generate(&self, system_prompt: &str, turns: &[ChatTurn]) -> Result<String>;
}
