//! Strict extraction of the model's JSON reply from an unconstrained
//! text channel.
//!
//! Models wrap JSON in prose and Markdown fences despite instructions.
//! The extractor takes the substring between the first `{` and the last
//! `}` and parses that; anything outside is discarded. Downstream code
//! never branches on parse errors: failure degrades to a typed fallback
//! with an empty slot list.

use hireflow_domain::constants::MAX_SUGGESTED_SLOTS;
use hireflow_domain::AssistantReply;
use tracing::debug;

const FALLBACK_MESSAGE: &str =
    "I couldn't put together concrete times for that. Could you rephrase your request?";

/// Parse raw model output into a typed reply, degrading on failure.
pub fn parse_assistant_reply(raw: &str) -> AssistantReply {
    if let Some(candidate) = extract_json_object(raw) {
        match serde_json::from_str::<AssistantReply>(candidate) {
            Ok(mut reply) => {
                // The prompt asks for at most three slots; enforce the cap
                // here rather than trusting the model to honor it.
                if reply.suggested_slots.len() > MAX_SUGGESTED_SLOTS {
                    debug!(
                        count = reply.suggested_slots.len(),
                        "model proposed too many slots, truncating"
                    );
                    reply.suggested_slots.truncate(MAX_SUGGESTED_SLOTS);
                }
                return reply;
            }
            Err(err) => {
                debug!(error = %err, "model reply JSON did not match the expected shape");
            }
        }
    }

    // No parseable object: treat the whole output as a prose message.
    let prose = raw.trim();
    AssistantReply {
        message: if prose.is_empty() { FALLBACK_MESSAGE.to_string() } else { prose.to_string() },
        suggested_slots: Vec::new(),
    }
}

/// The substring between the first `{` and the last `}`, if any.
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}
