//! Conversation history shaping for prompt assembly

use hireflow_domain::constants::CONVERSATION_HISTORY_LIMIT;
use hireflow_domain::ConversationSession;

use super::ports::ChatTurn;

/// Project the session log into the turns re-sent to the model.
///
/// Only the trailing entries are kept, and entries that themselves
/// carried suggested slots are excluded so earlier slot lists don't
/// recursively bloat the prompt.
pub fn history_turns(session: &ConversationSession) -> Vec<ChatTurn> {
    let skip = session.messages.len().saturating_sub(CONVERSATION_HISTORY_LIMIT);
    session
        .messages
        .iter()
        .skip(skip)
        .filter(|message| message.suggested_slots.is_none())
        .map(|message| ChatTurn { role: message.role, content: message.content.clone() })
        .collect()
}

#[cfg(test)]
mod tests {
    use hireflow_domain::{MessageRole, SuggestedSlot};

    use super::*;

    fn slot() -> SuggestedSlot {
        SuggestedSlot {
            date: "2025-06-02".into(),
            start_time: "12:00".into(),
            end_time: "12:30".into(),
            datetime_local: "2025-06-02T12:00".into(),
            reason: String::new(),
            application_id: None,
            company_name: None,
            interview_id: None,
        }
    }

    #[test]
    fn keeps_only_trailing_entries() {
        let mut session = ConversationSession::new();
        for i in 0..15 {
            session.push_user(format!("message {i}"));
        }

        let turns = history_turns(&session);
        assert_eq!(turns.len(), CONVERSATION_HISTORY_LIMIT);
        assert_eq!(turns[0].content, "message 5");
        assert_eq!(turns.last().expect("non-empty").content, "message 14");
    }

    #[test]
    fn excludes_entries_that_carried_slots() {
        let mut session = ConversationSession::new();
        session.push_user("any time next week?");
        session.push_assistant("how about Monday noon?", vec![slot()]);
        session.push_user("something later please");
        session.push_assistant("noted, recomputing", Vec::new());

        let turns = history_turns(&session);
        let contents: Vec<&str> = turns.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["any time next week?", "something later please", "noted, recomputing"]);
        assert_eq!(turns[2].role, MessageRole::Assistant);
    }

    #[test]
    fn empty_session_yields_no_turns() {
        assert!(history_turns(&ConversationSession::new()).is_empty());
    }
}
