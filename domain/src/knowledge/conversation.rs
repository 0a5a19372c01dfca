//! Conversation capture for knowledge-base storage

use crate::core::string::char_prefix;
use crate::session::entities::ChatMessage;

const MAX_TITLE_CHARS: usize = 50;

/// A user/assistant exchange rendered as storable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationRecord {
    pub title: String,
    pub content: String,
}

impl ConversationRecord {
    /// Compose the record for `user_input` and the agent's reply, if any.
    ///
    /// Later blocks of the same kind overwrite earlier ones, so the last
    /// reasoning text and the last response text win.
    pub fn compose(user_input: &str, response: Option<&ChatMessage>) -> Self {
        let content = match response {
            None => format!("User: {}", user_input),
            Some(message) => Self::compose_reply(user_input, message),
        };

        Self {
            title: Self::title_for(user_input),
            content,
        }
    }

    fn compose_reply(user_input: &str, message: &ChatMessage) -> String {
        let mut reasoning = None;
        let mut text = None;
        for block in &message.content {
            if let Some(r) = block.reasoning_text() {
                reasoning = Some(r);
            } else if let Some(t) = block.text.as_deref() {
                text = Some(t);
            }
        }

        // Empty strings count as absent, but still overwrite earlier blocks
        let reasoning = reasoning.filter(|r| !r.is_empty());
        let text = text.filter(|t| !t.is_empty());

        match (reasoning, text) {
            (Some(r), Some(t)) => format!(
                "User: {}\n\nAssistant Reasoning: {}\n\nAssistant Response: {}",
                user_input, r, t
            ),
            (_, Some(t)) => format!("User: {}\n\nAssistant: {}", user_input, t),
            _ if message.content.is_empty() => format!("User: {}\n\nAssistant: ", user_input),
            _ => {
                let raw = serde_json::to_string(message).unwrap_or_default();
                format!("User: {}\n\nAssistant: {}", user_input, raw)
            }
        }
    }

    fn title_for(user_input: &str) -> String {
        let (prefix, truncated) = char_prefix(user_input, MAX_TITLE_CHARS);
        if truncated {
            format!("Conversation: {}...", prefix)
        } else {
            format!("Conversation: {}", prefix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::entities::ContentBlock;

    #[test]
    fn test_without_response() {
        let record = ConversationRecord::compose("hi", None);
        assert_eq!(record.content, "User: hi");
        assert_eq!(record.title, "Conversation: hi");
    }

    #[test]
    fn test_reasoning_and_text() {
        let reply = ChatMessage::assistant(vec![
            ContentBlock::reasoning("think"),
            ContentBlock::text("answer"),
        ]);
        let record = ConversationRecord::compose("q", Some(&reply));
        assert_eq!(
            record.content,
            "User: q\n\nAssistant Reasoning: think\n\nAssistant Response: answer"
        );
    }

    #[test]
    fn test_text_only_last_block_wins() {
        let reply = ChatMessage::assistant(vec![
            ContentBlock::text("first"),
            ContentBlock::text("second"),
        ]);
        let record = ConversationRecord::compose("q", Some(&reply));
        assert_eq!(record.content, "User: q\n\nAssistant: second");
    }

    #[test]
    fn test_empty_reply() {
        let reply = ChatMessage::assistant(Vec::new());
        let record = ConversationRecord::compose("q", Some(&reply));
        assert_eq!(record.content, "User: q\n\nAssistant: ");
    }

    #[test]
    fn test_tool_only_reply_falls_back_to_raw_message() {
        let reply = ChatMessage::assistant(vec![ContentBlock::tool_use("t1", "shell")]);
        let record = ConversationRecord::compose("q", Some(&reply));
        assert!(record.content.starts_with("User: q\n\nAssistant: {"));
        assert!(record.content.contains("\"toolUse\""));
    }

    #[test]
    fn test_empty_text_falls_back_to_raw_message() {
        let reply = ChatMessage::assistant(vec![ContentBlock::text("")]);
        let record = ConversationRecord::compose("q", Some(&reply));
        assert!(record.content.starts_with("User: q\n\nAssistant: {"));
        assert!(record.content.contains("\"text\":\"\""));
    }

    #[test]
    fn test_empty_reasoning_is_ignored() {
        let reply = ChatMessage::assistant(vec![
            ContentBlock::reasoning(""),
            ContentBlock::text("answer"),
        ]);
        let record = ConversationRecord::compose("q", Some(&reply));
        assert_eq!(record.content, "User: q\n\nAssistant: answer");
    }

    #[test]
    fn test_long_title_is_truncated() {
        let input = "x".repeat(60);
        let record = ConversationRecord::compose(&input, None);
        assert_eq!(record.title, format!("Conversation: {}...", "x".repeat(50)));

        let exact = "y".repeat(50);
        let record = ConversationRecord::compose(&exact, None);
        assert_eq!(record.title, format!("Conversation: {}", exact));
    }
}
