//! Chat transcript models

use crate::util::now_millis;
use serde::{Deserialize, Serialize};

/// Message author
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// A grounding citation returned alongside a web-search-backed answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceLink {
    pub title: String,
    pub uri: String,
}

/// One transcript turn
///
/// Ids are assigned by the owning session and increase monotonically for
/// the lifetime of the transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    /// Citations for assistant turns; empty for user turns and for
    /// ungrounded generations. Uris are unique within the list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceLink>,
    /// Creation timestamp (UTC milliseconds)
    pub timestamp_ms: i64,
}

impl ChatMessage {
    /// Create a user turn
    pub fn user(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            sender: Sender::User,
            text: text.into(),
            sources: Vec::new(),
            timestamp_ms: now_millis(),
        }
    }

    /// Create an assistant turn
    pub fn assistant(id: u64, text: impl Into<String>, sources: Vec<SourceLink>) -> Self {
        Self {
            id,
            sender: Sender::Assistant,
            text: text.into(),
            sources,
            timestamp_ms: now_millis(),
        }
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_serializes_lowercase() {
        let msg = ChatMessage::user(1, "hello");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["sender"], "user");
        // empty sources are omitted from the wire form
        assert!(json.get("sources").is_none());
    }

    #[test]
    fn assistant_message_keeps_source_order() {
        let sources = vec![
            SourceLink {
                title: "a".into(),
                uri: "https://a".into(),
            },
            SourceLink {
                title: "b".into(),
                uri: "https://b".into(),
            },
        ];
        let msg = ChatMessage::assistant(2, "answer", sources.clone());
        assert_eq!(msg.sources, sources);
        assert!(!msg.is_from_user());
    }
}
