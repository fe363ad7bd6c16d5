//! Chat message model
//!
//! Messages are append-only: once created they are never edited or removed
//! for the lifetime of the page session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    User,
    Ai,
}

impl MessageKind {
    /// Label shown above the message body
    pub fn author_label(&self) -> &'static str {
        match self {
            MessageKind::User => "You",
            MessageKind::Ai => "Idea0",
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, MessageKind::User)
    }
}

/// A single chat message
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Stable key for list rendering
    pub id: Uuid,
    pub kind: MessageKind,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageKind::User, content)
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self::new(MessageKind::Ai, content)
    }

    fn new(kind: MessageKind, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(ChatMessage::user("hi").kind, MessageKind::User);
        assert_eq!(ChatMessage::ai("hello").kind, MessageKind::Ai);
    }

    #[test]
    fn test_content_is_kept_literally() {
        let message = ChatMessage::user("  spaced\ninput  ");
        assert_eq!(message.content, "  spaced\ninput  ");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = ChatMessage::user("same");
        let b = ChatMessage::user("same");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_author_labels() {
        assert_eq!(MessageKind::User.author_label(), "You");
        assert_eq!(MessageKind::Ai.author_label(), "Idea0");
        assert!(MessageKind::User.is_user());
        assert!(!MessageKind::Ai.is_user());
    }

    #[test]
    fn test_timestamp_is_creation_time() {
        let before = Utc::now();
        let message = ChatMessage::ai("done");
        assert!(message.timestamp >= before);
        assert!(message.timestamp <= Utc::now());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&MessageKind::Ai).unwrap();
        assert_eq!(json, "\"ai\"");
    }
}
