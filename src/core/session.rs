//! Chat session state container
//!
//! [`ChatSession`] owns everything the chat page knows about the current
//! conversation and exposes it only through explicit transitions:
//!
//! - `submit` appends the user message and starts a generation cycle
//! - `complete` lands the result of the latest cycle
//! - `toggle_side_panel` / `close_side_panel` drive the panel
//!
//! Each submission mints a fresh [`GenerationId`]. Submitting again while a
//! cycle is pending supersedes it, and `complete` rejects any result that does
//! not belong to the pending cycle.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::core::generator::GeneratedIdea;
use crate::core::message::ChatMessage;

/// Text of the assistant reply appended when a cycle completes
pub const AI_SUMMARY_MESSAGE: &str = "I've generated an idea based on your input. This concept has potential for multiple revenue streams and could reach profitability with proper execution. Check the full details in the side panel.";

/// Sequence number of a generation cycle within a session
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display("#{_0}")]
pub struct GenerationId(u64);

impl GenerationId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// A generation cycle that has been started but not completed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingGeneration {
    pub id: GenerationId,
    /// Literal input captured at submission time
    pub prompt: String,
}

/// Coarse view of where the session is
#[cfg(test)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Nothing submitted yet
    Landing,
    /// In chat mode with no generation pending
    Idle,
    /// In chat mode waiting for a generation
    Generating(GenerationId),
}

/// Session transition errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Generation {received} is stale (pending: {})", describe_pending(.expected))]
    StaleGeneration {
        expected: Option<GenerationId>,
        received: GenerationId,
    },
}

fn describe_pending(expected: &Option<GenerationId>) -> String {
    match expected {
        Some(id) => id.to_string(),
        None => "none".to_string(),
    }
}

/// In-memory state of one page session
#[derive(Clone, Debug, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    input: String,
    is_panel_open: bool,
    is_chat_mode: bool,
    generated: Option<GeneratedIdea>,
    pending: Option<PendingGeneration>,
    last_generation: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_panel_open(&self) -> bool {
        self.is_panel_open
    }

    pub fn is_chat_mode(&self) -> bool {
        self.is_chat_mode
    }

    /// Text of the latest completed idea
    pub fn generated_content(&self) -> Option<&str> {
        self.generated.as_ref().map(|idea| idea.content.as_str())
    }

    pub fn generated_idea(&self) -> Option<&GeneratedIdea> {
        self.generated.as_ref()
    }

    #[cfg(test)]
    pub fn phase(&self) -> SessionPhase {
        match (&self.pending, self.is_chat_mode) {
            (Some(pending), _) => SessionPhase::Generating(pending.id),
            (None, true) => SessionPhase::Idle,
            (None, false) => SessionPhase::Landing,
        }
    }

    /// Start a generation cycle for `text`.
    ///
    /// Whitespace-only input is rejected without touching any state. A cycle
    /// that is still pending is superseded by the new one.
    pub fn submit(&mut self, text: &str) -> Result<PendingGeneration, SessionError> {
        if text.trim().is_empty() {
            return Err(SessionError::EmptyInput);
        }

        self.messages.push(ChatMessage::user(text));
        self.is_chat_mode = true;

        self.last_generation += 1;
        let pending = PendingGeneration {
            id: GenerationId(self.last_generation),
            prompt: text.to_string(),
        };
        self.pending = Some(pending.clone());

        Ok(pending)
    }

    /// Submit whatever is currently in the input field
    pub fn submit_input(&mut self) -> Result<PendingGeneration, SessionError> {
        let text = self.input.clone();
        self.submit(&text)
    }

    /// Land the result of generation `id`.
    ///
    /// Replaces the generated content, appends the assistant reply, clears the
    /// input and opens the side panel.
    pub fn complete(
        &mut self,
        id: GenerationId,
        idea: GeneratedIdea,
    ) -> Result<ChatMessage, SessionError> {
        match &self.pending {
            Some(pending) if pending.id == id => {}
            other => {
                return Err(SessionError::StaleGeneration {
                    expected: other.as_ref().map(|p| p.id),
                    received: id,
                });
            }
        }

        self.pending = None;
        self.generated = Some(idea);
        let reply = ChatMessage::ai(AI_SUMMARY_MESSAGE);
        self.messages.push(reply.clone());
        self.is_panel_open = true;
        self.input.clear();

        Ok(reply)
    }

    /// Flip the side panel and return the new state
    pub fn toggle_side_panel(&mut self) -> bool {
        self.is_panel_open = !self.is_panel_open;
        self.is_panel_open
    }

    pub fn close_side_panel(&mut self) {
        self.is_panel_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generator::FALLBACK_CONCEPT;
    use crate::core::message::MessageKind;

    fn idea(prompt: &str) -> GeneratedIdea {
        GeneratedIdea::from_template(prompt, 3, 12)
    }

    #[test]
    fn test_new_session_is_landing() {
        let session = ChatSession::new();
        assert_eq!(session.phase(), SessionPhase::Landing);
        assert!(session.messages().is_empty());
        assert!(!session.is_loading());
        assert!(!session.is_panel_open());
        assert!(session.generated_content().is_none());
    }

    #[test]
    fn test_submit_appends_user_message_and_enters_chat_mode() {
        let mut session = ChatSession::new();
        let pending = session.submit("App for dog walkers").unwrap();

        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].kind, MessageKind::User);
        assert_eq!(session.messages()[0].content, "App for dog walkers");
        assert!(session.is_chat_mode());
        assert!(session.is_loading());
        assert_eq!(session.phase(), SessionPhase::Generating(pending.id));
        assert_eq!(pending.prompt, "App for dog walkers");
    }

    #[test]
    fn test_blank_submission_changes_nothing() {
        let mut session = ChatSession::new();
        session.set_input("   ");

        for text in ["", "   ", "\n\t "] {
            assert_eq!(session.submit(text), Err(SessionError::EmptyInput));
        }
        assert_eq!(session.submit_input(), Err(SessionError::EmptyInput));

        assert!(session.messages().is_empty());
        assert!(!session.is_chat_mode());
        assert!(!session.is_loading());
        assert_eq!(session.input(), "   ");
    }

    #[test]
    fn test_submission_keeps_literal_whitespace() {
        let mut session = ChatSession::new();
        session.submit("  padded idea  ").unwrap();
        assert_eq!(session.messages()[0].content, "  padded idea  ");
    }

    #[test]
    fn test_complete_lands_idea() {
        let mut session = ChatSession::new();
        session.set_input("App for dog walkers");
        let pending = session.submit_input().unwrap();

        let reply = session.complete(pending.id, idea(&pending.prompt)).unwrap();

        assert_eq!(reply.kind, MessageKind::Ai);
        assert_eq!(reply.content, AI_SUMMARY_MESSAGE);
        assert_eq!(session.messages().len(), 2);
        assert!(!session.is_loading());
        assert!(session.is_panel_open());
        assert_eq!(session.input(), "");
        assert!(session.generated_content().unwrap().contains(FALLBACK_CONCEPT));
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_generated_content_is_overwritten() {
        let mut session = ChatSession::new();

        let first = session.submit("first prompt").unwrap();
        session.complete(first.id, GeneratedIdea::from_template("first prompt", 1, 6)).unwrap();
        let second = session.submit("second prompt").unwrap();
        session.complete(second.id, GeneratedIdea::from_template("second prompt", 5, 29)).unwrap();

        let content = session.generated_content().unwrap();
        assert!(content.contains("second prompt"));
        assert!(!content.contains("first prompt"));
        assert_eq!(session.messages().len(), 4);
    }

    #[test]
    fn test_newer_submission_supersedes_pending() {
        let mut session = ChatSession::new();
        let first = session.submit("first").unwrap();
        let second = session.submit("second").unwrap();
        assert!(second.id > first.id);

        let err = session.complete(first.id, idea("first")).unwrap_err();
        assert_eq!(
            err,
            SessionError::StaleGeneration {
                expected: Some(second.id),
                received: first.id,
            }
        );
        // Stale result leaves everything untouched
        assert!(session.is_loading());
        assert!(!session.is_panel_open());
        assert_eq!(session.messages().len(), 2);
        assert!(session.generated_content().is_none());

        session.complete(second.id, idea("second")).unwrap();
        assert_eq!(session.messages().len(), 3);
        assert!(session.generated_content().unwrap().contains("second"));
    }

    #[test]
    fn test_double_completion_is_rejected() {
        let mut session = ChatSession::new();
        let pending = session.submit("once").unwrap();
        session.complete(pending.id, idea("once")).unwrap();

        let err = session.complete(pending.id, idea("once")).unwrap_err();
        assert_eq!(
            err,
            SessionError::StaleGeneration {
                expected: None,
                received: pending.id,
            }
        );
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_chat_mode_never_reverts() {
        let mut session = ChatSession::new();
        let pending = session.submit("go").unwrap();
        session.complete(pending.id, idea("go")).unwrap();
        session.toggle_side_panel();
        let _ = session.submit("  ");
        assert!(session.is_chat_mode());
    }

    #[test]
    fn test_toggle_side_panel_leaves_messages_alone() {
        let mut session = ChatSession::new();
        session.submit("hello").unwrap();

        assert!(session.toggle_side_panel());
        assert!(!session.toggle_side_panel());
        assert_eq!(session.messages().len(), 1);
        assert!(session.is_loading());
    }

    #[test]
    fn test_close_side_panel() {
        let mut session = ChatSession::new();
        let pending = session.submit("hello").unwrap();
        session.complete(pending.id, idea("hello")).unwrap();

        session.close_side_panel();
        assert!(!session.is_panel_open());
        session.close_side_panel();
        assert!(!session.is_panel_open());
    }

    #[test]
    fn test_generation_ids_are_sequential() {
        let mut session = ChatSession::new();
        let ids: Vec<u64> = (0..3)
            .map(|i| session.submit(&format!("prompt {i}")).unwrap().id.value())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_error_display() {
        let err = SessionError::StaleGeneration {
            expected: Some(GenerationId(4)),
            received: GenerationId(3),
        };
        assert_eq!(err.to_string(), "Generation #3 is stale (pending: #4)");

        let err = SessionError::StaleGeneration {
            expected: None,
            received: GenerationId(1),
        };
        assert_eq!(err.to_string(), "Generation #1 is stale (pending: none)");
    }
}
