//! Chat session state machine
//!
//! Owns the append-only transcript and the single in-flight request slot.
//! At most one request is awaiting a response at a time; results are
//! applied through a request-id check so a stale resolution can never be
//! double-applied if the concurrency guard is ever relaxed.

use crate::api::{StylistApi, StylistReply, StylistRequest};
use serde::{Deserialize, Serialize};
use shared::ChatMessage;
use tracing::{debug, error, warn};
use uuid::Uuid;

/// Fixed assistant greeting inserted on first open
pub const WELCOME_TEXT: &str = "Welcome to VAILURE. How can I assist with your style today?";

/// Fixed assistant message shown when the remote call fails
pub const FALLBACK_TEXT: &str = "Sorry, I couldn't process that. Please try again.";

/// Session request slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
enum SessionPhase {
    Idle,
    AwaitingResponse { request_id: Uuid },
}

/// A dispatched submission, to be settled with `resolve` or `fail`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub request_id: Uuid,
    pub prompt: String,
    pub thinking_mode: bool,
}

impl PendingRequest {
    /// The wire request for this submission
    pub fn request(&self) -> StylistRequest {
        StylistRequest {
            prompt: self.prompt.clone(),
            thinking_mode: self.thinking_mode,
        }
    }
}

/// Chat widget session state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
    next_message_id: u64,
    phase: SessionPhase,
    thinking_mode: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            transcript: Vec::new(),
            next_message_id: 1,
            phase: SessionPhase::Idle,
            thinking_mode: false,
        }
    }

    /// Transcript in creation order
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn is_awaiting(&self) -> bool {
        matches!(self.phase, SessionPhase::AwaitingResponse { .. })
    }

    pub fn thinking_mode(&self) -> bool {
        self.thinking_mode
    }

    pub fn set_thinking_mode(&mut self, on: bool) {
        self.thinking_mode = on;
    }

    /// Widget opened. Inserts the fixed welcome message when the
    /// transcript is still empty; reopening never duplicates it.
    pub fn open(&mut self) {
        if self.transcript.is_empty() {
            let id = self.next_id();
            self.transcript
                .push(ChatMessage::assistant(id, WELCOME_TEXT, Vec::new()));
        }
    }

    /// Session reset: drop the transcript. Ids keep counting so any still
    /// in-flight settlement stays distinguishable from new turns.
    pub fn reset(&mut self) {
        self.transcript.clear();
    }

    /// Submit user input. Returns the request to dispatch, or `None` (no
    /// transition, no side effect) when the trimmed input is empty or a
    /// request is already awaiting a response.
    pub fn submit(&mut self, input: &str) -> Option<PendingRequest> {
        let text = input.trim();
        if text.is_empty() || self.is_awaiting() {
            return None;
        }

        let id = self.next_id();
        self.transcript.push(ChatMessage::user(id, text));

        let request_id = Uuid::new_v4();
        self.phase = SessionPhase::AwaitingResponse { request_id };
        debug!(%request_id, thinking_mode = self.thinking_mode, "stylist request dispatched");

        Some(PendingRequest {
            request_id,
            prompt: text.to_string(),
            thinking_mode: self.thinking_mode,
        })
    }

    /// Apply a successful response. Stale request ids are dropped.
    pub fn resolve(&mut self, request_id: Uuid, reply: StylistReply) -> bool {
        if !self.settle(request_id) {
            return false;
        }
        let id = self.next_id();
        self.transcript
            .push(ChatMessage::assistant(id, reply.text, reply.sources));
        true
    }

    /// Apply a failed request: the transcript gains the fixed fallback
    /// message, never the underlying error. Stale request ids are dropped.
    pub fn fail(&mut self, request_id: Uuid) -> bool {
        if !self.settle(request_id) {
            return false;
        }
        let id = self.next_id();
        self.transcript
            .push(ChatMessage::assistant(id, FALLBACK_TEXT, Vec::new()));
        true
    }

    /// Drive one full turn: submit, call the collaborator, settle.
    /// Returns `false` when the submission was rejected. Remote failures
    /// are logged and converted to the fallback message.
    pub async fn send<A: StylistApi + ?Sized>(&mut self, api: &A, input: &str) -> bool {
        let Some(pending) = self.submit(input) else {
            return false;
        };

        match api.generate(&pending.request()).await {
            Ok(reply) => {
                self.resolve(pending.request_id, reply);
            }
            Err(err) => {
                error!(error = %err, "stylist request failed");
                self.fail(pending.request_id);
            }
        }
        true
    }

    /// Clear the awaiting slot if `request_id` is the active request
    fn settle(&mut self, request_id: Uuid) -> bool {
        match self.phase {
            SessionPhase::AwaitingResponse { request_id: active } if active == request_id => {
                self.phase = SessionPhase::Idle;
                true
            }
            _ => {
                warn!(%request_id, "dropping settlement for stale stylist request");
                false
            }
        }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_message_id;
        self.next_message_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Sender;

    #[test]
    fn open_inserts_welcome_once() {
        let mut session = ChatSession::new();
        session.open();
        session.open();

        assert_eq!(session.transcript().len(), 1);
        let welcome = &session.transcript()[0];
        assert_eq!(welcome.sender, Sender::Assistant);
        assert_eq!(welcome.text, WELCOME_TEXT);
    }

    #[test]
    fn blank_submissions_are_rejected_without_side_effects() {
        let mut session = ChatSession::new();
        assert!(session.submit("").is_none());
        assert!(session.submit("   \t ").is_none());
        assert!(session.transcript().is_empty());
        assert!(!session.is_awaiting());
    }

    #[test]
    fn second_submission_while_awaiting_is_rejected() {
        let mut session = ChatSession::new();
        let first = session.submit("hello").unwrap();
        assert!(session.is_awaiting());

        assert!(session.submit("hello again").is_none());
        // no new user message, no second request
        assert_eq!(session.transcript().len(), 1);

        assert!(session.resolve(first.request_id, StylistReply::text_only("hi")));
        assert!(!session.is_awaiting());
    }

    #[test]
    fn submission_is_trimmed_and_carries_thinking_mode() {
        let mut session = ChatSession::new();
        session.set_thinking_mode(true);
        let pending = session.submit("  what goes with boots?  ").unwrap();

        assert_eq!(pending.prompt, "what goes with boots?");
        assert!(pending.thinking_mode);
        assert_eq!(session.transcript()[0].text, "what goes with boots?");
        assert_eq!(pending.request().prompt, pending.prompt);
    }

    #[test]
    fn failure_appends_exactly_one_fallback_message() {
        let mut session = ChatSession::new();
        let pending = session.submit("hello").unwrap();
        assert!(session.fail(pending.request_id));

        let assistant_turns: Vec<_> = session
            .transcript()
            .iter()
            .filter(|m| m.sender == Sender::Assistant)
            .collect();
        assert_eq!(assistant_turns.len(), 1);
        assert_eq!(assistant_turns[0].text, FALLBACK_TEXT);
        assert!(assistant_turns[0].sources.is_empty());
        assert!(!session.is_awaiting());
    }

    #[test]
    fn stale_settlements_are_dropped() {
        let mut session = ChatSession::new();
        let first = session.submit("first").unwrap();
        session.fail(first.request_id);

        let second = session.submit("second").unwrap();

        // the first request settles late: must not touch the transcript
        let len = session.transcript().len();
        assert!(!session.resolve(first.request_id, StylistReply::text_only("late")));
        assert!(!session.fail(first.request_id));
        assert_eq!(session.transcript().len(), len);
        assert!(session.is_awaiting());

        assert!(session.resolve(second.request_id, StylistReply::text_only("on time")));
    }

    #[test]
    fn message_ids_are_monotonic_across_reset() {
        let mut session = ChatSession::new();
        session.open();
        let pending = session.submit("hello").unwrap();
        session.resolve(pending.request_id, StylistReply::text_only("hi"));

        let max_before = session.transcript().iter().map(|m| m.id).max().unwrap();
        session.reset();
        session.open();
        assert!(session.transcript()[0].id > max_before);
    }

    #[test]
    fn transcript_is_append_only_in_creation_order() {
        let mut session = ChatSession::new();
        session.open();
        let p = session.submit("q1").unwrap();
        session.resolve(p.request_id, StylistReply::text_only("a1"));
        let p = session.submit("q2").unwrap();
        session.fail(p.request_id);

        let ids: Vec<u64> = session.transcript().iter().map(|m| m.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert_eq!(ids.len(), 5);
    }
}
