//! Conversation session.
//!
//! A [`Session`] owns the ordered, append-only message list for one chat
//! screen, the pending input buffer, and the typing flag. Submitting text
//! hands back a [`PendingReply`] ticket; whoever drives the session (the UI
//! event loop, usually via [`ReplyScheduler`](crate::ReplyScheduler)) must
//! later hand that ticket to [`Session::resolve`] to append the reply.

use crate::message::{Message, MessageId, Origin, SeedMessage};
use chrono::Local;
use tracing::{debug, info};
use uuid::Uuid;

/// In-memory conversation state for one chat screen.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    messages: Vec<Message>,
    next_id: u64,
    input: String,
    pending: usize,
}

/// A reply owed to a session for one user submission.
///
/// Not `Clone`: each ticket resolves exactly once.
#[derive(Debug)]
pub struct PendingReply {
    session_id: Uuid,
    reply_to: MessageId,
    transcript: Vec<Message>,
}

impl PendingReply {
    /// Session that issued the ticket.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// The user message this reply answers.
    pub fn reply_to(&self) -> MessageId {
        self.reply_to
    }

    /// Transcript as of the submission, including the user message.
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        let id = Uuid::new_v4();
        info!(session = %id, "session created");
        Self {
            id,
            messages: Vec::new(),
            next_id: 1,
            input: String::new(),
            pending: 0,
        }
    }

    /// Create a session pre-populated with seed messages, numbered from 1.
    pub fn with_history(seed: &[SeedMessage]) -> Self {
        let mut session = Self::new();
        let now = Local::now();
        for entry in seed {
            session.append(entry.origin, entry.body.clone(), entry.timestamp(now));
        }
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Messages in creation order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Whether an assistant reply is pending.
    pub fn is_typing(&self) -> bool {
        self.pending > 0
    }

    /// Number of replies scheduled but not yet appended.
    pub fn pending_replies(&self) -> usize {
        self.pending
    }

    /// Current input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input buffer (mirrors the editor contents).
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Prefill the input buffer with a suggested prompt without sending it.
    pub fn select_suggested_prompt(&mut self, prompt: &str) {
        debug!(session = %self.id, prompt, "suggested prompt selected");
        self.input = prompt.to_string();
    }

    /// Submit `text` as a user message.
    ///
    /// Whitespace-only text is ignored and returns `None` with no state
    /// change. Otherwise the trimmed text is appended, the input buffer is
    /// cleared, the typing flag is raised, and a ticket for the reply is
    /// returned.
    pub fn submit(&mut self, text: &str) -> Option<PendingReply> {
        let body = text.trim();
        if body.is_empty() {
            return None;
        }

        let reply_to = self.append(Origin::User, body, Local::now());
        self.input.clear();
        self.pending += 1;
        debug!(session = %self.id, message = %reply_to, pending = self.pending, "user message submitted");

        Some(PendingReply {
            session_id: self.id,
            reply_to,
            transcript: self.messages.clone(),
        })
    }

    /// Submit the current input buffer.
    pub fn submit_input(&mut self) -> Option<PendingReply> {
        let text = self.input.clone();
        self.submit(&text)
    }

    /// Append the assistant reply for `ticket`.
    ///
    /// Returns `None` (and changes nothing) if the ticket was issued by a
    /// different session, e.g. one that has since been replaced.
    pub fn resolve(&mut self, ticket: PendingReply, body: impl Into<String>) -> Option<MessageId> {
        if ticket.session_id != self.id {
            debug!(
                session = %self.id,
                ticket_session = %ticket.session_id,
                "dropping reply for another session"
            );
            return None;
        }

        let id = self.append(Origin::Assistant, body, Local::now());
        self.pending = self.pending.saturating_sub(1);
        debug!(session = %self.id, message = %id, reply_to = %ticket.reply_to, pending = self.pending, "reply appended");
        Some(id)
    }

    fn append(
        &mut self,
        origin: Origin,
        body: impl Into<String>,
        at: chrono::DateTime<Local>,
    ) -> MessageId {
        let id = MessageId::new(self.next_id);
        self.next_id += 1;
        self.messages.push(Message::new(id, origin, body, at));
        id
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(session: &Session) -> Vec<u64> {
        session.messages().iter().map(|m| m.id().get()).collect()
    }

    #[test]
    fn test_submit_appends_user_message() {
        let mut session = Session::new();
        let ticket = session.submit("Hello").unwrap();

        assert_eq!(session.len(), 1);
        let msg = session.last().unwrap();
        assert_eq!(msg.origin(), Origin::User);
        assert_eq!(msg.body(), "Hello");
        assert_eq!(ticket.reply_to(), msg.id());
        assert!(session.is_typing());
    }

    #[test]
    fn test_submit_trims_text() {
        let mut session = Session::new();
        session.submit("  spaced out \n").unwrap();
        assert_eq!(session.last().unwrap().body(), "spaced out");
    }

    #[test]
    fn test_whitespace_submission_is_noop() {
        let mut session = Session::new();
        session.set_input("   ");

        for text in ["", "  ", "\n\t "] {
            assert!(session.submit(text).is_none());
        }
        assert!(session.submit_input().is_none());

        assert!(session.is_empty());
        assert!(!session.is_typing());
        assert_eq!(session.input(), "   ");
    }

    #[test]
    fn test_submit_clears_input_buffer() {
        let mut session = Session::new();
        session.set_input("draft text");
        session.submit_input().unwrap();

        assert_eq!(session.input(), "");
        assert_eq!(session.last().unwrap().body(), "draft text");
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut session = Session::new();
        let mut tickets = Vec::new();
        for text in ["one", "two", "three"] {
            tickets.push(session.submit(text).unwrap());
        }
        for ticket in tickets {
            session.resolve(ticket, "ok").unwrap();
        }

        assert_eq!(ids(&session), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_typing_until_reply() {
        let mut session = Session::new();
        let ticket = session.submit("Hello").unwrap();
        assert!(session.is_typing());

        let reply = session.resolve(ticket, "placeholder").unwrap();
        assert!(!session.is_typing());

        let bodies: Vec<_> = session
            .messages()
            .iter()
            .map(|m| (m.origin(), m.body()))
            .collect();
        assert_eq!(
            bodies,
            vec![(Origin::User, "Hello"), (Origin::Assistant, "placeholder")]
        );
        assert_eq!(reply.get(), 2);
    }

    #[test]
    fn test_overlapping_replies_resolve_independently() {
        let mut session = Session::new();
        let first = session.submit("first").unwrap();
        let second = session.submit("second").unwrap();
        assert_eq!(session.pending_replies(), 2);

        session.resolve(first, "reply one");
        assert!(session.is_typing());

        session.resolve(second, "reply two");
        assert!(!session.is_typing());
        assert_eq!(session.len(), 4);
    }

    #[test]
    fn test_ticket_transcript_snapshot() {
        let mut session = Session::new();
        let ticket = session.submit("question").unwrap();
        session.submit("follow up").unwrap();

        assert_eq!(ticket.transcript().len(), 1);
        assert_eq!(ticket.transcript()[0].body(), "question");
    }

    #[test]
    fn test_foreign_ticket_is_ignored() {
        let mut old = Session::new();
        let ticket = old.submit("hello").unwrap();

        let mut fresh = Session::new();
        assert!(fresh.resolve(ticket, "late reply").is_none());
        assert!(fresh.is_empty());
        assert!(!fresh.is_typing());
    }

    #[test]
    fn test_select_suggested_prompt_only_sets_input() {
        let mut session = Session::new();
        session.select_suggested_prompt("Explain React Native hooks");

        assert_eq!(session.input(), "Explain React Native hooks");
        assert!(session.is_empty());
        assert!(!session.is_typing());
    }

    #[test]
    fn test_with_history_numbers_from_one() {
        let seed = vec![
            SeedMessage::new(Origin::User, "Hi", Some("10:30 AM")),
            SeedMessage::new(Origin::Assistant, "Hello!", Some("10:30 AM")),
        ];
        let mut session = Session::with_history(&seed);
        assert_eq!(ids(&session), vec![1, 2]);
        assert!(!session.is_typing());

        session.submit("next").unwrap();
        assert_eq!(session.last().unwrap().id().get(), 3);
    }
}
