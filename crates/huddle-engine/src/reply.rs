//! Reply provider capability.
//!
//! The session never talks to an assistant directly. A [`ReplyProvider`]
//! produces the body of a reply given the transcript; the
//! [`ReplyScheduler`](crate::ReplyScheduler) decides when to ask.

use crate::config::DEFAULT_PLACEHOLDER_REPLY;
use crate::message::Message;
use async_trait::async_trait;

/// Text appended when a provider fails, so every submission still gets a reply.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't come up with a reply just now.";

/// Produces assistant replies.
#[async_trait]
pub trait ReplyProvider: Send + Sync {
    /// Short name for logs and the status bar.
    fn name(&self) -> &str;

    /// Produce a reply to the last user message in `transcript`.
    async fn reply(&self, transcript: &[Message]) -> Result<String, ReplyError>;
}

/// Provider that always answers with the same placeholder text.
#[derive(Debug, Clone)]
pub struct CannedReplyProvider {
    text: String,
}

impl CannedReplyProvider {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Default for CannedReplyProvider {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER_REPLY)
    }
}

#[async_trait]
impl ReplyProvider for CannedReplyProvider {
    fn name(&self) -> &str {
        "canned"
    }

    async fn reply(&self, _transcript: &[Message]) -> Result<String, ReplyError> {
        Ok(self.text.clone())
    }
}

/// Errors a reply provider can report.
#[derive(Debug, thiserror::Error)]
pub enum ReplyError {
    /// The provider cannot be reached or is not configured.
    #[error("Reply provider unavailable: {0}")]
    Unavailable(String),

    /// The provider was reached but could not produce a reply.
    #[error("Reply failed: {0}")]
    Failed(String),
}
