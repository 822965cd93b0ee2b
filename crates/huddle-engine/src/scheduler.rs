//! Delayed reply delivery.
//!
//! [`ReplyScheduler::schedule`] spawns a one-shot task per submission: wait
//! for the configured delay, ask the provider, then send a [`ReplyReady`]
//! back to the owning event loop. The loop applies it to its session with
//! [`ReplyReady::apply`]; the task itself never touches session state.
//!
//! Scheduled replies are never cancelled. If the receiving end has been
//! dropped by the time a reply is ready, the reply is discarded.

use crate::message::MessageId;
use crate::reply::{ReplyProvider, FALLBACK_REPLY};
use crate::session::{PendingReply, Session};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// A reply that is ready to be appended to its session.
#[derive(Debug)]
pub struct ReplyReady {
    pub ticket: PendingReply,
    pub body: String,
}

impl ReplyReady {
    /// Append this reply to `session`.
    pub fn apply(self, session: &mut Session) -> Option<MessageId> {
        session.resolve(self.ticket, self.body)
    }
}

/// Spawns delayed replies and routes them back to the event loop.
#[derive(Clone)]
pub struct ReplyScheduler {
    provider: Arc<dyn ReplyProvider>,
    delay: Duration,
    tx: mpsc::UnboundedSender<ReplyReady>,
}

impl std::fmt::Debug for ReplyScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplyScheduler")
            .field("provider", &self.provider.name())
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

impl ReplyScheduler {
    /// Create a scheduler and the receiver its replies arrive on.
    pub fn new(
        provider: Arc<dyn ReplyProvider>,
        delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<ReplyReady>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                provider,
                delay,
                tx,
            },
            rx,
        )
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Schedule the reply for `ticket`. Must be called within a tokio runtime.
    pub fn schedule(&self, ticket: PendingReply) -> JoinHandle<()> {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        let delay = self.delay;

        debug!(
            session = %ticket.session_id(),
            reply_to = %ticket.reply_to(),
            delay_ms = delay.as_millis(),
            "reply scheduled"
        );

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let body = match provider.reply(ticket.transcript()).await {
                Ok(body) => body,
                Err(e) => {
                    warn!(provider = provider.name(), error = %e, "reply provider failed");
                    FALLBACK_REPLY.to_string()
                }
            };

            let reply_to = ticket.reply_to();
            if tx.send(ReplyReady { ticket, body }).is_err() {
                debug!(reply_to = %reply_to, "session gone, discarding reply");
            }
        })
    }
}
