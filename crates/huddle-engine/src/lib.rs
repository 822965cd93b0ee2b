//! huddle-engine: Headless core for the huddle social/chat client
//!
//! This crate provides everything the UI renders but does not draw:
//! - The conversation session (append-only messages, typing flag, input buffer)
//! - The reply provider capability and the delayed reply scheduler
//! - The side drawer open/close state machine
//! - Feed, notification and chat-list fixtures
//! - Configuration

pub mod chats;
pub mod config;
pub mod drawer;
pub mod feed;
pub mod fixtures;
pub mod message;
pub mod notifications;
pub mod reply;
pub mod scheduler;
pub mod session;

// Re-export commonly used types
pub use chats::{filter_chats, ChatSummary};
pub use config::{Config, ConfigError, DEFAULT_PLACEHOLDER_REPLY};
pub use drawer::{Drawer, DrawerState};
pub use feed::Post;
pub use fixtures::{FixtureError, Fixtures};
pub use message::{Message, MessageId, Origin, SeedMessage};
pub use notifications::{
    filter_notifications, mark_all_read, unread_count, unread_summary, Notification,
    NotificationFilter, NotificationKind,
};
pub use reply::{CannedReplyProvider, ReplyError, ReplyProvider, FALLBACK_REPLY};
pub use scheduler::{ReplyReady, ReplyScheduler};
pub use session::{PendingReply, Session};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_version() {
        let version = engine_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
