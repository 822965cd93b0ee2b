//! Chat list shown in the side drawer.
//!
//! Selecting a chat only closes the drawer; there is one live session.

use serde::{Deserialize, Serialize};

/// Summary row for a past conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSummary {
    pub id: u64,
    pub title: String,
    pub last_message: String,
    /// Relative age label, e.g. `15 mins ago`.
    pub time: String,
    #[serde(default)]
    pub unread: u32,
}

impl ChatSummary {
    /// Case-insensitive match against title or last message.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.title.to_lowercase().contains(&query)
            || self.last_message.to_lowercase().contains(&query)
    }
}

/// Chats matching `query`, in their original order.
pub fn filter_chats<'a>(chats: &'a [ChatSummary], query: &str) -> Vec<&'a ChatSummary> {
    chats.iter().filter(|c| c.matches(query)).collect()
}
