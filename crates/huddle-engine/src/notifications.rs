//! Notifications and the filters offered on the notifications screen.

use serde::{Deserialize, Serialize};

/// What triggered a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Like,
    Comment,
    Follow,
    System,
    Mention,
}

impl NotificationKind {
    /// Single-glyph marker for list rendering.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Like => "♥",
            Self::Comment => "✎",
            Self::Follow => "+",
            Self::System => "↻",
            Self::Mention => "@",
        }
    }
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Relative age label, e.g. `2 minutes ago`.
    pub time: String,
    #[serde(default)]
    pub read: bool,
}

/// Filter tabs on the notifications screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    Likes,
    Comments,
    Follows,
}

impl NotificationFilter {
    /// All filters in display order.
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Unread,
        Self::Likes,
        Self::Comments,
        Self::Follows,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Unread => "Unread",
            Self::Likes => "Likes",
            Self::Comments => "Comments",
            Self::Follows => "Follows",
        }
    }

    pub fn matches(self, notification: &Notification) -> bool {
        match self {
            Self::All => true,
            Self::Unread => !notification.read,
            Self::Likes => notification.kind == NotificationKind::Like,
            Self::Comments => notification.kind == NotificationKind::Comment,
            Self::Follows => notification.kind == NotificationKind::Follow,
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next filter, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous filter, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Notifications matching `filter`, in their original order.
pub fn filter_notifications(
    notifications: &[Notification],
    filter: NotificationFilter,
) -> Vec<&Notification> {
    notifications.iter().filter(|n| filter.matches(n)).collect()
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

/// Mark every notification read. Returns how many changed.
pub fn mark_all_read(notifications: &mut [Notification]) -> usize {
    let mut changed = 0;
    for notification in notifications.iter_mut().filter(|n| !n.read) {
        notification.read = true;
        changed += 1;
    }
    changed
}

/// Header summary, e.g. `2 unread notifications`.
pub fn unread_summary(count: usize) -> String {
    match count {
        0 => "You're all caught up".to_string(),
        1 => "1 unread notification".to_string(),
        n => format!("{n} unread notifications"),
    }
}
