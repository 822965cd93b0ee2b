//! Sample content for the feed, notifications, chat drawer and chat screen.
//!
//! Screens receive a [`Fixtures`] value instead of reading global data, so
//! the content can be swapped from a JSON file or replaced in tests.

use crate::chats::ChatSummary;
use crate::feed::Post;
use crate::message::{Origin, SeedMessage};
use crate::notifications::{Notification, NotificationKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// All sample content the UI renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub chats: Vec<ChatSummary>,
    #[serde(default)]
    pub suggested_prompts: Vec<String>,
    #[serde(default)]
    pub seed_messages: Vec<SeedMessage>,
}

impl Fixtures {
    /// Load fixtures from a JSON file. Missing sections are empty.
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path).map_err(FixtureError::Io)?;
        serde_json::from_str(&content).map_err(FixtureError::Parse)
    }

    /// Built-in sample data.
    pub fn sample() -> Self {
        Self {
            posts: sample_posts(),
            notifications: sample_notifications(),
            chats: sample_chats(),
            suggested_prompts: vec![
                "Explain React Native hooks".into(),
                "Best practices for styling".into(),
                "How to optimize performance?".into(),
                "State management options".into(),
            ],
            seed_messages: sample_seed_messages(),
        }
    }
}

fn post(
    id: u64,
    username: &str,
    handle: &str,
    time: &str,
    content: &str,
    counts: (u32, u32, u32),
) -> Post {
    Post {
        id,
        username: username.into(),
        handle: handle.into(),
        time: time.into(),
        content: content.into(),
        likes: counts.0,
        comments: counts.1,
        reposts: counts.2,
    }
}

fn sample_posts() -> Vec<Post> {
    vec![
        post(
            1,
            "john_doe",
            "@johndoe",
            "2h",
            "Just finished an amazing React Native project! The expo router makes navigation so much easier. 🚀",
            (24, 5, 8),
        ),
        post(
            2,
            "jane_smith",
            "@janesmith",
            "4h",
            "Beautiful sunset today! Sometimes you need to step away from the code and enjoy nature 🌅",
            (67, 12, 23),
        ),
        post(
            3,
            "dev_guru",
            "@devguru",
            "6h",
            "Pro tip: Always test your mobile app on real devices. Simulators are great but nothing beats the real thing! 📱",
            (89, 18, 34),
        ),
        post(
            4,
            "design_lover",
            "@designlover",
            "8h",
            "Clean UI is not just about looks - it's about creating intuitive user experiences that delight users ✨",
            (156, 28, 67),
        ),
    ]
}

fn notification(
    id: u64,
    kind: NotificationKind,
    title: &str,
    message: &str,
    time: &str,
    read: bool,
) -> Notification {
    Notification {
        id,
        kind,
        title: title.into(),
        message: message.into(),
        time: time.into(),
        read,
    }
}

fn sample_notifications() -> Vec<Notification> {
    vec![
        notification(
            1,
            NotificationKind::Like,
            "New Like",
            "john_doe liked your post about React Native development",
            "2 minutes ago",
            false,
        ),
        notification(
            2,
            NotificationKind::Comment,
            "New Comment",
            "jane_smith commented on your post: \"Great insights!\"",
            "15 minutes ago",
            false,
        ),
        notification(
            3,
            NotificationKind::Follow,
            "New Follower",
            "dev_guru started following you",
            "1 hour ago",
            true,
        ),
        notification(
            4,
            NotificationKind::System,
            "App Update",
            "New features available! Update to the latest version",
            "2 hours ago",
            true,
        ),
        notification(
            5,
            NotificationKind::Mention,
            "Mentioned You",
            "design_lover mentioned you in a post about UI design",
            "3 hours ago",
            true,
        ),
        notification(
            6,
            NotificationKind::Like,
            "Multiple Likes",
            "Your post received 25+ likes in the last hour",
            "4 hours ago",
            true,
        ),
    ]
}

fn chat(id: u64, title: &str, last_message: &str, time: &str, unread: u32) -> ChatSummary {
    ChatSummary {
        id,
        title: title.into(),
        last_message: last_message.into(),
        time: time.into(),
        unread,
    }
}

fn sample_chats() -> Vec<ChatSummary> {
    vec![
        chat(
            1,
            "Bankroll Management Tips",
            "Thanks for the advice on managing...",
            "2 mins ago",
            2,
        ),
        chat(
            2,
            "Today's Matches Analysis",
            "What about the Liverpool vs Arsenal...",
            "15 mins ago",
            0,
        ),
        chat(
            3,
            "Best Bookies Discussion",
            "I've been using Bet365 for a while...",
            "1 hour ago",
            1,
        ),
        chat(
            4,
            "Football Predictions",
            "The odds look good for tonight's...",
            "3 hours ago",
            0,
        ),
        chat(
            5,
            "Strategy Questions",
            "How do you calculate value bets...",
            "1 day ago",
            0,
        ),
    ]
}

fn sample_seed_messages() -> Vec<SeedMessage> {
    vec![
        SeedMessage::new(
            Origin::User,
            "Hello! Can you help me with React Native development?",
            Some("10:30 AM"),
        ),
        SeedMessage::new(
            Origin::Assistant,
            "Hello! I'd be happy to help you with React Native development. I can assist with components, navigation, state management, styling, and best practices. What specific topic would you like to explore?",
            Some("10:30 AM"),
        ),
        SeedMessage::new(
            Origin::User,
            "What's the best way to handle navigation in React Native?",
            Some("10:32 AM"),
        ),
        SeedMessage::new(
            Origin::Assistant,
            "For React Native navigation, I recommend React Navigation or Expo Router. React Navigation offers:\n\n• Stack Navigation for hierarchical screens\n• Tab Navigation for bottom tabs\n• Drawer Navigation for side menus\n\nExpo Router provides file-based routing on top of React Navigation, with excellent TypeScript support.",
            Some("10:32 AM"),
        ),
    ]
}

/// Errors that can occur when loading fixtures.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// I/O error reading the fixture file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing fixture JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::unread_count;
    use tempfile::TempDir;

    #[test]
    fn test_sample_contents() {
        let fixtures = Fixtures::sample();
        assert_eq!(fixtures.posts.len(), 4);
        assert_eq!(fixtures.notifications.len(), 6);
        assert_eq!(fixtures.chats.len(), 5);
        assert_eq!(fixtures.suggested_prompts.len(), 4);
        assert_eq!(fixtures.seed_messages.len(), 4);
        assert_eq!(unread_count(&fixtures.notifications), 2);
    }

    #[test]
    fn test_sample_round_trips_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fixtures.json");
        let fixtures = Fixtures::sample();
        std::fs::write(&path, serde_json::to_string_pretty(&fixtures).unwrap()).unwrap();

        assert_eq!(Fixtures::load(&path).unwrap(), fixtures);
    }

    #[test]
    fn test_partial_file_leaves_sections_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fixtures.json");
        std::fs::write(&path, r#"{"suggested_prompts": ["Hi there"]}"#).unwrap();

        let fixtures = Fixtures::load(&path).unwrap();
        assert_eq!(fixtures.suggested_prompts, vec!["Hi there"]);
        assert!(fixtures.posts.is_empty());
        assert!(fixtures.seed_messages.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Fixtures::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, FixtureError::Io(_)));
    }
}
