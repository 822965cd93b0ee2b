//! Social feed posts.

use serde::{Deserialize, Serialize};

/// A post shown on the home feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub username: String,
    pub handle: String,
    /// Relative age label, e.g. `2h`.
    pub time: String,
    pub content: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub reposts: u32,
}

impl Post {
    /// Header line: `username @handle · time`.
    pub fn byline(&self) -> String {
        format!("{} {} · {}", self.username, self.handle, self.time)
    }

    /// Total interactions, used for the "popular" marker.
    pub fn engagement(&self) -> u32 {
        self.likes + self.comments + self.reposts
    }
}
