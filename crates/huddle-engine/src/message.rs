//! Chat messages.
//!
//! A [`Message`] is immutable once created: fields are private and only a
//! [`Session`](crate::Session) assigns identifiers.

use chrono::{DateTime, Local, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format used for message time labels (e.g. `10:30 AM`).
pub const TIME_LABEL_FORMAT: &str = "%I:%M %p";

/// Identifier of a message, unique and increasing within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(u64);

impl MessageId {
    /// Raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }

    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Typed by the local user.
    User,
    /// Produced by the reply provider.
    Assistant,
}

impl Origin {
    /// Lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    id: MessageId,
    origin: Origin,
    body: String,
    created_at: DateTime<Local>,
}

impl Message {
    pub(crate) fn new(
        id: MessageId,
        origin: Origin,
        body: impl Into<String>,
        created_at: DateTime<Local>,
    ) -> Self {
        Self {
            id,
            origin,
            body: body.into(),
            created_at,
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    /// Whether the message was sent by the user.
    pub fn is_user(&self) -> bool {
        self.origin == Origin::User
    }

    /// Localized hour:minute label, e.g. `10:32 AM`.
    pub fn time_label(&self) -> String {
        self.created_at.format(TIME_LABEL_FORMAT).to_string()
    }
}

/// A message template used to seed a session from fixtures.
///
/// Seeds carry no identifier; the session numbers them on import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedMessage {
    pub origin: Origin,
    pub body: String,
    /// Time label in [`TIME_LABEL_FORMAT`]; today's date is assumed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl SeedMessage {
    pub fn new(origin: Origin, body: impl Into<String>, time: Option<&str>) -> Self {
        Self {
            origin,
            body: body.into(),
            time: time.map(String::from),
        }
    }

    /// Resolve the seed's time label to a local timestamp.
    ///
    /// Missing or unparseable labels fall back to `now`.
    pub fn timestamp(&self, now: DateTime<Local>) -> DateTime<Local> {
        self.time
            .as_deref()
            .and_then(|label| NaiveTime::parse_from_str(label, TIME_LABEL_FORMAT).ok())
            .and_then(|time| {
                now.date_naive()
                    .and_time(time)
                    .and_local_timezone(Local)
                    .single()
            })
            .unwrap_or(now)
    }
}
