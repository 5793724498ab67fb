use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a chat message.
///
/// The wire format carries lowercase strings. Any sender value the client
/// doesn't recognise deserializes as `Assistant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Human,
    #[serde(other)]
    Assistant,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sender::Human => write!(f, "human"),
            Sender::Assistant => write!(f, "assistant"),
        }
    }
}

/// One chat message as exchanged with the API.
///
/// Messages are immutable once fetched; the display layer re-renders
/// `content` through the block parser on every pass. The timestamp doubles
/// as the identity used to reconcile a provisionally-sent message with the
/// server's authoritative copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// A full chat session with its message log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub uuid: Uuid,
    pub title: String,
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// Chat-history listing entry; the message log is fetched separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSummary {
    pub uuid: Uuid,
    pub title: String,
}
