use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved conversation between a user and the health assistant.
///
/// Rewritten as part of the whole session list after every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: Uuid,
    /// Prefix of the first message, used as the sidebar label.
    pub title: String,
    pub last_updated: jiff::Timestamp,
    pub messages: Vec<ChatHistoryMessage>,
}

/// A single message in a persisted chat history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatHistoryMessage {
    pub role: ChatHistoryRole,
    pub content: String,
    pub timestamp: jiff::Timestamp,
}

/// Role of a chat history message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatHistoryRole {
    User,
    Assistant,
}
