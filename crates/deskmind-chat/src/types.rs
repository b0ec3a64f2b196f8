//! Displayed-message types for the chat surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a displayed message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

/// Delivery state shown next to a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    Sending,
    Sent,
    Read,
}

/// One entry in the displayed conversation.
///
/// Immutable once appended; the whole list is dropped when the conversation
/// resets on a language change.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MessageStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_docs: Option<Vec<String>>,
}

impl Message {
    /// A user message, stamped now with status `Sent`.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
            status: Some(MessageStatus::Sent),
            related_docs: None,
        }
    }

    /// A bot message, stamped now with status `Read`.
    pub fn bot(content: impl Into<String>, related_docs: Option<Vec<String>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            sender: Sender::Bot,
            timestamp: Utc::now(),
            status: Some(MessageStatus::Read),
            related_docs,
        }
    }
}
