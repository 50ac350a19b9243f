//! Clan chat models.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::{
    model::id::UserId,
    util::time::serde_timestamp,
};

/// A chat message with its sender resolved to a display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    #[serde(skip)]
    pub id: i32,
    #[serde(skip)]
    pub sender_id: UserId,
    /// Display name of the sender, or a `User{id}` placeholder.
    pub sender: String,
    pub content: String,
    #[serde(with = "serde_timestamp")]
    pub time: NaiveDateTime,
}

impl ChatMessage {
    /// Converts a stored message to its display form.
    ///
    /// # Arguments
    /// - `entity` - The stored message row
    /// - `sender` - Display name already resolved for `entity.sender_id`
    pub fn from_entity(entity: entity::clan_chat_message::Model, sender: String) -> Self {
        Self {
            id: entity.id,
            sender_id: UserId(entity.sender_id),
            sender,
            content: entity.content,
            time: entity.sent_at,
        }
    }
}

/// A window of a clan's chat log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatHistory {
    /// Messages in ascending chronological order.
    pub messages: Vec<ChatMessage>,
    /// Size of the clan's entire log, not of `messages`.
    #[serde(rename = "count")]
    pub total_count: u64,
}

/// Parameters for appending a chat message.
#[derive(Debug, Clone)]
pub struct AppendMessageParam {
    pub sender_id: UserId,
    /// Raw content; trimmed before storage.
    pub content: String,
}
