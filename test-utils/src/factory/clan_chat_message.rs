//! Chat message factory.
//!
//! Messages are inserted directly, without the membership checks of the chat
//! service, so tests can control `sent_at` precisely.

use crate::factory::helpers::next_id;
use chrono::{Local, Timelike};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ClanChatMessageFactory<'a> {
    db: &'a DatabaseConnection,
    clan_id: i32,
    sender_id: i64,
    content: String,
    sent_at: chrono::NaiveDateTime,
}

impl<'a> ClanChatMessageFactory<'a> {
    /// Creates a new ClanChatMessageFactory with default values.
    ///
    /// Defaults:
    /// - content: `"Message {id}"` where id is auto-incremented
    /// - sent_at: now, whole seconds
    pub fn new(db: &'a DatabaseConnection, clan_id: i32, sender_id: i64) -> Self {
        let now = Local::now().naive_local();
        Self {
            db,
            clan_id,
            sender_id,
            content: format!("Message {}", next_id()),
            sent_at: now.with_nanosecond(0).unwrap_or(now),
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn sent_at(mut self, sent_at: chrono::NaiveDateTime) -> Self {
        self.sent_at = sent_at;
        self
    }

    pub async fn build(self) -> Result<entity::clan_chat_message::Model, DbErr> {
        entity::clan_chat_message::ActiveModel {
            clan_id: ActiveValue::Set(self.clan_id),
            sender_id: ActiveValue::Set(self.sender_id),
            content: ActiveValue::Set(self.content),
            sent_at: ActiveValue::Set(self.sent_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a chat message with default content sent now.
pub async fn create_chat_message(
    db: &DatabaseConnection,
    clan_id: i32,
    sender_id: i64,
) -> Result<entity::clan_chat_message::Model, DbErr> {
    ClanChatMessageFactory::new(db, clan_id, sender_id)
        .build()
        .await
}
