use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::id::{ClanId, UserId};

pub struct ClanChatRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClanChatRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a message to a clan's chat log
    ///
    /// # Returns
    /// - `Ok(Model)`: The stored message
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        clan_id: ClanId,
        sender_id: UserId,
        content: &str,
        sent_at: NaiveDateTime,
    ) -> Result<entity::clan_chat_message::Model, DbErr> {
        entity::clan_chat_message::ActiveModel {
            clan_id: ActiveValue::Set(clan_id.0),
            sender_id: ActiveValue::Set(sender_id.0),
            content: ActiveValue::Set(content.to_string()),
            sent_at: ActiveValue::Set(sent_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Counts every message in a clan's chat log
    pub async fn count_by_clan(&self, clan_id: ClanId) -> Result<u64, DbErr> {
        entity::prelude::ClanChatMessage::find()
            .filter(entity::clan_chat_message::Column::ClanId.eq(clan_id.0))
            .count(self.db)
            .await
    }

    /// Gets a clan's messages, most recent first
    ///
    /// Messages sharing a timestamp are ordered by insertion, later first, so a
    /// limited window drops the earliest messages of a busy second rather than
    /// the latest ones.
    ///
    /// # Arguments
    /// - `clan_id`: Clan whose log to read
    /// - `limit`: Maximum number of messages, `None` for the whole log
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Messages in descending time order
    /// - `Err(DbErr)`: Database error
    pub async fn get_recent(
        &self,
        clan_id: ClanId,
        limit: Option<u64>,
    ) -> Result<Vec<entity::clan_chat_message::Model>, DbErr> {
        let mut query = entity::prelude::ClanChatMessage::find()
            .filter(entity::clan_chat_message::Column::ClanId.eq(clan_id.0))
            .order_by_desc(entity::clan_chat_message::Column::SentAt)
            .order_by_desc(entity::clan_chat_message::Column::Id);

        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        query.all(self.db).await
    }

    /// Deletes a clan's entire chat log
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of messages deleted
    /// - `Err(DbErr)`: Database error
    pub async fn delete_by_clan(&self, clan_id: ClanId) -> Result<u64, DbErr> {
        let result = entity::prelude::ClanChatMessage::delete_many()
            .filter(entity::clan_chat_message::Column::ClanId.eq(clan_id.0))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
