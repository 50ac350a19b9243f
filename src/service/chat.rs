use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

use crate::{
    data::{chat::ClanChatRepository, clan::ClanRepository, clan_member::ClanMemberRepository},
    error::{clan::ClanError, AppError},
    model::{
        chat::{AppendMessageParam, ChatHistory, ChatMessage},
        id::ClanId,
    },
    service::{
        lock::MutationLocks,
        user_directory::{display_name_or_placeholder, UserDirectory},
    },
    util::time::now_local,
};

/// Append-only chat log of each clan.
pub struct ClanChatService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a MutationLocks,
    users: &'a dyn UserDirectory,
}

impl<'a> ClanChatService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        locks: &'a MutationLocks,
        users: &'a dyn UserDirectory,
    ) -> Self {
        Self { db, locks, users }
    }

    /// Appends a message from a clan member.
    ///
    /// Runs under the clan's lock so a concurrent leave or disband cannot
    /// interleave between the membership check and the insert.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the stored message
    /// - `Err(AppError::ClanErr(NotFound))` - No clan with that id
    /// - `Err(AppError::ClanErr(NotMember))` - Sender is not in the roster
    /// - `Err(AppError::ClanErr(EmptyContent))` - Content is blank
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn append(
        &self,
        clan_id: ClanId,
        param: AppendMessageParam,
    ) -> Result<i32, AppError> {
        let _guard = self.locks.clans.lock(clan_id).await;

        if !ClanRepository::new(self.db).exists(clan_id).await? {
            return Err(ClanError::NotFound(clan_id).into());
        }

        if !ClanMemberRepository::new(self.db)
            .is_member(clan_id, param.sender_id)
            .await?
        {
            return Err(ClanError::NotMember {
                clan_id,
                user_id: param.sender_id,
            }
            .into());
        }

        let content = param.content.trim();
        if content.is_empty() {
            return Err(ClanError::EmptyContent.into());
        }

        let message = ClanChatRepository::new(self.db)
            .create(clan_id, param.sender_id, content, now_local())
            .await?;

        info!(
            "User {} posted message {} in clan {}",
            param.sender_id, message.id, clan_id
        );

        Ok(message.id)
    }

    /// Gets the most recent messages of a clan in ascending time order.
    ///
    /// A `limit` of `None` or 0 returns the whole log. `total_count` is always
    /// the size of the whole log, read in the same transaction as the window.
    ///
    /// # Returns
    /// - `Ok(ChatHistory)` - Message window and total count
    /// - `Err(AppError::ClanErr(NotFound))` - No clan with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list(&self, clan_id: ClanId, limit: Option<u64>) -> Result<ChatHistory, AppError> {
        let txn = self.db.begin().await?;

        if !ClanRepository::new(&txn).exists(clan_id).await? {
            return Err(ClanError::NotFound(clan_id).into());
        }

        let repo = ClanChatRepository::new(&txn);
        let total_count = repo.count_by_clan(clan_id).await?;
        let recent = repo
            .get_recent(clan_id, limit.filter(|limit| *limit > 0))
            .await?;

        txn.commit().await?;

        let mut messages = Vec::with_capacity(recent.len());
        for entity in recent.into_iter().rev() {
            let sender =
                display_name_or_placeholder(self.users, entity.sender_id.into()).await;
            messages.push(ChatMessage::from_entity(entity, sender));
        }

        Ok(ChatHistory {
            messages,
            total_count,
        })
    }
}
