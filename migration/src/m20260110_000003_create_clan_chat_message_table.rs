use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000001_create_clan_table::Clan;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClanChatMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(ClanChatMessage::Id))
                    .col(integer(ClanChatMessage::ClanId))
                    .col(big_integer(ClanChatMessage::SenderId))
                    .col(text(ClanChatMessage::Content))
                    .col(date_time(ClanChatMessage::SentAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clan_chat_message_clan_id")
                            .from(ClanChatMessage::Table, ClanChatMessage::ClanId)
                            .to(Clan::Table, Clan::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Recent-first reads per clan
        manager
            .create_index(
                Index::create()
                    .name("idx_clan_chat_message_clan_sent_at")
                    .table(ClanChatMessage::Table)
                    .col(ClanChatMessage::ClanId)
                    .col(ClanChatMessage::SentAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_clan_chat_message_clan_sent_at")
                    .table(ClanChatMessage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ClanChatMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClanChatMessage {
    Table,
    Id,
    ClanId,
    SenderId,
    Content,
    SentAt,
}
