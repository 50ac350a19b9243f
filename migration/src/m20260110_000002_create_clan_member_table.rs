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
                    .table(ClanMember::Table)
                    .if_not_exists()
                    .col(pk_auto(ClanMember::Id))
                    .col(integer(ClanMember::ClanId))
                    .col(big_integer(ClanMember::UserId))
                    .col(date_time(ClanMember::JoinedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clan_member_clan_id")
                            .from(ClanMember::Table, ClanMember::ClanId)
                            .to(Clan::Table, Clan::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_clan_member_unique")
                    .table(ClanMember::Table)
                    .col(ClanMember::ClanId)
                    .col(ClanMember::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClanMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClanMember {
    Table,
    Id,
    ClanId,
    UserId,
    JoinedAt,
}
