use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClanWar::Table)
                    .if_not_exists()
                    .col(integer(ClanWar::ClanId).primary_key())
                    .col(string(ClanWar::WarId))
                    .col(date_time(ClanWar::StartTime))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_clan_war_war_id")
                    .table(ClanWar::Table)
                    .col(ClanWar::WarId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_clan_war_war_id")
                    .table(ClanWar::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ClanWar::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClanWar {
    Table,
    ClanId,
    WarId,
    StartTime,
}
