use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WarSequence::Table)
                    .if_not_exists()
                    .col(integer(WarSequence::Id).primary_key())
                    .col(big_integer(WarSequence::LastWarId).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WarSequence::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WarSequence {
    Table,
    Id,
    LastWarId,
}
