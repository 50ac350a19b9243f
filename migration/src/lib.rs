pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_clan_table;
mod m20260110_000002_create_clan_member_table;
mod m20260110_000003_create_clan_chat_message_table;
mod m20260112_000004_create_war_sequence_table;
mod m20260112_000005_create_clan_war_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_clan_table::Migration),
            Box::new(m20260110_000002_create_clan_member_table::Migration),
            Box::new(m20260110_000003_create_clan_chat_message_table::Migration),
            Box::new(m20260112_000004_create_war_sequence_table::Migration),
            Box::new(m20260112_000005_create_clan_war_table::Migration),
        ]
    }
}
