use crate::factory::helpers::next_id;
use chrono::{Local, Timelike};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for clan war summary entries.
///
/// Inserts a new entry; use it for clans without a current war.
pub struct ClanWarFactory<'a> {
    db: &'a DatabaseConnection,
    clan_id: i32,
    war_id: String,
    start_time: chrono::NaiveDateTime,
}

impl<'a> ClanWarFactory<'a> {
    /// Creates a new ClanWarFactory.
    ///
    /// Defaults:
    /// - war_id: `"war-{id}"` where id is auto-incremented
    /// - start_time: now, whole seconds
    pub fn new(db: &'a DatabaseConnection, clan_id: i32) -> Self {
        let now = Local::now().naive_local();
        Self {
            db,
            clan_id,
            war_id: format!("war-{}", next_id()),
            start_time: now.with_nanosecond(0).unwrap_or(now),
        }
    }

    pub fn war_id(mut self, war_id: impl Into<String>) -> Self {
        self.war_id = war_id.into();
        self
    }

    pub fn start_time(mut self, start_time: chrono::NaiveDateTime) -> Self {
        self.start_time = start_time;
        self
    }

    pub async fn build(self) -> Result<entity::clan_war::Model, DbErr> {
        entity::clan_war::ActiveModel {
            clan_id: ActiveValue::Set(self.clan_id),
            war_id: ActiveValue::Set(self.war_id),
            start_time: ActiveValue::Set(self.start_time),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a war summary entry for `clan_id` started now.
pub async fn create_clan_war(
    db: &DatabaseConnection,
    clan_id: i32,
) -> Result<entity::clan_war::Model, DbErr> {
    ClanWarFactory::new(db, clan_id).build().await
}
