use chrono::{Local, Timelike};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating clan roster rows.
pub struct ClanMemberFactory<'a> {
    db: &'a DatabaseConnection,
    clan_id: i32,
    user_id: i64,
    joined_at: chrono::NaiveDateTime,
}

impl<'a> ClanMemberFactory<'a> {
    /// Creates a new ClanMemberFactory joining `user_id` to `clan_id` now.
    pub fn new(db: &'a DatabaseConnection, clan_id: i32, user_id: i64) -> Self {
        let now = Local::now().naive_local();
        Self {
            db,
            clan_id,
            user_id,
            joined_at: now.with_nanosecond(0).unwrap_or(now),
        }
    }

    pub fn joined_at(mut self, joined_at: chrono::NaiveDateTime) -> Self {
        self.joined_at = joined_at;
        self
    }

    pub async fn build(self) -> Result<entity::clan_member::Model, DbErr> {
        entity::clan_member::ActiveModel {
            clan_id: ActiveValue::Set(self.clan_id),
            user_id: ActiveValue::Set(self.user_id),
            joined_at: ActiveValue::Set(self.joined_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Adds `user_id` to the roster of `clan_id`.
pub async fn create_clan_member(
    db: &DatabaseConnection,
    clan_id: i32,
    user_id: i64,
) -> Result<entity::clan_member::Model, DbErr> {
    ClanMemberFactory::new(db, clan_id, user_id).build().await
}
