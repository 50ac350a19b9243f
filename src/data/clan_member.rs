use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::id::{ClanId, UserId};

pub struct ClanMemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClanMemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a user to a clan's roster
    ///
    /// # Returns
    /// - `Ok(Model)`: The created roster row
    /// - `Err(DbErr)`: Database error, including a duplicate membership
    pub async fn add(
        &self,
        clan_id: ClanId,
        user_id: UserId,
        joined_at: NaiveDateTime,
    ) -> Result<entity::clan_member::Model, DbErr> {
        entity::clan_member::ActiveModel {
            clan_id: ActiveValue::Set(clan_id.0),
            user_id: ActiveValue::Set(user_id.0),
            joined_at: ActiveValue::Set(joined_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Removes a user from a clan's roster
    ///
    /// # Returns
    /// - `Ok(true)`: Roster row removed
    /// - `Ok(false)`: The user was not a member
    /// - `Err(DbErr)`: Database error
    pub async fn remove(&self, clan_id: ClanId, user_id: UserId) -> Result<bool, DbErr> {
        let result = entity::prelude::ClanMember::delete_many()
            .filter(entity::clan_member::Column::ClanId.eq(clan_id.0))
            .filter(entity::clan_member::Column::UserId.eq(user_id.0))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Checks whether a user is in a clan's roster
    pub async fn is_member(&self, clan_id: ClanId, user_id: UserId) -> Result<bool, DbErr> {
        let count = entity::prelude::ClanMember::find()
            .filter(entity::clan_member::Column::ClanId.eq(clan_id.0))
            .filter(entity::clan_member::Column::UserId.eq(user_id.0))
            .count(self.db)
            .await?;
        Ok(count > 0)
    }

    /// Gets the member ids of a clan in join order
    pub async fn get_member_ids(&self, clan_id: ClanId) -> Result<Vec<UserId>, DbErr> {
        let members = entity::prelude::ClanMember::find()
            .filter(entity::clan_member::Column::ClanId.eq(clan_id.0))
            .order_by_asc(entity::clan_member::Column::Id)
            .all(self.db)
            .await?;
        Ok(members.into_iter().map(|m| UserId(m.user_id)).collect())
    }

    /// Counts the members of a clan
    pub async fn count_by_clan(&self, clan_id: ClanId) -> Result<u64, DbErr> {
        entity::prelude::ClanMember::find()
            .filter(entity::clan_member::Column::ClanId.eq(clan_id.0))
            .count(self.db)
            .await
    }

    /// Deletes every roster row of a clan
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of rows deleted
    /// - `Err(DbErr)`: Database error
    pub async fn delete_by_clan(&self, clan_id: ClanId) -> Result<u64, DbErr> {
        let result = entity::prelude::ClanMember::delete_many()
            .filter(entity::clan_member::Column::ClanId.eq(clan_id.0))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
