//! Clan data repository for database operations.
//!
//! This module provides the `ClanRepository` for managing clan records. Creating a
//! clan also inserts the owner's roster row so the owner-is-member invariant holds
//! from the first write.

use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    data::clan_member::ClanMemberRepository,
    model::{
        clan::{Clan, ClanSummary},
        id::{ClanId, UserId},
    },
};

/// Repository providing database operations for clan records.
pub struct ClanRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClanRepository<'a, C> {
    /// Creates a new ClanRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `ClanRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a clan with an explicit id and adds the owner as its first member.
    ///
    /// Run inside a transaction so a failed member insert does not leave an
    /// ownerless clan behind.
    ///
    /// # Arguments
    /// - `id` - Pre-allocated clan id
    /// - `name` - Unique clan name
    /// - `owner_id` - Creating user
    /// - `now` - Creation timestamp, also used as the owner's join time
    ///
    /// # Returns
    /// - `Ok(Clan)` - The created clan with the owner in its roster
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create(
        &self,
        id: ClanId,
        name: &str,
        owner_id: UserId,
        now: NaiveDateTime,
    ) -> Result<Clan, DbErr> {
        let clan = entity::clan::ActiveModel {
            id: ActiveValue::Set(id.0),
            name: ActiveValue::Set(name.to_string()),
            owner_id: ActiveValue::Set(owner_id.0),
            created_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        let owner = entity::clan_member::ActiveModel {
            clan_id: ActiveValue::Set(clan.id),
            user_id: ActiveValue::Set(owner_id.0),
            joined_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Clan::from_entity(clan, vec![UserId(owner.user_id)]))
    }

    /// Finds a clan by id together with its roster in join order.
    ///
    /// # Returns
    /// - `Ok(Some(Clan))` - Clan found
    /// - `Ok(None)` - No clan with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: ClanId) -> Result<Option<Clan>, DbErr> {
        let Some(clan) = entity::prelude::Clan::find_by_id(id.0).one(self.db).await? else {
            return Ok(None);
        };

        let members = ClanMemberRepository::new(self.db).get_member_ids(id).await?;

        Ok(Some(Clan::from_entity(clan, members)))
    }

    /// Checks whether a clan exists without loading its roster.
    pub async fn exists(&self, id: ClanId) -> Result<bool, DbErr> {
        let count = entity::prelude::Clan::find_by_id(id.0).count(self.db).await?;
        Ok(count > 0)
    }

    /// Checks whether any clan already uses `name` (exact match).
    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Clan::find()
            .filter(entity::clan::Column::Name.eq(name))
            .count(self.db)
            .await?;
        Ok(count > 0)
    }

    /// Gets the highest clan id in use.
    ///
    /// # Returns
    /// - `Ok(Some(ClanId))` - Highest existing id
    /// - `Ok(None)` - No clans exist yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn max_id(&self) -> Result<Option<ClanId>, DbErr> {
        let clan = entity::prelude::Clan::find()
            .order_by_desc(entity::clan::Column::Id)
            .one(self.db)
            .await?;

        Ok(clan.map(|c| ClanId(c.id)))
    }

    /// Gets every clan with its member count, ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<ClanSummary>)` - One entry per clan (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_with_member_counts(&self) -> Result<Vec<ClanSummary>, DbErr> {
        let clans = entity::prelude::Clan::find()
            .order_by_asc(entity::clan::Column::Id)
            .all(self.db)
            .await?;

        let mut results = Vec::with_capacity(clans.len());
        for clan in clans {
            let member_count = entity::prelude::ClanMember::find()
                .filter(entity::clan_member::Column::ClanId.eq(clan.id))
                .count(self.db)
                .await?;

            results.push(ClanSummary {
                id: ClanId(clan.id),
                name: clan.name,
                member_count,
            });
        }

        Ok(results)
    }

    /// Deletes a clan row.
    ///
    /// Roster and chat rows are removed by their own repositories; the foreign
    /// keys cascade as a fallback.
    ///
    /// # Returns
    /// - `Ok(true)` - Clan deleted
    /// - `Ok(false)` - No clan with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: ClanId) -> Result<bool, DbErr> {
        let result = entity::prelude::Clan::delete_by_id(id.0)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
