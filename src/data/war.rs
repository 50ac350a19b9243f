//! War summary repository.
//!
//! Persists the two halves of the war summary: the last issued war number and
//! the per-clan current war entry.

use chrono::NaiveDateTime;
use sea_orm::{sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::{id::ClanId, war::WarState};

/// The war sequence table holds exactly one row with this id.
const SEQUENCE_ROW_ID: i32 = 1;

pub struct WarRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WarRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the last issued war number, 0 when no war was ever started.
    pub async fn last_war_id(&self) -> Result<i64, DbErr> {
        let row = entity::prelude::WarSequence::find_by_id(SEQUENCE_ROW_ID)
            .one(self.db)
            .await?;
        Ok(row.map(|r| r.last_war_id).unwrap_or(0))
    }

    /// Persists the last issued war number.
    pub async fn set_last_war_id(&self, last_war_id: i64) -> Result<(), DbErr> {
        entity::prelude::WarSequence::insert(entity::war_sequence::ActiveModel {
            id: ActiveValue::Set(SEQUENCE_ROW_ID),
            last_war_id: ActiveValue::Set(last_war_id),
        })
        .on_conflict(
            OnConflict::column(entity::war_sequence::Column::Id)
                .update_column(entity::war_sequence::Column::LastWarId)
                .to_owned(),
        )
        .exec(self.db)
        .await?;
        Ok(())
    }

    /// Gets the war ids of every clan's current war.
    pub async fn get_all_war_ids(&self) -> Result<Vec<String>, DbErr> {
        let entries = entity::prelude::ClanWar::find().all(self.db).await?;
        Ok(entries.into_iter().map(|e| e.war_id).collect())
    }

    /// Finds a clan's current war entry.
    ///
    /// # Returns
    /// - `Ok(Some(WarState))` - The clan has started a war
    /// - `Ok(None)` - The clan never started a war
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_clan(&self, clan_id: ClanId) -> Result<Option<WarState>, DbErr> {
        let entity = entity::prelude::ClanWar::find_by_id(clan_id.0)
            .one(self.db)
            .await?;
        Ok(entity.map(WarState::from_entity))
    }

    /// Writes a clan's current war entry, replacing any previous one.
    pub async fn upsert(
        &self,
        clan_id: ClanId,
        war_id: &str,
        start_time: NaiveDateTime,
    ) -> Result<WarState, DbErr> {
        entity::prelude::ClanWar::insert(entity::clan_war::ActiveModel {
            clan_id: ActiveValue::Set(clan_id.0),
            war_id: ActiveValue::Set(war_id.to_string()),
            start_time: ActiveValue::Set(start_time),
        })
        .on_conflict(
            OnConflict::column(entity::clan_war::Column::ClanId)
                .update_columns([
                    entity::clan_war::Column::WarId,
                    entity::clan_war::Column::StartTime,
                ])
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(WarState {
            clan_id,
            war_id: war_id.to_string(),
            start_time,
        })
    }

    /// Removes a clan's current war entry.
    ///
    /// # Returns
    /// - `Ok(Some(WarState))` - The entry that was removed
    /// - `Ok(None)` - The clan had no war entry
    /// - `Err(DbErr)` - Database error
    pub async fn delete_by_clan(&self, clan_id: ClanId) -> Result<Option<WarState>, DbErr> {
        let Some(state) = self.find_by_clan(clan_id).await? else {
            return Ok(None);
        };

        entity::prelude::ClanWar::delete_by_id(clan_id.0)
            .exec(self.db)
            .await?;

        Ok(Some(state))
    }
}
