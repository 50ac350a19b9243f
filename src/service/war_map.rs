use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::{
    data::war_history::WarHistoryStore,
    error::{war::WarError, AppError},
    model::{
        id::ClanId,
        war::{MapId, WarMapRecord},
    },
    service::{lock::MutationLocks, war::current_war},
};

/// Map records of a clan's current war.
///
/// Lookups address the clan's current war entry whether or not its two day
/// window has elapsed. Both operations hold the clan's war lock for reading,
/// so a concurrent start cannot retire the war a record is being read from or
/// written to.
pub struct WarMapService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a MutationLocks,
    storage: &'a WarHistoryStore,
}

impl<'a> WarMapService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        locks: &'a MutationLocks,
        storage: &'a WarHistoryStore,
    ) -> Self {
        Self { db, locks, storage }
    }

    /// Reads one map record of the clan's current war.
    ///
    /// # Returns
    /// - `Ok(WarMapRecord)` - The stored record
    /// - `Err(AppError::WarErr(InvalidMapId))` - Map id is not a safe file stem
    /// - `Err(AppError::WarErr(NoActiveWar))` - The clan never started a war
    /// - `Err(AppError::WarErr(RecordMissing))` - The war has no record for this map
    /// - `Err(AppError::JsonErr)` - The stored record is corrupt
    pub async fn get(&self, clan_id: ClanId, map_id: &str) -> Result<WarMapRecord, AppError> {
        let map_id: MapId = map_id.parse()?;
        let _war_guard = self.locks.wars.read(clan_id).await;
        let war = current_war(self.db, clan_id).await?;

        self.storage
            .read_record(&war.war_id, &map_id)
            .await?
            .ok_or_else(|| {
                WarError::RecordMissing {
                    war_id: war.war_id.clone(),
                    map_id: map_id.to_string(),
                }
                .into()
            })
    }

    /// Replaces one map record of the clan's current war with `payload`.
    ///
    /// The stored `cnt` is always one less than the previous record's `cnt`
    /// (0 when there was none), whatever `cnt` the payload carries. A corrupt
    /// previous record counts as `cnt = 0`.
    ///
    /// # Returns
    /// - `Ok(WarMapRecord)` - The record as stored
    /// - `Err(AppError::WarErr(InvalidMapId))` - Map id is not a safe file stem
    /// - `Err(AppError::WarErr(NoActiveWar))` - The clan never started a war
    /// - `Err(AppError::IoErr)` - The record could not be written
    pub async fn update(
        &self,
        clan_id: ClanId,
        map_id: &str,
        payload: WarMapRecord,
    ) -> Result<WarMapRecord, AppError> {
        let map_id: MapId = map_id.parse()?;
        let _war_guard = self.locks.wars.read(clan_id).await;
        let war = current_war(self.db, clan_id).await?;

        let _map_guard = self
            .locks
            .war_maps
            .lock((war.war_id.clone(), map_id.clone()))
            .await;

        let previous_cnt = match self.storage.read_record(&war.war_id, &map_id).await {
            Ok(Some(previous)) => previous.cnt(),
            Ok(None) => 0,
            Err(AppError::JsonErr(e)) => {
                warn!(
                    "Corrupt record for map {} of war {}, resetting cnt: {}",
                    map_id, war.war_id, e
                );
                0
            }
            Err(e) => return Err(e),
        };

        let mut record = payload;
        record.set_cnt(previous_cnt - 1);

        self.storage
            .write_record(&war.war_id, &map_id, &record)
            .await?;

        info!(
            "Updated map {} of war {} for clan {} (cnt {})",
            map_id,
            war.war_id,
            clan_id,
            record.cnt()
        );

        Ok(record)
    }
}
