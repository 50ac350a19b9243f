//! Clan war lifecycle.
//!
//! A clan has at most one current war. Starting a war allocates a globally
//! unique war number, copies a randomly chosen map template into a staging
//! directory and then, inside one database transaction, records the clan's new
//! war entry and publishes the staged copy as the war's history directory. The
//! history of the war being replaced is handled by the configured
//! `RetentionPolicy`.

use chrono::NaiveDateTime;
use rand::Rng;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::{
    data::{war::WarRepository, war_history::WarHistoryStore},
    error::{war::WarError, AppError},
    model::{
        id::ClanId,
        war::{war_id_for, war_number, RetentionPolicy, WarOverview, WarStart, WarState},
    },
    service::lock::MutationLocks,
    util::time::now_local,
};

/// Template selection and retention settings for war starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarSettings {
    /// Templates are numbered `1..=template_count`.
    pub template_count: u32,
    pub retention: RetentionPolicy,
}

impl Default for WarSettings {
    fn default() -> Self {
        Self {
            template_count: 3,
            retention: RetentionPolicy::default(),
        }
    }
}

/// Gets a clan's current war entry without checking expiry.
pub(crate) async fn current_war<C: ConnectionTrait>(
    db: &C,
    clan_id: ClanId,
) -> Result<WarState, AppError> {
    WarRepository::new(db)
        .find_by_clan(clan_id)
        .await?
        .ok_or_else(|| WarError::NoActiveWar(clan_id).into())
}

pub struct WarService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a MutationLocks,
    storage: &'a WarHistoryStore,
    settings: WarSettings,
}

impl<'a> WarService<'a> {
    /// Creates a new WarService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `locks` - Shared mutation locks and id counters
    /// - `storage` - War template and history directories
    /// - `settings` - Template count and retention policy
    ///
    /// # Returns
    /// - `WarService` - New service instance
    pub fn new(
        db: &'a DatabaseConnection,
        locks: &'a MutationLocks,
        storage: &'a WarHistoryStore,
        settings: WarSettings,
    ) -> Self {
        Self {
            db,
            locks,
            storage,
            settings,
        }
    }

    /// Starts a new war for a clan, replacing its current one.
    ///
    /// The war number is persisted before the template is copied and is never
    /// reused, even if the start fails afterwards. Either both the clan's war
    /// entry and the history directory exist afterwards, or neither does.
    ///
    /// # Returns
    /// - `Ok(WarStart)` - War id, history directory, and start time
    /// - `Err(AppError::WarErr(TemplateMissing))` - Chosen template directory absent
    /// - `Err(AppError::WarErr(HistoryCollision))` - History for the new id already exists
    /// - `Err(AppError::DbErr)` / `Err(AppError::IoErr)` - Storage failure; nothing recorded
    pub async fn start(&self, clan_id: ClanId) -> Result<WarStart, AppError> {
        let _guard = self.locks.wars.write(clan_id).await;

        let template = rand::rng().random_range(1..=self.settings.template_count.max(1));
        let war_id = war_id_for(self.allocate_war_number().await?);

        if self.storage.history_exists(&war_id).await {
            return Err(WarError::HistoryCollision(
                self.storage.history_dir(&war_id).display().to_string(),
            )
            .into());
        }

        let previous = WarRepository::new(self.db).find_by_clan(clan_id).await?;

        self.storage.stage_template(template, &war_id).await?;

        let start_time = now_local();
        let history_path = match self.commit_start(clan_id, &war_id, start_time).await {
            Ok(path) => path,
            Err(e) => {
                if let Err(cleanup) = self.storage.discard(&war_id).await {
                    warn!("Failed to clean up aborted war {}: {}", war_id, cleanup);
                }
                return Err(e);
            }
        };

        info!(
            "Clan {} started war {} from template {}",
            clan_id, war_id, template
        );

        if let Some(previous) = previous {
            if let Err(e) = self
                .storage
                .retire(&previous.war_id, self.settings.retention)
                .await
            {
                warn!(
                    "Failed to apply {:?} retention to war {}: {}",
                    self.settings.retention, previous.war_id, e
                );
            }
        }

        Ok(WarStart {
            war_id,
            history_path,
            start_time,
        })
    }

    /// Gets a clan's current war entry, expired or not.
    ///
    /// # Returns
    /// - `Ok(WarState)` - The clan's current war
    /// - `Err(AppError::WarErr(NoActiveWar))` - The clan never started a war
    pub async fn current(&self, clan_id: ClanId) -> Result<WarState, AppError> {
        current_war(self.db, clan_id).await
    }

    /// Aggregates `{stars, cnt}` per map of the clan's active war.
    ///
    /// # Returns
    /// - `Ok(WarOverview)` - Tallies keyed by map id
    /// - `Err(AppError::WarErr(NoActiveWar))` - The clan never started a war
    /// - `Err(AppError::WarErr(Expired))` - The war's two day window has elapsed
    /// - `Err(AppError::WarErr(HistoryMissing))` - The war's directory is gone
    pub async fn overview(&self, clan_id: ClanId) -> Result<WarOverview, AppError> {
        let war = self.current(clan_id).await?;

        if war.is_expired_at(now_local()) {
            return Err(WarError::Expired {
                clan_id,
                war_id: war.war_id,
            }
            .into());
        }

        debug!("Reading overview of war {} for clan {}", war.war_id, clan_id);

        self.storage.read_overview(&war.war_id).await
    }

    async fn commit_start(
        &self,
        clan_id: ClanId,
        war_id: &str,
        start_time: NaiveDateTime,
    ) -> Result<PathBuf, AppError> {
        let txn = self.db.begin().await?;

        WarRepository::new(&txn)
            .upsert(clan_id, war_id, start_time)
            .await?;
        let history_path = self.storage.publish(war_id).await?;

        txn.commit().await?;

        Ok(history_path)
    }

    /// Allocates and persists the next war number.
    async fn allocate_war_number(&self) -> Result<i64, AppError> {
        let mut sequence = self.locks.war_ids.lock().await;

        let last = match sequence.last() {
            Some(last) => last,
            None => self.seed_war_number().await?,
        };
        let next = last + 1;

        WarRepository::new(self.db).set_last_war_id(next).await?;
        sequence.set(next);

        Ok(next)
    }

    /// Highest war number known to storage, from the sequence row or any
    /// clan's current war.
    async fn seed_war_number(&self) -> Result<i64, AppError> {
        let repo = WarRepository::new(self.db);

        let mut last = repo.last_war_id().await?;
        for war_id in repo.get_all_war_ids().await? {
            last = last.max(war_number(&war_id)?);
        }

        Ok(last)
    }
}
