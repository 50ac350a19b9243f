//! Clan registry and roster management.
//!
//! `ClanService` owns clan creation, membership changes, and disbanding. Every
//! roster mutation runs under the clan's mutation lock, and multi-row changes
//! run inside a database transaction so a failure never leaves a partially
//! written roster.

use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};
use tracing::{debug, info, warn};

use crate::{
    data::{
        chat::ClanChatRepository, clan::ClanRepository, clan_member::ClanMemberRepository,
        war::WarRepository, war_history::WarHistoryStore,
    },
    error::{clan::ClanError, AppError},
    model::{
        clan::{Clan, ClanInfo, ClanSummary, CreateClanParam},
        id::{ClanId, UserId},
        war::RetentionPolicy,
    },
    service::{
        lock::MutationLocks,
        user_directory::{display_name_or_placeholder, UserDirectory},
    },
    util::time::now_local,
};

pub struct ClanService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a MutationLocks,
}

impl<'a> ClanService<'a> {
    /// Creates a new ClanService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `locks` - Shared mutation locks and id counters
    ///
    /// # Returns
    /// - `ClanService` - New service instance
    pub fn new(db: &'a DatabaseConnection, locks: &'a MutationLocks) -> Self {
        Self { db, locks }
    }

    /// Creates a clan owned by `param.owner_id`.
    ///
    /// The clan id is one past the highest existing clan id. The counter is
    /// seeded from storage on first use and after a disband. Creation is
    /// serialised so the name check and id allocation cannot race.
    ///
    /// # Returns
    /// - `Ok(Clan)` - The new clan with the owner as its only member
    /// - `Err(AppError::ClanErr(EmptyName))` - Name is blank
    /// - `Err(AppError::ClanErr(NameConflict))` - Name already taken
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateClanParam) -> Result<Clan, AppError> {
        let name = param.name.trim();
        if name.is_empty() {
            return Err(ClanError::EmptyName.into());
        }

        let mut sequence = self.locks.clan_ids.lock().await;

        let repo = ClanRepository::new(self.db);
        if repo.name_exists(name).await? {
            return Err(ClanError::NameConflict(name.to_string()).into());
        }

        let last = match sequence.last() {
            Some(last) => last,
            None => repo.max_id().await?.map(|id| i64::from(id.0)).unwrap_or(0),
        };
        let id = i32::try_from(last + 1)
            .map(ClanId)
            .map_err(|_| DbErr::Custom(format!("Clan id space exhausted after {}", last)))?;

        let txn = self.db.begin().await?;
        let clan = ClanRepository::new(&txn)
            .create(id, name, param.owner_id, now_local())
            .await?;
        txn.commit().await?;

        sequence.set(i64::from(id.0));

        info!("Created clan {} '{}' owned by {}", clan.id, clan.name, clan.owner_id);

        Ok(clan)
    }

    /// Finds a clan with its full roster.
    ///
    /// # Returns
    /// - `Ok(Clan)` - Clan found
    /// - `Err(AppError::ClanErr(NotFound))` - No clan with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn find(&self, clan_id: ClanId) -> Result<Clan, AppError> {
        ClanRepository::new(self.db)
            .find_by_id(clan_id)
            .await?
            .ok_or_else(|| ClanError::NotFound(clan_id).into())
    }

    /// Name and member count of a clan.
    pub async fn info(&self, clan_id: ClanId) -> Result<ClanInfo, AppError> {
        let clan = self.find(clan_id).await?;

        Ok(ClanInfo {
            name: clan.name,
            member_count: clan.members.len() as u64,
        })
    }

    /// Every clan in id order.
    pub async fn list(&self) -> Result<Vec<ClanSummary>, AppError> {
        Ok(ClanRepository::new(self.db)
            .get_all_with_member_counts()
            .await?)
    }

    /// Clans whose name contains `keyword`, ignoring case, in id order.
    ///
    /// An empty keyword matches every clan.
    pub async fn search(&self, keyword: &str) -> Result<Vec<ClanSummary>, AppError> {
        let keyword = keyword.to_lowercase();
        let clans = self.list().await?;

        debug!("Searching {} clans for '{}'", clans.len(), keyword);

        Ok(clans
            .into_iter()
            .filter(|clan| clan.name.to_lowercase().contains(&keyword))
            .collect())
    }

    /// Display names of a clan's members in join order.
    ///
    /// Unknown users are rendered as a `User{id}` placeholder.
    pub async fn members(
        &self,
        clan_id: ClanId,
        users: &dyn UserDirectory,
    ) -> Result<Vec<String>, AppError> {
        let clan = self.find(clan_id).await?;

        let mut names = Vec::with_capacity(clan.members.len());
        for member in clan.members {
            names.push(display_name_or_placeholder(users, member).await);
        }

        Ok(names)
    }

    /// Display name of a clan's owner.
    ///
    /// # Returns
    /// - `Ok(String)` - Owner's display name
    /// - `Err(AppError::ClanErr(NotFound))` - No clan with that id
    /// - `Err(AppError::ClanErr(OwnerNotFound))` - Owner unknown to the user directory
    pub async fn owner(
        &self,
        clan_id: ClanId,
        users: &dyn UserDirectory,
    ) -> Result<String, AppError> {
        let clan = self.find(clan_id).await?;

        users
            .display_name(clan.owner_id)
            .await
            .ok_or_else(|| {
                ClanError::OwnerNotFound {
                    clan_id,
                    owner_id: clan.owner_id,
                }
                .into()
            })
    }

    /// Adds a user to a clan's roster.
    ///
    /// # Returns
    /// - `Ok(())` - User joined
    /// - `Err(AppError::ClanErr(NotFound))` - No clan with that id
    /// - `Err(AppError::ClanErr(AlreadyMember))` - User already in the roster
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn join(&self, clan_id: ClanId, user_id: UserId) -> Result<(), AppError> {
        let _guard = self.locks.clans.lock(clan_id).await;

        if !ClanRepository::new(self.db).exists(clan_id).await? {
            return Err(ClanError::NotFound(clan_id).into());
        }

        let members = ClanMemberRepository::new(self.db);
        if members.is_member(clan_id, user_id).await? {
            return Err(ClanError::AlreadyMember { clan_id, user_id }.into());
        }

        members.add(clan_id, user_id, now_local()).await?;

        info!("User {} joined clan {}", user_id, clan_id);

        Ok(())
    }

    /// Removes a user from a clan's roster.
    ///
    /// # Returns
    /// - `Ok(())` - User left
    /// - `Err(AppError::ClanErr(NotFound))` - No clan with that id
    /// - `Err(AppError::ClanErr(OwnerCannotLeave))` - User owns the clan
    /// - `Err(AppError::ClanErr(NotMember))` - User not in the roster
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn leave(&self, clan_id: ClanId, user_id: UserId) -> Result<(), AppError> {
        let _guard = self.locks.clans.lock(clan_id).await;

        let clan = self.find(clan_id).await?;
        if clan.is_owner(user_id) {
            return Err(ClanError::OwnerCannotLeave(clan_id).into());
        }

        if !ClanMemberRepository::new(self.db)
            .remove(clan_id, user_id)
            .await?
        {
            return Err(ClanError::NotMember { clan_id, user_id }.into());
        }

        info!("User {} left clan {}", user_id, clan_id);

        Ok(())
    }

    /// Deletes a clan together with its roster, chat log and current war.
    ///
    /// Only the owner may disband. The war entry is removed in the same
    /// transaction as the clan, then `retention` is applied to the war's
    /// history directory. The clan id counter is reset, so the next clan gets
    /// `max(id) + 1` of the clans that remain, the same id it would get after
    /// a restart.
    ///
    /// # Returns
    /// - `Ok(())` - Clan deleted
    /// - `Err(AppError::ClanErr(NotFound))` - No clan with that id
    /// - `Err(AppError::ClanErr(NotOwner))` - User does not own the clan
    /// - `Err(AppError::DbErr)` - Database error; nothing was deleted
    pub async fn disband(
        &self,
        clan_id: ClanId,
        user_id: UserId,
        storage: &WarHistoryStore,
        retention: RetentionPolicy,
    ) -> Result<(), AppError> {
        let _clan_guard = self.locks.clans.lock(clan_id).await;
        let _war_guard = self.locks.wars.write(clan_id).await;

        let clan = self.find(clan_id).await?;
        if !clan.is_owner(user_id) {
            return Err(ClanError::NotOwner { clan_id, user_id }.into());
        }

        let mut sequence = self.locks.clan_ids.lock().await;

        let txn = self.db.begin().await?;
        let messages = ClanChatRepository::new(&txn).delete_by_clan(clan_id).await?;
        let members = ClanMemberRepository::new(&txn).delete_by_clan(clan_id).await?;
        let war = WarRepository::new(&txn).delete_by_clan(clan_id).await?;
        ClanRepository::new(&txn).delete(clan_id).await?;
        txn.commit().await?;

        sequence.clear();
        drop(sequence);

        info!(
            "Disbanded clan {} '{}' ({} members, {} messages removed)",
            clan_id, clan.name, members, messages
        );

        if let Some(war) = war {
            if let Err(e) = storage.retire(&war.war_id, retention).await {
                warn!(
                    "Failed to apply {:?} retention to war {} of disbanded clan {}: {}",
                    retention, war.war_id, clan_id, e
                );
            }
        }

        Ok(())
    }
}
