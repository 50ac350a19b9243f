//! Application state shared across all callers.
//!
//! `AppState` is built once at startup and cloned into every request handler.
//! All fields are cheap to clone:
//! - `DatabaseConnection` is a connection pool (clones share the pool)
//! - `WarHistoryStore` is a root path
//! - `Arc<dyn UserDirectory>` is reference counted
//! - `MutationLocks` shares its lock tables and counters through `Arc`

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::{
    data::war_history::WarHistoryStore,
    service::{
        chat::ClanChatService,
        clan::ClanService,
        lock::MutationLocks,
        user_directory::UserDirectory,
        war::{WarService, WarSettings},
        war_map::WarMapService,
    },
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for clan, chat, and war summary tables.
    pub db: DatabaseConnection,

    /// Template and history directories of clan wars.
    pub war_storage: WarHistoryStore,

    /// Template count and retention policy applied on war start.
    pub war_settings: WarSettings,

    /// Display name lookup for chat senders and rosters.
    pub users: Arc<dyn UserDirectory>,

    /// Per-key mutation locks and id counters.
    ///
    /// Must be shared by every clone; two `AppState`s built separately over the
    /// same storage do not serialise against each other.
    pub locks: MutationLocks,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        war_storage: WarHistoryStore,
        war_settings: WarSettings,
        users: Arc<dyn UserDirectory>,
    ) -> Self {
        Self {
            db,
            war_storage,
            war_settings,
            users,
            locks: MutationLocks::new(),
        }
    }

    pub fn clans(&self) -> ClanService<'_> {
        ClanService::new(&self.db, &self.locks)
    }

    pub fn chat(&self) -> ClanChatService<'_> {
        ClanChatService::new(&self.db, &self.locks, self.users.as_ref())
    }

    pub fn wars(&self) -> WarService<'_> {
        WarService::new(&self.db, &self.locks, &self.war_storage, self.war_settings)
    }

    pub fn war_maps(&self) -> WarMapService<'_> {
        WarMapService::new(&self.db, &self.locks, &self.war_storage)
    }
}
