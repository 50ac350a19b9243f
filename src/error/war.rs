use thiserror::Error;

use crate::model::id::ClanId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WarError {
    /// The clan has never started a war.
    #[error("Clan {0} has not started a war")]
    NoActiveWar(ClanId),

    /// The clan's current war is past its duration window.
    #[error("War {war_id} of clan {clan_id} has ended")]
    Expired { clan_id: ClanId, war_id: String },

    /// The randomly selected template directory does not exist.
    #[error("War template not found: {0}")]
    TemplateMissing(String),

    /// The history directory for a freshly allocated war id already exists.
    ///
    /// War ids are never reused, so this indicates storage was modified
    /// outside the application.
    #[error("War history directory already exists: {0}")]
    HistoryCollision(String),

    /// The current war's history directory is gone.
    #[error("War history directory not found: {0}")]
    HistoryMissing(String),

    /// The requested map has no record in the current war.
    #[error("Map '{map_id}' not found in war {war_id}")]
    RecordMissing { war_id: String, map_id: String },

    /// The map id cannot be used as a record file name.
    #[error("Invalid map id '{0}'")]
    InvalidMapId(String),
}
