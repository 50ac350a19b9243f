use thiserror::Error;

use crate::model::id::{ClanId, UserId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClanError {
    /// No clan exists with the given id.
    #[error("Clan {0} not found")]
    NotFound(ClanId),

    /// Another clan already uses this name.
    #[error("A clan named '{0}' already exists")]
    NameConflict(String),

    /// The clan name is empty after trimming.
    #[error("Clan name must not be empty")]
    EmptyName,

    /// The user is already in the clan's roster.
    #[error("User {user_id} is already a member of clan {clan_id}")]
    AlreadyMember { clan_id: ClanId, user_id: UserId },

    /// The user is not in the clan's roster.
    #[error("User {user_id} is not a member of clan {clan_id}")]
    NotMember { clan_id: ClanId, user_id: UserId },

    /// The clan owner attempted to leave their own clan.
    #[error("The owner cannot leave clan {0}")]
    OwnerCannotLeave(ClanId),

    /// An owner-only action was requested by another user.
    #[error("User {user_id} is not the owner of clan {clan_id}")]
    NotOwner { clan_id: ClanId, user_id: UserId },

    /// The owner id stored on the clan cannot be resolved to a user.
    #[error("Owner {owner_id} of clan {clan_id} does not exist")]
    OwnerNotFound { clan_id: ClanId, owner_id: UserId },

    /// A chat message was empty after trimming.
    #[error("Message content must not be empty")]
    EmptyContent,
}
