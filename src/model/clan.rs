//! Clan domain models and parameters.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::model::id::{ClanId, UserId};

/// Clan with its full member roster.
///
/// The owner is always part of `members`; the roster is ordered by join time.
#[derive(Debug, Clone, PartialEq)]
pub struct Clan {
    /// Unique clan identifier.
    pub id: ClanId,
    /// Unique clan name.
    pub name: String,
    /// User who created the clan.
    pub owner_id: UserId,
    /// Every member including the owner, in join order.
    pub members: Vec<UserId>,
    /// When the clan was created.
    pub created_at: NaiveDateTime,
}

impl Clan {
    /// Converts a clan entity and its member rows to a domain model at the
    /// repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The clan row
    /// - `members` - The clan's member rows, already ordered
    ///
    /// # Returns
    /// - `Clan` - The converted clan domain model
    pub fn from_entity(entity: entity::clan::Model, members: Vec<UserId>) -> Self {
        Self {
            id: ClanId(entity.id),
            name: entity.name,
            owner_id: UserId(entity.owner_id),
            members,
            created_at: entity.created_at,
        }
    }

    pub fn is_member(&self, user_id: UserId) -> bool {
        self.members.contains(&user_id)
    }

    pub fn is_owner(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

/// Search and listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClanSummary {
    pub id: ClanId,
    pub name: String,
    pub member_count: u64,
}

/// Name and size of a single clan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClanInfo {
    pub name: String,
    pub member_count: u64,
}

/// Parameters for creating a clan.
#[derive(Debug, Clone)]
pub struct CreateClanParam {
    /// Requested clan name; surrounding whitespace is trimmed.
    pub name: String,
    /// User who will own the clan and become its first member.
    pub owner_id: UserId,
}
