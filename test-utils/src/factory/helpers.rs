//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a clan owned by `owner_id` with `members` joined after the owner.
///
/// # Arguments
/// - `db` - Database connection
/// - `owner_id` - Owner of the clan, added to the roster first
/// - `members` - Further members in join order
///
/// # Returns
/// - `Ok((clan, roster))` - The clan and every roster row including the owner's
/// - `Err(DbErr)` - Database error during creation
pub async fn create_clan_with_members(
    db: &DatabaseConnection,
    owner_id: i64,
    members: &[i64],
) -> Result<(entity::clan::Model, Vec<entity::clan_member::Model>), DbErr> {
    let clan = crate::factory::clan::ClanFactory::new(db)
        .owner_id(owner_id)
        .without_owner_member()
        .build()
        .await?;

    let mut roster = Vec::with_capacity(members.len() + 1);
    roster.push(crate::factory::clan_member::create_clan_member(db, clan.id, owner_id).await?);
    for member in members {
        roster.push(crate::factory::clan_member::create_clan_member(db, clan.id, *member).await?);
    }

    Ok((clan, roster))
}
