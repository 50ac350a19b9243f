//! Clan factory for creating test clan entities.

use crate::factory::helpers::next_id;
use chrono::{Local, Timelike};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clans with customizable fields.
///
/// By default the owner is also inserted into the roster, matching what the
/// clan service does on creation.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::clan::ClanFactory;
///
/// let clan = ClanFactory::new(&db)
///     .id(7)
///     .name("Alpha")
///     .owner_id(42)
///     .build()
///     .await?;
/// ```
pub struct ClanFactory<'a> {
    db: &'a DatabaseConnection,
    id: i32,
    name: String,
    owner_id: i64,
    owner_member: bool,
    created_at: chrono::NaiveDateTime,
}

impl<'a> ClanFactory<'a> {
    /// Creates a new ClanFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented
    /// - name: `"Clan {id}"`
    /// - owner_id: auto-incremented
    /// - created_at: now, whole seconds
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ClanFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = Local::now().naive_local();
        Self {
            db,
            id: id as i32,
            name: format!("Clan {}", id),
            owner_id: next_id() as i64,
            owner_member: true,
            created_at: now.with_nanosecond(0).unwrap_or(now),
        }
    }

    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn owner_id(mut self, owner_id: i64) -> Self {
        self.owner_id = owner_id;
        self
    }

    /// Skips inserting the owner's roster row.
    pub fn without_owner_member(mut self) -> Self {
        self.owner_member = false;
        self
    }

    /// Builds and inserts the clan entity into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created clan entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::clan::Model, DbErr> {
        let clan = entity::clan::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            owner_id: ActiveValue::Set(self.owner_id),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await?;

        if self.owner_member {
            crate::factory::clan_member::ClanMemberFactory::new(self.db, clan.id, clan.owner_id)
                .joined_at(self.created_at)
                .build()
                .await?;
        }

        Ok(clan)
    }
}

/// Creates a clan with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - The created clan entity
/// - `Err(DbErr)` - Database error during insertion
pub async fn create_clan(db: &DatabaseConnection) -> Result<entity::clan::Model, DbErr> {
    ClanFactory::new(db).build().await
}
