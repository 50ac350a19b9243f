//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let clan = factory::clan::create_clan(&db).await?;
//!
//!     // Create with a roster
//!     let (clan, members) = factory::helpers::create_clan_with_members(&db, 1, &[2, 3]).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `clan` - Create clans (the owner is added to the roster)
//! - `clan_member` - Create roster rows
//! - `clan_chat_message` - Create chat messages
//! - `clan_war` - Create war summary entries
//! - `helpers` - Id generation and multi-entity helpers

pub mod clan;
pub mod clan_chat_message;
pub mod clan_member;
pub mod clan_war;
pub mod helpers;

pub use clan::create_clan;
pub use clan_chat_message::create_chat_message;
pub use clan_member::create_clan_member;
pub use clan_war::create_clan_war;
