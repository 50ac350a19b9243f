//! Clanwar Test Utils
//!
//! Provides shared testing utilities for the clanwar crate: in-memory SQLite
//! contexts with the clan and war tables, factories for inserting rows, and
//! fixtures that lay out war template directories on disk.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Row factories with sensible defaults
//! - **fixture**: War template directories written into temp dirs
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_clan_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_clan_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
