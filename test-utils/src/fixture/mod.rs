//! Test fixtures that write data to disk without touching the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture::war_template;
//!
//! let dir = tempfile::tempdir()?;
//! war_template::write_templates(dir.path(), 3)?;
//! ```

pub mod war_template;
