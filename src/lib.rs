//! Clan and clan war backend.
//!
//! This crate owns persistent clan state (rosters, ownership, chat) and the
//! time-boxed clan wars layered on top of it. It is consumed by a thin request
//! layer that normalises identifiers and maps errors to responses.
//!
//! # Architecture
//!
//! The crate follows a layered architecture:
//!
//! - **Service Layer** (`service/`) - Business rules, authorization checks and per-key serialization
//! - **Data Layer** (`data/`) - Database repositories and the war history filesystem store
//! - **Model Layer** (`model/`) - Domain models and normalised identifier types
//! - **Error Layer** (`error/`) - Typed failures reported back to callers
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Shared state (DB pool, locks, counters, war storage)
//! - **Startup** (`startup`) - Logging, database, and war storage initialization
//!
//! # Request Flow
//!
//! 1. The caller resolves the target clan or war through a service
//! 2. The service takes the entity's mutation lock and authorizes the action
//! 3. Repositories read and write the database or war history directory
//! 4. The service returns a domain model or a typed `AppError`

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
