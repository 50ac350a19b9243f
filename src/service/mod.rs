//! Service layer for business logic and orchestration.
//!
//! Services sit on top of the data layer. They enforce membership, ownership
//! and war lifecycle rules, serialise mutations through the shared
//! `MutationLocks`, and return `AppError` so callers get typed domain failures.

pub mod chat;
pub mod clan;
pub mod lock;
pub mod user_directory;
pub mod war;
pub mod war_map;
