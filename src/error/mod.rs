//! Error types.
//!
//! `AppError` is the top-level error returned by every service operation. Domain
//! failures (`ClanError`, `WarError`) are the typed outcomes callers are expected
//! to branch on; the remaining variants wrap storage and infrastructure failures.

pub mod clan;
pub mod config;
pub mod internal;
pub mod war;

use thiserror::Error;

use crate::error::{clan::ClanError, config::ConfigError, internal::InternalError, war::WarError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion so services can
/// propagate with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Clan, membership, or chat rule violation.
    #[error(transparent)]
    ClanErr(#[from] ClanError),

    /// Clan war lifecycle or war map failure.
    #[error(transparent)]
    WarErr(#[from] WarError),

    /// Unexpected internal state, e.g. a stored identifier that no longer parses.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Filesystem error while reading or writing war storage.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed JSON in a war map record or user directory file.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// A blocking storage task panicked or was cancelled.
    #[error(transparent)]
    TaskErr(#[from] tokio::task::JoinError),
}

impl AppError {
    /// Whether the failure was caused by the request (a typed domain outcome)
    /// rather than by storage or configuration.
    ///
    /// # Returns
    /// - `true` - Clan or war rule violation
    /// - `false` - Storage, configuration, or internal failure
    pub fn is_domain_error(&self) -> bool {
        matches!(self, Self::ClanErr(_) | Self::WarErr(_))
    }
}
