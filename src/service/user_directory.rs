//! Display name lookup for user ids.
//!
//! User accounts are owned by another part of the system. The clan services only
//! need to turn a user id into a display name, so they depend on the
//! `UserDirectory` trait rather than on a concrete store.

use async_trait::async_trait;
use serde::Deserialize;
use std::{collections::HashMap, path::Path};
use tracing::warn;

use crate::{error::AppError, model::id::UserId};

/// Resolves user ids to display names.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Display name of `user_id`, or `None` if the user is unknown.
    async fn display_name(&self, user_id: UserId) -> Option<String>;
}

/// Placeholder rendered for users the directory cannot resolve.
pub fn placeholder_name(user_id: UserId) -> String {
    format!("User{}", user_id)
}

/// Resolves a display name, falling back to [`placeholder_name`].
pub async fn display_name_or_placeholder(users: &dyn UserDirectory, user_id: UserId) -> String {
    match users.display_name(user_id).await {
        Some(name) => name,
        None => placeholder_name(user_id),
    }
}

#[derive(Deserialize)]
struct UsersFile {
    #[serde(default)]
    users: Vec<UserEntry>,
}

#[derive(Deserialize)]
struct UserEntry {
    id: UserId,
    name: String,
}

/// User directory backed by a `users.json` file of the account service.
///
/// The file is read on every lookup so renames and registrations made by the
/// account service are visible without a restart. A missing or corrupt file is
/// treated as an empty directory.
pub struct JsonUserDirectory {
    path: std::path::PathBuf,
}

impl JsonUserDirectory {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> HashMap<UserId, String> {
        match read_users(&self.path).await {
            Ok(file) => file
                .users
                .into_iter()
                .map(|user| (user.id, user.name))
                .collect(),
            Err(e) => {
                warn!(
                    "Failed to read user directory {:?}, treating it as empty: {}",
                    self.path, e
                );
                HashMap::new()
            }
        }
    }
}

async fn read_users(path: &Path) -> Result<UsersFile, AppError> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait]
impl UserDirectory for JsonUserDirectory {
    async fn display_name(&self, user_id: UserId) -> Option<String> {
        self.load().await.remove(&user_id)
    }
}

/// In-process user directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserDirectory {
    names: HashMap<UserId, String>,
}

impl MemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user_id: UserId, name: impl Into<String>) -> Self {
        self.names.insert(user_id, name.into());
        self
    }
}

#[async_trait]
impl UserDirectory for MemoryUserDirectory {
    async fn display_name(&self, user_id: UserId) -> Option<String> {
        self.names.get(&user_id).cloned()
    }
}
