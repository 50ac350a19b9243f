//! Filesystem store for war templates and per-war history directories.
//!
//! Layout under the war storage root:
//!
//! ```text
//! template/<n>/<map_id>.json      read-only map templates, n in 1..=count
//! history/<war_id>/<map_id>.json  mutable records of a war
//! history/.staging-<war_id>/      template copy awaiting publication
//! archive/<war_id>/               retired history of replaced wars
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{
    error::{war::WarError, AppError},
    model::war::{MapId, MapTally, RetentionPolicy, WarMapRecord, WarOverview},
    util::fs::{copy_dir_all, remove_dir_if_exists, write_atomic},
};

const TEMPLATE_DIR: &str = "template";
const HISTORY_DIR: &str = "history";
const ARCHIVE_DIR: &str = "archive";
const STAGING_PREFIX: &str = ".staging-";
const RECORD_EXTENSION: &str = "json";

/// Store for war template and history directories rooted at one path.
#[derive(Debug, Clone)]
pub struct WarHistoryStore {
    root: PathBuf,
}

impl WarHistoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn template_dir(&self, template: u32) -> PathBuf {
        self.root.join(TEMPLATE_DIR).join(template.to_string())
    }

    pub fn history_dir(&self, war_id: &str) -> PathBuf {
        self.root.join(HISTORY_DIR).join(war_id)
    }

    pub fn archive_dir(&self, war_id: &str) -> PathBuf {
        self.root.join(ARCHIVE_DIR).join(war_id)
    }

    fn staging_dir(&self, war_id: &str) -> PathBuf {
        self.root
            .join(HISTORY_DIR)
            .join(format!("{STAGING_PREFIX}{war_id}"))
    }

    fn record_path(&self, war_id: &str, map_id: &MapId) -> PathBuf {
        self.history_dir(war_id).join(map_id.file_name())
    }

    /// Creates the history and archive roots and removes staging directories
    /// left behind by an interrupted war start.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of stale staging directories removed
    /// - `Err(AppError::IoErr)` - Directories could not be created or listed
    pub async fn prepare(&self) -> Result<usize, AppError> {
        let history_root = self.root.join(HISTORY_DIR);
        tokio::fs::create_dir_all(&history_root).await?;
        tokio::fs::create_dir_all(self.root.join(ARCHIVE_DIR)).await?;

        let mut removed = 0;
        let mut entries = tokio::fs::read_dir(&history_root).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            if name.to_string_lossy().starts_with(STAGING_PREFIX) {
                warn!("Removing stale war staging directory {:?}", entry.path());
                remove_dir_if_exists(&entry.path()).await?;
                removed += 1;
            }
        }

        Ok(removed)
    }

    /// Whether a war already has a published history directory.
    pub async fn history_exists(&self, war_id: &str) -> bool {
        is_dir(&self.history_dir(war_id)).await
    }

    /// Copies a template into the staging directory of `war_id`.
    ///
    /// The copy runs on the blocking pool. A partially written staging
    /// directory is removed before the error is returned.
    ///
    /// # Arguments
    /// - `template` - Template number
    /// - `war_id` - War the staged copy belongs to
    ///
    /// # Returns
    /// - `Ok(PathBuf)` - Path of the staged copy
    /// - `Err(AppError::WarErr(TemplateMissing))` - Template directory absent
    /// - `Err(AppError::IoErr)` - Copy failed
    pub async fn stage_template(&self, template: u32, war_id: &str) -> Result<PathBuf, AppError> {
        let source = self.template_dir(template);
        if !is_dir(&source).await {
            return Err(WarError::TemplateMissing(source.display().to_string()).into());
        }

        let staging = self.staging_dir(war_id);
        remove_dir_if_exists(&staging).await?;

        let dst = staging.clone();
        let copied = tokio::task::spawn_blocking(move || copy_dir_all(&source, &dst)).await?;
        if let Err(e) = copied {
            remove_dir_if_exists(&staging).await?;
            return Err(e.into());
        }

        debug!("Staged template {} for {}", template, war_id);

        Ok(staging)
    }

    /// Publishes the staged copy of `war_id` as its history directory.
    ///
    /// # Returns
    /// - `Ok(PathBuf)` - Path of the published history directory
    /// - `Err(AppError::WarErr(HistoryCollision))` - Destination already exists
    /// - `Err(AppError::IoErr)` - Rename failed
    pub async fn publish(&self, war_id: &str) -> Result<PathBuf, AppError> {
        let history = self.history_dir(war_id);
        if is_dir(&history).await {
            return Err(WarError::HistoryCollision(history.display().to_string()).into());
        }

        tokio::fs::rename(self.staging_dir(war_id), &history).await?;

        Ok(history)
    }

    /// Removes the staged and published directories of a war whose start
    /// failed.
    pub async fn discard(&self, war_id: &str) -> Result<(), AppError> {
        remove_dir_if_exists(&self.staging_dir(war_id)).await?;
        remove_dir_if_exists(&self.history_dir(war_id)).await?;
        Ok(())
    }

    /// Applies the retention policy to the history directory of a replaced war.
    ///
    /// A missing directory is not an error. When archiving would overwrite an
    /// existing archive entry, the history directory is left in place.
    pub async fn retire(&self, war_id: &str, policy: RetentionPolicy) -> Result<(), AppError> {
        let history = self.history_dir(war_id);
        if !is_dir(&history).await {
            return Ok(());
        }

        match policy {
            RetentionPolicy::Keep => {}
            RetentionPolicy::Delete => {
                remove_dir_if_exists(&history).await?;
                info!("Deleted history of replaced war {}", war_id);
            }
            RetentionPolicy::Archive => {
                let archive = self.archive_dir(war_id);
                if is_dir(&archive).await {
                    warn!(
                        "Archive for war {} already exists, keeping history in place",
                        war_id
                    );
                    return Ok(());
                }

                tokio::fs::create_dir_all(self.root.join(ARCHIVE_DIR)).await?;
                tokio::fs::rename(&history, &archive).await?;
                info!("Archived history of replaced war {}", war_id);
            }
        }

        Ok(())
    }

    /// Aggregates `{stars, cnt}` for every map record of a war.
    ///
    /// Only `*.json` files count; the map id is the file stem. A record that
    /// cannot be read or parsed contributes `{0, 0}` and is logged.
    ///
    /// # Returns
    /// - `Ok(WarOverview)` - Tallies keyed by map id
    /// - `Err(AppError::WarErr(HistoryMissing))` - History directory absent
    /// - `Err(AppError::IoErr)` - Directory could not be listed
    pub async fn read_overview(&self, war_id: &str) -> Result<WarOverview, AppError> {
        let history = self.history_dir(war_id);
        if !is_dir(&history).await {
            return Err(WarError::HistoryMissing(history.display().to_string()).into());
        }

        let mut overview = WarOverview::new();
        let mut entries = tokio::fs::read_dir(&history).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let Some(map_id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let tally = match read_json::<WarMapRecord>(&path).await {
                Ok(record) => record.tally(),
                Err(e) => {
                    warn!("Unreadable war map record {:?}: {}", path, e);
                    MapTally::default()
                }
            };
            overview.insert(map_id.to_string(), tally);
        }

        Ok(overview)
    }

    /// Reads one map record of a war.
    ///
    /// # Returns
    /// - `Ok(Some(WarMapRecord))` - Record found
    /// - `Ok(None)` - No record file for this map
    /// - `Err(AppError::JsonErr)` - Record exists but is not a JSON object
    /// - `Err(AppError::IoErr)` - Record could not be read
    pub async fn read_record(
        &self,
        war_id: &str,
        map_id: &MapId,
    ) -> Result<Option<WarMapRecord>, AppError> {
        let path = self.record_path(war_id, map_id);
        match read_json::<WarMapRecord>(&path).await {
            Ok(record) => Ok(Some(record)),
            Err(AppError::IoErr(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Writes one map record of a war atomically, creating the history
    /// directory if it is missing.
    pub async fn write_record(
        &self,
        war_id: &str,
        map_id: &MapId,
        record: &WarMapRecord,
    ) -> Result<(), AppError> {
        tokio::fs::create_dir_all(self.history_dir(war_id)).await?;

        let bytes = serde_json::to_vec_pretty(record)?;
        write_atomic(&self.record_path(war_id, map_id), &bytes).await?;

        Ok(())
    }
}

async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
