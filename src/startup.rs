use sea_orm::DatabaseConnection;
use std::{sync::Arc, time::Duration};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    data::war_history::WarHistoryStore,
    error::AppError,
    service::{lock::prune_periodically, user_directory::JsonUserDirectory, war::WarSettings},
    state::AppState,
};

/// Installs the global `tracing` subscriber.
///
/// Filtering follows `RUST_LOG` and defaults to `info`. Calling it more than
/// once is harmless; only the first subscriber is installed.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the clan and war
/// tables are up to date before any service touches them.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Prepares the war storage root.
///
/// Creates the history and archive directories and removes staging copies
/// left behind by a war start that was interrupted. Template directories are
/// provisioned externally and only checked for when a war starts.
///
/// # Returns
/// - `Ok(WarHistoryStore)` - Store rooted at the configured directory
/// - `Err(AppError::IoErr)` - Directories could not be created or listed
pub async fn prepare_war_storage(config: &Config) -> Result<WarHistoryStore, AppError> {
    let storage = WarHistoryStore::new(&config.war_storage_dir);

    let removed = storage.prepare().await?;
    info!(
        "War storage ready at {:?} ({} stale staging directories removed)",
        storage.root(),
        removed
    );

    Ok(storage)
}

/// Interval at which idle per-key lock entries are dropped.
const LOCK_PRUNE_INTERVAL: Duration = Duration::from_secs(300);

/// Builds the shared application state from configuration.
///
/// Also spawns the background task that prunes idle lock entries, so this must
/// run inside a Tokio runtime.
pub async fn build_state(config: &Config) -> Result<AppState, AppError> {
    let db = connect_to_database(config).await?;
    let war_storage = prepare_war_storage(config).await?;
    let users = Arc::new(JsonUserDirectory::new(&config.users_file));

    let state = AppState::new(
        db,
        war_storage,
        WarSettings {
            template_count: config.war_template_count,
            retention: config.war_retention,
        },
        users,
    );

    tokio::spawn(prune_periodically(state.locks.clone(), LOCK_PRUNE_INTERVAL));

    Ok(state)
}
