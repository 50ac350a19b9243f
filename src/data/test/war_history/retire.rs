use super::*;

async fn published(dir: &std::path::Path) -> Result<WarHistoryStore, AppError> {
    write_templates(dir, 1).unwrap();
    let store = WarHistoryStore::new(dir);
    store.prepare().await?;
    store.stage_template(1, "war-1").await?;
    store.publish("war-1").await?;
    Ok(store)
}

/// Tests archiving a replaced war.
///
/// Expected: the directory moves under the archive root
#[tokio::test]
async fn archive_moves_history() -> Result<(), AppError> {
    let dir = tempfile::tempdir().unwrap();
    let store = published(dir.path()).await?;

    store.retire("war-1", RetentionPolicy::Archive).await?;

    assert!(!store.history_exists("war-1").await);
    assert!(store.archive_dir("war-1").join("map1.json").is_file());

    Ok(())
}

/// Tests deleting and keeping a replaced war.
///
/// Expected: Delete removes the directory, Keep leaves it
#[tokio::test]
async fn delete_and_keep() -> Result<(), AppError> {
    let dir = tempfile::tempdir().unwrap();
    let store = published(dir.path()).await?;

    store.retire("war-1", RetentionPolicy::Keep).await?;
    assert!(store.history_exists("war-1").await);

    store.retire("war-1", RetentionPolicy::Delete).await?;
    assert!(!store.history_exists("war-1").await);
    assert!(!store.archive_dir("war-1").exists());

    Ok(())
}

/// Tests retiring a war that has no directory.
///
/// Expected: Ok without changes
#[tokio::test]
async fn missing_history_is_ignored() -> Result<(), AppError> {
    let dir = tempfile::tempdir().unwrap();
    let store = WarHistoryStore::new(dir.path());

    store.retire("war-9", RetentionPolicy::Archive).await?;

    assert!(!store.archive_dir("war-9").exists());

    Ok(())
}
