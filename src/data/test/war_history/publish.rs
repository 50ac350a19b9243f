use super::*;

/// Tests publishing a staged copy.
///
/// Expected: the history directory holds the template files
#[tokio::test]
async fn publishes_staged_copy() -> Result<(), AppError> {
    let dir = tempfile::tempdir().unwrap();
    write_templates(dir.path(), 1).unwrap();
    let store = WarHistoryStore::new(dir.path());
    store.prepare().await?;

    let staged = store.stage_template(1, "war-1").await?;
    let history = store.publish("war-1").await?;

    assert_eq!(history, store.history_dir("war-1"));
    assert!(history.join("map2.json").is_file());
    assert!(!staged.exists());

    Ok(())
}

/// Tests publishing onto an existing history directory.
///
/// Expected: Err(HistoryCollision) and the existing directory is untouched
#[tokio::test]
async fn refuses_to_overwrite_history() -> Result<(), AppError> {
    let dir = tempfile::tempdir().unwrap();
    write_templates(dir.path(), 1).unwrap();
    let store = WarHistoryStore::new(dir.path());
    std::fs::create_dir_all(store.history_dir("war-1")).unwrap();
    std::fs::write(store.history_dir("war-1").join("keep.json"), "{}").unwrap();

    store.stage_template(1, "war-1").await?;
    let result = store.publish("war-1").await;

    assert!(matches!(
        result,
        Err(AppError::WarErr(WarError::HistoryCollision(_)))
    ));
    assert!(store.history_dir("war-1").join("keep.json").is_file());

    store.discard("war-1").await?;
    assert!(!store.history_exists("war-1").await);

    Ok(())
}
