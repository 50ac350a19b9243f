use super::*;

/// Tests writing then reading a record, creating the directory on demand.
///
/// Expected: the stored record equals the written one
#[tokio::test]
async fn writes_and_reads_record() -> Result<(), AppError> {
    let dir = tempfile::tempdir().unwrap();
    let store = WarHistoryStore::new(dir.path());
    let map_id: MapId = "map1".parse()?;
    let record: WarMapRecord =
        serde_json::from_value(json!({"stars": 1, "cnt": -1, "layout": {"w": 3}})).unwrap();

    assert!(store.read_record("war-7", &map_id).await?.is_none());

    store.write_record("war-7", &map_id, &record).await?;

    assert_eq!(store.read_record("war-7", &map_id).await?, Some(record));
    assert!(!store.history_dir("war-7").join("map1.json.tmp").exists());

    Ok(())
}

/// Tests reading a corrupt record.
///
/// Expected: Err(JsonErr)
#[tokio::test]
async fn corrupt_record_is_an_error() -> Result<(), AppError> {
    let dir = tempfile::tempdir().unwrap();
    let store = WarHistoryStore::new(dir.path());
    std::fs::create_dir_all(store.history_dir("war-1")).unwrap();
    std::fs::write(store.history_dir("war-1").join("map1.json"), "{").unwrap();

    let result = store.read_record("war-1", &"map1".parse::<MapId>()?).await;

    assert!(matches!(result, Err(AppError::JsonErr(_))));

    Ok(())
}
