use super::*;

/// Tests aggregating a freshly published war.
///
/// Expected: one tally per map file, keyed by file stem
#[tokio::test]
async fn tallies_every_map() -> Result<(), AppError> {
    let dir = tempfile::tempdir().unwrap();
    write_templates(dir.path(), 1).unwrap();
    let store = WarHistoryStore::new(dir.path());
    store.stage_template(1, "war-1").await?;
    store.publish("war-1").await?;

    let overview = store.read_overview("war-1").await?;

    assert_eq!(overview.len(), 3);
    assert_eq!(
        overview.get("map1"),
        Some(&MapTally {
            stars: 0,
            cnt: STANDARD_CNT,
        })
    );

    Ok(())
}

/// Tests that unreadable records degrade instead of failing.
///
/// Expected: non-object or corrupt files count as {0, 0}; other extensions
/// are skipped
#[tokio::test]
async fn degrades_unreadable_records() -> Result<(), AppError> {
    let dir = tempfile::tempdir().unwrap();
    write_template(
        dir.path(),
        1,
        &[
            ("good", json!({"stars": 4.9, "cnt": -2})),
            ("list", json!([1, 2, 3])),
        ],
    )
    .unwrap();
    std::fs::write(dir.path().join("template/1/bad.json"), "not json").unwrap();
    std::fs::write(dir.path().join("template/1/readme.md"), "# maps").unwrap();
    let store = WarHistoryStore::new(dir.path());
    store.stage_template(1, "war-1").await?;
    store.publish("war-1").await?;

    let overview = store.read_overview("war-1").await?;

    let keys: Vec<_> = overview.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["bad", "good", "list"]);
    assert_eq!(overview["good"], MapTally { stars: 4, cnt: -2 });
    assert_eq!(overview["bad"], MapTally::default());
    assert_eq!(overview["list"], MapTally::default());

    Ok(())
}

/// Tests reading a war whose directory is gone.
///
/// Expected: Err(HistoryMissing)
#[tokio::test]
async fn fails_for_missing_history() -> Result<(), AppError> {
    let dir = tempfile::tempdir().unwrap();
    let store = WarHistoryStore::new(dir.path());

    let result = store.read_overview("war-1").await;

    assert!(matches!(
        result,
        Err(AppError::WarErr(WarError::HistoryMissing(_)))
    ));

    Ok(())
}
