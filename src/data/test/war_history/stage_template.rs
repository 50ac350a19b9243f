use super::*;

/// Tests copying a template into staging.
///
/// Expected: Ok with every map file copied and nothing published yet
#[tokio::test]
async fn copies_template_into_staging() -> Result<(), AppError> {
    let dir = tempfile::tempdir().unwrap();
    write_templates(dir.path(), 2).unwrap();
    std::fs::create_dir_all(dir.path().join("template/2/extra")).unwrap();
    std::fs::write(dir.path().join("template/2/extra/notes.txt"), "x").unwrap();
    let store = WarHistoryStore::new(dir.path());

    let staged = store.stage_template(2, "war-5").await?;

    assert!(staged.join("map1.json").is_file());
    assert!(staged.join("extra/notes.txt").is_file());
    assert!(!store.history_exists("war-5").await);

    Ok(())
}

/// Tests staging from a template that does not exist.
///
/// Expected: Err(TemplateMissing)
#[tokio::test]
async fn fails_for_missing_template() -> Result<(), AppError> {
    let dir = tempfile::tempdir().unwrap();
    let store = WarHistoryStore::new(dir.path());

    let result = store.stage_template(1, "war-1").await;

    assert!(matches!(
        result,
        Err(AppError::WarErr(WarError::TemplateMissing(_)))
    ));

    Ok(())
}
