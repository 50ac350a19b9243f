use super::*;

/// Tests the war sequence before any war was started.
///
/// Expected: Ok(0)
#[tokio::test]
async fn defaults_to_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_war_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert_eq!(WarRepository::new(db).last_war_id().await?, 0);

    Ok(())
}

/// Tests persisting the war sequence repeatedly.
///
/// Expected: the single sequence row holds the latest value
#[tokio::test]
async fn keeps_latest_value() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_war_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WarRepository::new(db);
    repo.set_last_war_id(1).await?;
    repo.set_last_war_id(2).await?;

    assert_eq!(repo.last_war_id().await?, 2);

    Ok(())
}
