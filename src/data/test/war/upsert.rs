use super::*;

/// Tests recording a clan's first war.
///
/// Expected: Ok and the entry is readable
#[tokio::test]
async fn inserts_new_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_war_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let start = now_local();

    let repo = WarRepository::new(db);
    repo.upsert(ClanId(3), "war-1", start).await?;

    let state = repo.find_by_clan(ClanId(3)).await?.unwrap();
    assert_eq!(state.war_id, "war-1");
    assert_eq!(state.start_time, start);
    assert!(repo.find_by_clan(ClanId(4)).await?.is_none());

    Ok(())
}

/// Tests replacing a clan's current war.
///
/// Expected: the previous entry is fully overwritten
#[tokio::test]
async fn replaces_existing_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_war_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let old_start = now_local() - Duration::days(4);
    factory::clan_war::ClanWarFactory::new(db, 3)
        .war_id("war-1")
        .start_time(old_start)
        .build()
        .await?;
    let new_start = now_local();

    let repo = WarRepository::new(db);
    repo.upsert(ClanId(3), "war-2", new_start).await?;

    let state = repo.find_by_clan(ClanId(3)).await?.unwrap();
    assert_eq!(state.war_id, "war-2");
    assert_eq!(state.start_time, new_start);
    assert_eq!(repo.get_all_war_ids().await?, vec!["war-2".to_string()]);

    Ok(())
}
