use super::*;

/// Tests removing a clan's war entry.
///
/// Expected: the removed entry is returned and other clans keep theirs
#[tokio::test]
async fn removes_only_that_clan() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_war_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::clan_war::ClanWarFactory::new(db, 3)
        .war_id("war-1")
        .build()
        .await?;
    factory::clan_war::ClanWarFactory::new(db, 4)
        .war_id("war-2")
        .build()
        .await?;

    let repo = WarRepository::new(db);
    let removed = repo.delete_by_clan(ClanId(3)).await?;

    assert_eq!(removed.map(|state| state.war_id).as_deref(), Some("war-1"));
    assert!(repo.find_by_clan(ClanId(3)).await?.is_none());
    assert!(repo.find_by_clan(ClanId(4)).await?.is_some());

    Ok(())
}

/// Tests removing the entry of a clan that never started a war.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_entry_is_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_war_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(WarRepository::new(db).delete_by_clan(ClanId(9)).await?.is_none());

    Ok(())
}
