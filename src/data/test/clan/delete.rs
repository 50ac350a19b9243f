use super::*;

/// Tests deleting an existing clan.
///
/// Expected: Ok(true) and the clan is gone
#[tokio::test]
async fn deletes_existing_clan() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let clan = factory::clan::ClanFactory::new(db)
        .without_owner_member()
        .build()
        .await?;

    let repo = ClanRepository::new(db);
    assert!(repo.delete(ClanId(clan.id)).await?);
    assert!(repo.find_by_id(ClanId(clan.id)).await?.is_none());

    Ok(())
}

/// Tests deleting a clan that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_clan() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!ClanRepository::new(db).delete(ClanId(9)).await?);

    Ok(())
}
