use super::*;

/// Tests loading a clan with its roster in join order.
///
/// Expected: Ok(Some) with members ordered by insertion
#[tokio::test]
async fn finds_clan_with_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (clan, _) = factory::helpers::create_clan_with_members(db, 10, &[30, 20]).await?;

    let repo = ClanRepository::new(db);
    let found = repo.find_by_id(ClanId(clan.id)).await?.unwrap();

    assert_eq!(found.name, clan.name);
    assert_eq!(found.members, vec![UserId(10), UserId(30), UserId(20)]);
    assert!(found.is_member(UserId(20)));
    assert!(found.is_owner(UserId(10)));
    assert!(repo.exists(ClanId(clan.id)).await?);

    Ok(())
}

/// Tests looking up a clan that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_clan() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClanRepository::new(db);

    assert!(repo.find_by_id(ClanId(404)).await?.is_none());
    assert!(!repo.exists(ClanId(404)).await?);

    Ok(())
}
