use super::*;

/// Tests creating a clan together with its owner's roster row.
///
/// Expected: Ok with the owner as the only member
#[tokio::test]
async fn creates_clan_with_owner_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClanRepository::new(db);
    let clan = repo
        .create(ClanId(1), "Alpha", UserId(7), now_local())
        .await?;

    assert_eq!(clan.id, ClanId(1));
    assert_eq!(clan.name, "Alpha");
    assert_eq!(clan.owner_id, UserId(7));
    assert_eq!(clan.members, vec![UserId(7)]);

    let member_rows = entity::prelude::ClanMember::find().count(db).await?;
    assert_eq!(member_rows, 1);

    Ok(())
}

/// Tests that the name column is unique.
///
/// Expected: Err on the second insert, one clan stored
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClanRepository::new(db);
    repo.create(ClanId(1), "Alpha", UserId(1), now_local())
        .await?;
    let result = repo
        .create(ClanId(2), "Alpha", UserId(2), now_local())
        .await;

    assert!(result.is_err());
    assert!(repo.name_exists("Alpha").await?);
    assert!(!repo.name_exists("alpha").await?);

    let clans = entity::prelude::Clan::find().count(db).await?;
    assert_eq!(clans, 1);

    Ok(())
}
