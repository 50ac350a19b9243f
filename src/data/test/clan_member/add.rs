use super::*;

/// Tests adding a member to a clan.
///
/// Expected: Ok and the member appears after the owner
#[tokio::test]
async fn adds_member_after_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let clan = factory::clan::ClanFactory::new(db).owner_id(1).build().await?;

    let repo = ClanMemberRepository::new(db);
    let row = repo.add(ClanId(clan.id), UserId(2), now_local()).await?;

    assert_eq!(row.user_id, 2);
    assert!(repo.is_member(ClanId(clan.id), UserId(2)).await?);
    assert_eq!(
        repo.get_member_ids(ClanId(clan.id)).await?,
        vec![UserId(1), UserId(2)]
    );
    assert_eq!(repo.count_by_clan(ClanId(clan.id)).await?, 2);

    Ok(())
}

/// Tests that membership is scoped to one clan.
///
/// Expected: a member of one clan is not a member of another
#[tokio::test]
async fn membership_is_per_clan() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (first, _) = factory::helpers::create_clan_with_members(db, 1, &[5]).await?;
    let (second, _) = factory::helpers::create_clan_with_members(db, 2, &[]).await?;

    let repo = ClanMemberRepository::new(db);

    assert!(repo.is_member(ClanId(first.id), UserId(5)).await?);
    assert!(!repo.is_member(ClanId(second.id), UserId(5)).await?);

    Ok(())
}
