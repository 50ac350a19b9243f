use super::*;

/// Tests removing a member from a clan.
///
/// Expected: Ok(true) the first time, Ok(false) once the row is gone
#[tokio::test]
async fn removes_member_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (clan, _) = factory::helpers::create_clan_with_members(db, 1, &[2, 3]).await?;

    let repo = ClanMemberRepository::new(db);

    assert!(repo.remove(ClanId(clan.id), UserId(2)).await?);
    assert!(!repo.remove(ClanId(clan.id), UserId(2)).await?);
    assert_eq!(
        repo.get_member_ids(ClanId(clan.id)).await?,
        vec![UserId(1), UserId(3)]
    );

    Ok(())
}
