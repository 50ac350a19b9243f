use super::*;

/// Tests clearing a clan's roster.
///
/// Expected: every row of that clan removed, other clans untouched
#[tokio::test]
async fn deletes_only_that_clans_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (target, _) = factory::helpers::create_clan_with_members(db, 1, &[2, 3]).await?;
    let (other, _) = factory::helpers::create_clan_with_members(db, 4, &[2]).await?;

    let repo = ClanMemberRepository::new(db);
    let deleted = repo.delete_by_clan(ClanId(target.id)).await?;

    assert_eq!(deleted, 3);
    assert_eq!(repo.count_by_clan(ClanId(target.id)).await?, 0);
    assert_eq!(repo.count_by_clan(ClanId(other.id)).await?, 2);

    Ok(())
}
