use super::*;

/// Tests reading the highest clan id.
///
/// Expected: None on an empty table, then the largest id regardless of
/// insertion order
#[tokio::test]
async fn returns_highest_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClanRepository::new(db);
    assert_eq!(repo.max_id().await?, None);

    factory::clan::ClanFactory::new(db).id(12).build().await?;
    factory::clan::ClanFactory::new(db).id(3).build().await?;

    assert_eq!(repo.max_id().await?, Some(ClanId(12)));

    Ok(())
}
