use super::*;

/// Tests listing clans with their roster sizes.
///
/// Expected: Ok with one summary per clan in id order
#[tokio::test]
async fn lists_clans_in_id_order_with_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let big = factory::clan::ClanFactory::new(db)
        .id(2)
        .name("Big")
        .owner_id(1)
        .build()
        .await?;
    factory::clan_member::create_clan_member(db, big.id, 5).await?;
    factory::clan_member::create_clan_member(db, big.id, 6).await?;
    factory::clan::ClanFactory::new(db)
        .id(1)
        .name("Small")
        .build()
        .await?;

    let summaries = ClanRepository::new(db).get_all_with_member_counts().await?;

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].id, ClanId(1));
    assert_eq!(summaries[0].member_count, 1);
    assert_eq!(summaries[1].name, "Big");
    assert_eq!(summaries[1].member_count, 3);

    Ok(())
}

/// Tests listing when no clans exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_without_clans() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let summaries = ClanRepository::new(db).get_all_with_member_counts().await?;

    assert!(summaries.is_empty());

    Ok(())
}
