use super::*;

/// Tests counting messages per clan.
///
/// Expected: only the requested clan's messages are counted
#[tokio::test]
async fn counts_only_requested_clan() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let first = factory::create_clan(db).await?;
    let second = factory::create_clan(db).await?;
    for _ in 0..3 {
        factory::create_chat_message(db, first.id, first.owner_id).await?;
    }
    factory::create_chat_message(db, second.id, second.owner_id).await?;

    let repo = ClanChatRepository::new(db);

    assert_eq!(repo.count_by_clan(ClanId(first.id)).await?, 3);
    assert_eq!(repo.count_by_clan(ClanId(second.id)).await?, 1);
    assert_eq!(repo.delete_by_clan(ClanId(first.id)).await?, 3);
    assert_eq!(repo.count_by_clan(ClanId(first.id)).await?, 0);

    Ok(())
}
