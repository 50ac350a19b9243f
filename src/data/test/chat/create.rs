use super::*;

/// Tests storing a chat message.
///
/// Expected: Ok with the content and timestamp as given
#[tokio::test]
async fn stores_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let clan = factory::create_clan(db).await?;

    let message = ClanChatRepository::new(db)
        .create(ClanId(clan.id), UserId(clan.owner_id), "gl hf", at(0))
        .await?;

    assert_eq!(message.clan_id, clan.id);
    assert_eq!(message.sender_id, clan.owner_id);
    assert_eq!(message.content, "gl hf");
    assert_eq!(message.sent_at, at(0));

    Ok(())
}
