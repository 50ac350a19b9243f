use super::*;

/// Tests reading messages most recent first.
///
/// Expected: descending by sent_at regardless of insertion order
#[tokio::test]
async fn orders_by_time_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let clan = factory::create_clan(db).await?;
    for (minute, content) in [(5, "late"), (1, "early"), (3, "middle")] {
        factory::clan_chat_message::ClanChatMessageFactory::new(db, clan.id, clan.owner_id)
            .content(content)
            .sent_at(at(minute))
            .build()
            .await?;
    }

    let messages = ClanChatRepository::new(db)
        .get_recent(ClanId(clan.id), None)
        .await?;

    let contents: Vec<_> = messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["late", "middle", "early"]);

    Ok(())
}

/// Tests limiting the window with equal timestamps.
///
/// Expected: later insertions count as more recent
#[tokio::test]
async fn limit_prefers_later_insertions_on_ties() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let clan = factory::create_clan(db).await?;
    for content in ["a", "b", "c"] {
        factory::clan_chat_message::ClanChatMessageFactory::new(db, clan.id, clan.owner_id)
            .content(content)
            .sent_at(at(0))
            .build()
            .await?;
    }

    let messages = ClanChatRepository::new(db)
        .get_recent(ClanId(clan.id), Some(2))
        .await?;

    let contents: Vec<_> = messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["c", "b"]);

    Ok(())
}
