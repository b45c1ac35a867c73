use super::*;

/// Tests that the ranking is ordered by distinct solicitations, descending.
///
/// Expected: the user active in two solicitations ranks above the user active
/// in one, regardless of message volume
#[tokio::test]
async fn ranks_by_distinct_solicitations_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::support_solicitation::create_solicitation(db).await?;
    let second = factory::support_solicitation::create_solicitation(db).await?;

    // User 1 replies in both solicitations, user 2 floods a single one.
    for solicitation_id in [first.id, second.id] {
        factory::ticket_message_activity::TicketMessageActivityFactory::new(db)
            .support_solicitation_id(solicitation_id)
            .user_id(1)
            .build()
            .await?;
    }
    for _ in 0..5 {
        factory::ticket_message_activity::TicketMessageActivityFactory::new(db)
            .support_solicitation_id(first.id)
            .user_id(2)
            .build()
            .await?;
    }

    let service = TicketStatsService::new(db);
    let ranking = service
        .top_responders(
            TicketSystemType::HelpDeskPortuguese,
            Utc::now() - Duration::days(1),
        )
        .await
        .unwrap();

    assert_eq!(ranking.len(), 2);
    assert_eq!(ranking[0].user_id, 1);
    assert_eq!(ranking[0].tickets_replied, 2);
    assert_eq!(ranking[1].user_id, 2);
    assert_eq!(ranking[1].tickets_replied, 1);

    Ok(())
}

/// Tests the empty ranking for a system with no recorded activity.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_ranking_without_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TicketStatsService::new(db);
    let ranking = service
        .top_responders(
            TicketSystemType::HelpDeskEnglish,
            Utc::now() - Duration::days(7),
        )
        .await
        .unwrap();

    assert!(ranking.is_empty());

    Ok(())
}
