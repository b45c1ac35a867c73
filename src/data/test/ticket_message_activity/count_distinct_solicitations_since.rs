use super::*;

/// Tests that multiple messages in the same solicitation count once.
///
/// Verifies the distinct-count semantics: chattiness inside one ticket does
/// not inflate the ranking.
///
/// Expected: Ok with one (user, 1) row despite three messages
#[tokio::test]
async fn counts_distinct_solicitations_not_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let solicitation = factory::support_solicitation::SupportSolicitationFactory::new(db)
        .system_type("HELP_DESK_PORTUGUESE")
        .build()
        .await?;

    for _ in 0..3 {
        factory::ticket_message_activity::TicketMessageActivityFactory::new(db)
            .support_solicitation_id(solicitation.id)
            .user_id(42)
            .build()
            .await?;
    }

    let repo = TicketMessageActivityRepository::new(db);
    let rows = repo
        .count_distinct_solicitations_since(
            TicketSystemType::HelpDeskPortuguese,
            Utc::now() - Duration::days(1),
        )
        .await?;

    assert_eq!(rows, vec![(42, 1)]);

    Ok(())
}

/// Tests that the aggregation is scoped to the requested system type.
///
/// Expected: Ok with rows only for the queried system
#[tokio::test]
async fn filters_by_system_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let help_desk = factory::support_solicitation::SupportSolicitationFactory::new(db)
        .system_type("HELP_DESK_PORTUGUESE")
        .build()
        .await?;
    let fan_art = factory::support_solicitation::SupportSolicitationFactory::new(db)
        .system_type("FIRST_FAN_ARTS_PORTUGUESE")
        .build()
        .await?;

    factory::ticket_message_activity::TicketMessageActivityFactory::new(db)
        .support_solicitation_id(help_desk.id)
        .user_id(1)
        .build()
        .await?;
    factory::ticket_message_activity::TicketMessageActivityFactory::new(db)
        .support_solicitation_id(fan_art.id)
        .user_id(2)
        .build()
        .await?;

    let repo = TicketMessageActivityRepository::new(db);
    let rows = repo
        .count_distinct_solicitations_since(
            TicketSystemType::FirstFanArtsPortuguese,
            Utc::now() - Duration::days(1),
        )
        .await?;

    assert_eq!(rows, vec![(2, 1)]);

    Ok(())
}

/// Tests that messages older than the cutoff are excluded.
///
/// Expected: Ok with only recent activity counted
#[tokio::test]
async fn excludes_activity_before_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let solicitation = factory::support_solicitation::create_solicitation(db).await?;

    factory::ticket_message_activity::TicketMessageActivityFactory::new(db)
        .support_solicitation_id(solicitation.id)
        .user_id(1)
        .timestamp(Utc::now() - Duration::days(30))
        .build()
        .await?;
    factory::ticket_message_activity::TicketMessageActivityFactory::new(db)
        .support_solicitation_id(solicitation.id)
        .user_id(2)
        .timestamp(Utc::now())
        .build()
        .await?;

    let repo = TicketMessageActivityRepository::new(db);
    let rows = repo
        .count_distinct_solicitations_since(
            TicketSystemType::HelpDeskPortuguese,
            Utc::now() - Duration::days(7),
        )
        .await?;

    assert_eq!(rows, vec![(2, 1)]);

    Ok(())
}
