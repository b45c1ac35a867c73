use super::*;
use chrono::Duration;

/// Tests looking up the solicitation of a tracked thread.
///
/// Expected: Ok(Some) for a tracked thread, Ok(None) otherwise
#[tokio::test]
async fn finds_tracked_thread() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::support_solicitation::SupportSolicitationFactory::new(db)
        .user_id(123)
        .thread_id(456)
        .build()
        .await?;

    let repo = SupportSolicitationRepository::new(db);

    let found = repo.find_latest_by_thread(456).await?;
    assert_eq!(found.map(|s| s.user_id), Some(123));

    let missing = repo.find_latest_by_thread(999).await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests that the most recent solicitation wins when a thread id was reused.
///
/// Expected: Ok(Some) holding the newest row
#[tokio::test]
async fn returns_most_recent_solicitation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::support_solicitation::SupportSolicitationFactory::new(db)
        .user_id(1)
        .thread_id(456)
        .started_at(Utc::now() - Duration::days(2))
        .build()
        .await?;
    factory::support_solicitation::SupportSolicitationFactory::new(db)
        .user_id(2)
        .thread_id(456)
        .started_at(Utc::now())
        .build()
        .await?;

    let repo = SupportSolicitationRepository::new(db);
    let found = repo.find_latest_by_thread(456).await?;

    assert_eq!(found.map(|s| s.user_id), Some(2));

    Ok(())
}
