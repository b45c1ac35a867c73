use super::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

/// Tests recording a freshly created ticket thread.
///
/// Verifies that the repository inserts a row carrying the user, thread,
/// system type discriminant and start timestamp.
///
/// Expected: Ok with all fields persisted
#[tokio::test]
async fn creates_solicitation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let started_at = Utc::now();

    let repo = SupportSolicitationRepository::new(db);
    let created = repo
        .create(123, 456, TicketSystemType::HelpDeskPortuguese, started_at)
        .await?;

    assert_eq!(created.user_id, 123);
    assert_eq!(created.thread_id, 456);
    assert_eq!(created.system_type, "HELP_DESK_PORTUGUESE");
    assert_eq!(created.started_at, started_at);

    // Verify the row exists in the database
    let count = entity::prelude::StartedSupportSolicitation::find()
        .filter(entity::started_support_solicitation::Column::UserId.eq(123))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that one user can start solicitations under different systems.
///
/// Expected: Ok with one row per system type
#[tokio::test]
async fn allows_multiple_systems_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SupportSolicitationRepository::new(db);
    repo.create(123, 456, TicketSystemType::HelpDeskPortuguese, Utc::now())
        .await?;
    repo.create(123, 789, TicketSystemType::FirstFanArtsPortuguese, Utc::now())
        .await?;

    let count = entity::prelude::StartedSupportSolicitation::find()
        .count(db)
        .await?;
    assert_eq!(count, 2);

    Ok(())
}
