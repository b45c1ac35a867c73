use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests recording one message inside a tracked ticket thread.
///
/// Expected: Ok with the row linked to its solicitation
#[tokio::test]
async fn creates_activity_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let solicitation = factory::support_solicitation::create_solicitation(db).await?;

    let repo = TicketMessageActivityRepository::new(db);
    let created = repo.create(solicitation.id, 123, 999, Utc::now()).await?;

    assert_eq!(created.support_solicitation_id, solicitation.id);
    assert_eq!(created.user_id, 123);
    assert_eq!(created.message_id, 999);

    let count = entity::prelude::TicketMessageActivity::find()
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}
