use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000001_create_started_support_solicitations_table::StartedSupportSolicitation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TicketMessageActivity::Table)
                    .if_not_exists()
                    .col(pk_auto(TicketMessageActivity::Id))
                    .col(big_integer(TicketMessageActivity::SupportSolicitationId))
                    .col(big_integer(TicketMessageActivity::UserId))
                    .col(big_integer(TicketMessageActivity::MessageId))
                    .col(timestamp_with_time_zone(TicketMessageActivity::Timestamp))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_messages_activity_solicitation_id")
                            .from(
                                TicketMessageActivity::Table,
                                TicketMessageActivity::SupportSolicitationId,
                            )
                            .to(
                                StartedSupportSolicitation::Table,
                                StartedSupportSolicitation::Id,
                            )
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TicketMessageActivity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TicketMessageActivity {
    #[sea_orm(iden = "ticket_messages_activity")]
    Table,
    Id,
    SupportSolicitationId,
    UserId,
    MessageId,
    Timestamp,
}
