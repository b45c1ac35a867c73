use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StartedSupportSolicitation::Table)
                    .if_not_exists()
                    .col(pk_auto(StartedSupportSolicitation::Id))
                    .col(big_integer(StartedSupportSolicitation::UserId))
                    .col(big_integer(StartedSupportSolicitation::ThreadId))
                    .col(string(StartedSupportSolicitation::SystemType))
                    .col(timestamp_with_time_zone(StartedSupportSolicitation::StartedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_started_support_solicitations_thread_id")
                    .table(StartedSupportSolicitation::Table)
                    .col(StartedSupportSolicitation::ThreadId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(StartedSupportSolicitation::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum StartedSupportSolicitation {
    #[sea_orm(iden = "started_support_solicitations")]
    Table,
    Id,
    UserId,
    ThreadId,
    SystemType,
    StartedAt,
}
