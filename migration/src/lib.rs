pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_started_support_solicitations_table;
mod m20260110_000002_create_ticket_messages_activity_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_started_support_solicitations_table::Migration),
            Box::new(m20260110_000002_create_ticket_messages_activity_table::Migration),
        ]
    }
}
