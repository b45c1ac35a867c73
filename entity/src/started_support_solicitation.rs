use sea_orm::entity::prelude::*;

/// One row per freshly created ticket thread.
///
/// `system_type` stores the `TicketSystemType` discriminant name so that
/// stats queries can filter by support system without joining configuration.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "started_support_solicitations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub thread_id: i64,
    pub system_type: String,
    pub started_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ticket_message_activity::Entity")]
    TicketMessageActivity,
}

impl Related<super::ticket_message_activity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TicketMessageActivity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
