use sea_orm::entity::prelude::*;

/// One row per message observed inside a tracked ticket thread.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ticket_messages_activity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub support_solicitation_id: i64,
    pub user_id: i64,
    pub message_id: i64,
    pub timestamp: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::started_support_solicitation::Entity",
        from = "Column::SupportSolicitationId",
        to = "super::started_support_solicitation::Column::Id"
    )]
    StartedSupportSolicitation,
}

impl Related<super::started_support_solicitation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StartedSupportSolicitation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
