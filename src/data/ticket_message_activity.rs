use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QuerySelect,
};

use crate::tickets::registry::TicketSystemType;

pub struct TicketMessageActivityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketMessageActivityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records one message observed inside a tracked ticket thread.
    pub async fn create(
        &self,
        support_solicitation_id: i64,
        user_id: u64,
        message_id: u64,
        timestamp: DateTime<Utc>,
    ) -> Result<entity::ticket_message_activity::Model, DbErr> {
        entity::ticket_message_activity::ActiveModel {
            support_solicitation_id: ActiveValue::Set(support_solicitation_id),
            user_id: ActiveValue::Set(user_id as i64),
            message_id: ActiveValue::Set(message_id as i64),
            timestamp: ActiveValue::Set(timestamp),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Counts, per user, the distinct solicitations of `system_type` the user
    /// wrote messages in since `since`.
    ///
    /// Returns `(user_id, distinct_solicitation_count)` rows in unspecified
    /// order; ranking is done by the stats service.
    pub async fn count_distinct_solicitations_since(
        &self,
        system_type: TicketSystemType,
        since: DateTime<Utc>,
    ) -> Result<Vec<(i64, i64)>, DbErr> {
        entity::prelude::TicketMessageActivity::find()
            .select_only()
            .column(entity::ticket_message_activity::Column::UserId)
            .column_as(
                Expr::from(Func::count_distinct(Expr::col((
                    entity::ticket_message_activity::Entity,
                    entity::ticket_message_activity::Column::SupportSolicitationId,
                )))),
                "tickets_replied",
            )
            .inner_join(entity::prelude::StartedSupportSolicitation)
            .filter(entity::ticket_message_activity::Column::Timestamp.gte(since))
            .filter(
                entity::started_support_solicitation::Column::SystemType.eq(system_type.as_str()),
            )
            .group_by(entity::ticket_message_activity::Column::UserId)
            .into_tuple()
            .all(self.db)
            .await
    }
}
