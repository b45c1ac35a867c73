use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::tickets::registry::TicketSystemType;

pub struct SupportSolicitationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SupportSolicitationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a freshly created ticket thread.
    pub async fn create(
        &self,
        user_id: u64,
        thread_id: u64,
        system_type: TicketSystemType,
        started_at: DateTime<Utc>,
    ) -> Result<entity::started_support_solicitation::Model, DbErr> {
        entity::started_support_solicitation::ActiveModel {
            user_id: ActiveValue::Set(user_id as i64),
            thread_id: ActiveValue::Set(thread_id as i64),
            system_type: ActiveValue::Set(system_type.as_str().to_string()),
            started_at: ActiveValue::Set(started_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds the most recent solicitation opened in the given thread.
    ///
    /// Used by the message handler to decide whether a message was posted
    /// inside a tracked ticket thread.
    pub async fn find_latest_by_thread(
        &self,
        thread_id: u64,
    ) -> Result<Option<entity::started_support_solicitation::Model>, DbErr> {
        entity::prelude::StartedSupportSolicitation::find()
            .filter(entity::started_support_solicitation::Column::ThreadId.eq(thread_id as i64))
            .order_by_desc(entity::started_support_solicitation::Column::StartedAt)
            .one(self.db)
            .await
    }
}
