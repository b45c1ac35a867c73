//! Ticket-message-activity factory for creating test activity rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test ticket message activity with customizable
/// fields.
///
/// Activity rows reference a solicitation; create one first with
/// `support_solicitation::create_solicitation` or its factory.
pub struct TicketMessageActivityFactory<'a> {
    db: &'a DatabaseConnection,
    support_solicitation_id: i64,
    user_id: i64,
    message_id: i64,
    timestamp: DateTime<Utc>,
}

impl<'a> TicketMessageActivityFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - support_solicitation_id: `1`
    /// - user_id / message_id: auto-incremented unique ids
    /// - timestamp: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            support_solicitation_id: 1,
            user_id: id as i64,
            message_id: (id + 2_000_000) as i64,
            timestamp: Utc::now(),
        }
    }

    pub fn support_solicitation_id(mut self, support_solicitation_id: i64) -> Self {
        self.support_solicitation_id = support_solicitation_id;
        self
    }

    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn message_id(mut self, message_id: i64) -> Self {
        self.message_id = message_id;
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Builds and inserts the activity entity into the database.
    pub async fn build(self) -> Result<entity::ticket_message_activity::Model, DbErr> {
        entity::ticket_message_activity::ActiveModel {
            support_solicitation_id: ActiveValue::Set(self.support_solicitation_id),
            user_id: ActiveValue::Set(self.user_id),
            message_id: ActiveValue::Set(self.message_id),
            timestamp: ActiveValue::Set(self.timestamp),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
