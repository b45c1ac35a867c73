//! Started-support-solicitation factory for creating test solicitations.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test support solicitations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::support_solicitation::SupportSolicitationFactory;
///
/// let solicitation = SupportSolicitationFactory::new(&db)
///     .user_id(123)
///     .thread_id(456)
///     .system_type("HELP_DESK_ENGLISH")
///     .build()
///     .await?;
/// ```
pub struct SupportSolicitationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i64,
    thread_id: i64,
    system_type: String,
    started_at: DateTime<Utc>,
}

impl<'a> SupportSolicitationFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - user_id / thread_id: auto-incremented unique ids
    /// - system_type: `"HELP_DESK_PORTUGUESE"`
    /// - started_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: id as i64,
            thread_id: (id + 1_000_000) as i64,
            system_type: "HELP_DESK_PORTUGUESE".to_string(),
            started_at: Utc::now(),
        }
    }

    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn thread_id(mut self, thread_id: i64) -> Self {
        self.thread_id = thread_id;
        self
    }

    pub fn system_type(mut self, system_type: impl Into<String>) -> Self {
        self.system_type = system_type.into();
        self
    }

    pub fn started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.started_at = started_at;
        self
    }

    /// Builds and inserts the solicitation entity into the database.
    pub async fn build(self) -> Result<entity::started_support_solicitation::Model, DbErr> {
        entity::started_support_solicitation::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            thread_id: ActiveValue::Set(self.thread_id),
            system_type: ActiveValue::Set(self.system_type),
            started_at: ActiveValue::Set(self.started_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a support solicitation with default values.
pub async fn create_solicitation(
    db: &DatabaseConnection,
) -> Result<entity::started_support_solicitation::Model, DbErr> {
    SupportSolicitationFactory::new(db).build().await
}
