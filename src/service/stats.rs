//! Read-only reporting over the persisted ticket activity stream.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::data::TicketMessageActivityRepository;
use crate::error::AppError;
use crate::model::stats::UserTicketStats;
use crate::tickets::registry::TicketSystemType;

pub struct TicketStatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketStatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ranks users by how many distinct solicitations of `system_type` they
    /// wrote messages in since `since`, most active first.
    ///
    /// # Arguments
    /// - `system_type`: support system the ranking is scoped to
    /// - `since`: inclusive lower bound on message timestamps
    ///
    /// # Returns
    /// - `Ok(Vec<UserTicketStats>)`: ranking, descending by tickets replied
    /// - `Err(AppError)`: database error during aggregation
    pub async fn top_responders(
        &self,
        system_type: TicketSystemType,
        since: DateTime<Utc>,
    ) -> Result<Vec<UserTicketStats>, AppError> {
        let repo = TicketMessageActivityRepository::new(self.db);

        let mut stats: Vec<UserTicketStats> = repo
            .count_distinct_solicitations_since(system_type, since)
            .await?
            .into_iter()
            .map(|(user_id, tickets_replied)| UserTicketStats {
                user_id: user_id as u64,
                tickets_replied,
            })
            .collect();

        stats.sort_by(|a, b| b.tickets_replied.cmp(&a.tickets_replied));

        Ok(stats)
    }
}
