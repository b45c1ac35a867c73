use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serenity::all::Message;

use crate::data::{SupportSolicitationRepository, TicketMessageActivityRepository};

/// Records a ticket-activity row for messages posted inside tracked ticket
/// threads. Messages anywhere else are ignored.
pub async fn handle_message(db: &DatabaseConnection, message: Message) {
    if message.author.bot {
        return;
    }

    let solicitation = match SupportSolicitationRepository::new(db)
        .find_latest_by_thread(message.channel_id.get())
        .await
    {
        Ok(Some(solicitation)) => solicitation,
        Ok(None) => return,
        Err(e) => {
            tracing::error!("Failed to look up support solicitation: {:?}", e);
            return;
        }
    };

    let timestamp = DateTime::from_timestamp(message.timestamp.unix_timestamp(), 0)
        .unwrap_or_else(Utc::now);

    if let Err(e) = TicketMessageActivityRepository::new(db)
        .create(
            solicitation.id,
            message.author.id.get(),
            message.id.get(),
            timestamp,
        )
        .await
    {
        tracing::error!("Failed to record ticket message activity: {:?}", e);
    }
}
