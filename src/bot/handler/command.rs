use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, Context, CreateEmbed, CreateEmbedFooter, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};

use crate::service::TicketStatsService;
use crate::tickets::registry::TicketSystemType;

/// Handles the `/stats` command: ranks the users most active inside answered
/// tickets of one support system.
pub async fn handle_stats(db: &DatabaseConnection, ctx: Context, interaction: CommandInteraction) {
    let mut system = None;
    let mut filter_days = None;

    for option in &interaction.data.options {
        match option.name.as_str() {
            "system" => system = option.value.as_str().map(str::to_string),
            "filter" => filter_days = option.value.as_str().and_then(|v| v.parse::<i64>().ok()),
            _ => {}
        }
    }

    let system_type = match system.as_deref().map(str::parse::<TicketSystemType>) {
        Some(Ok(system_type)) => system_type,
        _ => {
            tracing::warn!("stats command invoked without a valid system choice");
            return;
        }
    };

    let since = match filter_days {
        Some(days) => Utc::now() - Duration::days(days),
        None => DateTime::<Utc>::UNIX_EPOCH,
    };

    let stats = match TicketStatsService::new(db)
        .top_responders(system_type, since)
        .await
    {
        Ok(stats) => stats,
        Err(e) => {
            tracing::error!("Failed to aggregate ticket stats: {:?}", e);
            return;
        }
    };

    let mut description = String::new();
    for (index, user_stats) in stats.iter().take(25).enumerate() {
        description.push_str(&format!(
            "**{}.** <@{}> - {} tickets respondidos\n",
            index + 1,
            user_stats.user_id,
            user_stats.tickets_replied
        ));
    }

    let embed = CreateEmbed::new()
        .title("Ranking de Pessoas Tagarelas em Tickets Respondidos")
        .description(description)
        .footer(CreateEmbedFooter::new("Burocracia my beloved"));

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(format!("Sistema: {}", system_type.label()))
            .embed(embed),
    );

    if let Err(e) = interaction.create_response(&ctx.http, response).await {
        tracing::error!("Failed to reply to stats command: {:?}", e);
    }
}
