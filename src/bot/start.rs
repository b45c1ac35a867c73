use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::tickets::orchestrator::TicketOrchestrator;
use crate::tickets::registry::TicketSystemRegistry;
use crate::tickets::thread_api::DiscordThreadApi;

/// Starts the Discord bot in a blocking manner.
///
/// Builds the ticket system registry (validated, fail-fast), the orchestrator
/// that owns the ticket caches and recent-creation guard, and the Serenity
/// client, then runs the client until shutdown.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection for the activity stream
///
/// # Returns
/// - `Ok(())` if the bot starts and runs until shutdown
/// - `Err(AppError)` if registry validation or client startup fails
pub async fn start_bot(config: &Config, db: DatabaseConnection) -> Result<(), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in the Discord
    // Developer Portal
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::GUILD_MEMBERS;

    let registry = Arc::new(TicketSystemRegistry::loritta()?);

    // Dedicated REST client for thread management, created before the gateway
    // client exists so the orchestrator can be built first.
    let thread_api = Arc::new(DiscordThreadApi::new(Arc::new(Http::new(
        &config.discord_bot_token,
    ))));

    let orchestrator = Arc::new(TicketOrchestrator::new(registry, thread_api, db.clone()));

    let handler = Handler::new(db, orchestrator, config.command_guild_ids.clone());

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Blocks until shutdown
    client.start().await?;

    Ok(())
}
