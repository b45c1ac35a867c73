use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, GuildId, Interaction, Message, Ready};
use serenity::async_trait;

use crate::tickets::orchestrator::TicketOrchestrator;

pub mod command;
pub mod component;
pub mod message;
pub mod ready;

/// Custom id prefix of the "open ticket" buttons; the suffix carries the
/// ticket system discriminant.
pub const CREATE_TICKET_PREFIX: &str = "create_ticket:";

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub orchestrator: Arc<TicketOrchestrator>,
    pub command_guild_ids: Vec<GuildId>,
}

impl Handler {
    pub fn new(
        db: DatabaseConnection,
        orchestrator: Arc<TicketOrchestrator>,
        command_guild_ids: Vec<GuildId>,
    ) -> Self {
        Self {
            db,
            orchestrator,
            command_guild_ids,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready, &self.command_guild_ids).await;
    }

    /// Called for button clicks and slash commands
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Component(component) => {
                if component.data.custom_id.starts_with(CREATE_TICKET_PREFIX) {
                    component::handle_create_ticket(&self.orchestrator, ctx, component).await;
                }
            }
            Interaction::Command(command) => {
                if command.data.name == "stats" {
                    command::handle_stats(&self.db, ctx, command).await;
                }
            }
            _ => {}
        }
    }

    /// Called when a message is sent in a channel the bot can see
    async fn message(&self, _ctx: Context, message: Message) {
        message::handle_message(&self.db, message).await;
    }
}
