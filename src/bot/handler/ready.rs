use serenity::all::{
    ActivityData, CommandOptionType, Context, CreateCommand, CreateCommandOption, GuildId, Ready,
};

use crate::tickets::registry::TicketSystemType;

/// Sets the bot presence and registers the `/stats` command in the configured
/// guilds.
pub async fn handle_ready(ctx: Context, ready: Ready, command_guild_ids: &[GuildId]) {
    tracing::info!("{} is connected to Discord!", ready.user.name);

    ctx.set_activity(Some(ActivityData::custom("Ajudando a Loritta <3")));

    for guild_id in command_guild_ids {
        if let Err(e) = guild_id.set_commands(&ctx.http, vec![stats_command()]).await {
            tracing::error!("Failed to register commands in guild {}: {:?}", guild_id, e);
        }
    }
}

fn stats_command() -> CreateCommand {
    let mut system =
        CreateCommandOption::new(CommandOptionType::String, "system", "Sistema").required(true);
    for system_type in TicketSystemType::ALL {
        system = system.add_string_choice(system_type.label(), system_type.as_str());
    }

    let filter = CreateCommandOption::new(CommandOptionType::String, "filter", "Filtro de data")
        .add_string_choice("Últimos 7 dias", "7")
        .add_string_choice("Últimos 14 dias", "14")
        .add_string_choice("Últimos 30 dias", "30")
        .add_string_choice("Últimos 90 dias", "90")
        .add_string_choice("Últimos 365 dias", "365");

    CreateCommand::new("stats")
        .description("Estatísticas dos sistemas de tickets")
        .add_option(system)
        .add_option(filter)
}
