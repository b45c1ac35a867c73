use serenity::all::GuildId;

use crate::error::{config::ConfigError, AppError};

pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,

    /// Guilds the `/stats` command is registered in at startup.
    pub command_guild_ids: Vec<GuildId>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            command_guild_ids: match std::env::var("COMMAND_GUILD_IDS") {
                Ok(raw) => parse_guild_ids(&raw)?,
                Err(_) => Vec::new(),
            },
        })
    }
}

fn parse_guild_ids(raw: &str) -> Result<Vec<GuildId>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u64>()
                .map(GuildId::new)
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "COMMAND_GUILD_IDS".to_string(),
                    value: part.to_string(),
                })
        })
        .collect()
}
