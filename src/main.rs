//! Loritta Helper - support ticket bot.
//!
//! Routes "open ticket" button clicks into per-user private threads, enforces
//! at-most-one-active-ticket-per-user semantics with a five minute recreation
//! cooldown, and records ticket activity for the `/stats` ranking command.

mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod tickets;

use crate::config::Config;
use crate::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    bot::start::start_bot(&config, db).await
}
