//! Discord bot integration.
//!
//! This module wires the Serenity client to the ticket subsystem. Gateway
//! events are dispatched by the event handler into the orchestrator (button
//! clicks), the stats service (slash command) and the activity recorder
//! (messages inside ticket threads).
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive interaction and thread events
//! - `GUILD_MESSAGES` - Observe messages inside ticket threads
//! - `GUILD_MEMBERS` - Receive member data on interactions (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
