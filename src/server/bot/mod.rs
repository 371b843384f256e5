//! Discord bot integration for the live dashboard.
//!
//! The bot keeps the gateway cache populated with members, presences and voice states
//! of the dashboard guild, resolves the dashboard channel on startup and turns member
//! and voice activity into debounced dashboard refreshes.
//!
//! The bot runs in a separate tokio task. The scheduled update cycles read from the
//! cache the bot maintains, so nothing is published before the bot is connected.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild availability, channels and boost information
//! - `GUILD_MEMBERS` - Member joins and leaves, member chunking (privileged intent)
//! - `GUILD_PRESENCES` - Online, idle and busy status (privileged intent)
//! - `GUILD_VOICE_STATES` - Voice channel occupancy
//! - `GUILD_MESSAGES` - Message events in the dashboard channel
//!
//! Note: `GUILD_MEMBERS` and `GUILD_PRESENCES` are privileged intents and must be
//! explicitly enabled in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
