use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};
use std::{sync::Arc, time::Duration};

use crate::server::{
    bot::handler::Handler, error::AppError, scheduler::refresh::DebouncedRefresh,
    service::dashboard::DashboardService,
};

/// Initializes the Discord bot client
///
/// Creates the client with the dashboard event handler. The client is returned
/// without connecting; pass it to `start_bot` to connect.
///
/// # Arguments
/// - `token` - Discord bot token
/// - `dashboard` - Dashboard service the handler resolves and refreshes
/// - `voice_debounce` - Delay before a voice join or leave refreshes the dashboard
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - Token rejected or client could not be built
pub async fn init_bot(
    token: &str,
    dashboard: DashboardService,
    voice_debounce: Duration,
) -> Result<Client, AppError> {
    // GUILD_MEMBERS and GUILD_PRESENCES are privileged intents
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_PRESENCES
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_MESSAGES;

    let refresh = Arc::new(DebouncedRefresh::new(Arc::new(dashboard.clone())));
    let handler = Handler::new(dashboard, refresh, voice_debounce);

    let client = Client::builder(token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot
///
/// Does not return until the gateway connection ends.
///
/// # Arguments
/// - `client` - Client created by `init_bot`
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
