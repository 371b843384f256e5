//! Ready event handler for bot initialization.
//!
//! Fires when the bot has connected to Discord's gateway. The dashboard channel is
//! looked up over HTTP here, since guilds only reach the cache with the guild create
//! events that follow. A channel that does not exist or cannot hold the dashboard
//! disables it; permissions are checked once the guild itself is available.

use dioxus_logger::tracing;
use serenity::all::{Channel, ChannelId, ChannelType, Context, Ready};

use crate::server::service::dashboard::DashboardService;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `dashboard` - Dashboard service to disable when the channel is unusable
/// - `ctx` - Discord context used to fetch the channel
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(dashboard: &DashboardService, ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord (ID: {})",
        ready.user.name,
        ready.user.id
    );

    let channel_id = ChannelId::new(dashboard.settings().channel_id);

    match channel_id.to_channel(&ctx).await {
        Ok(Channel::Guild(channel)) if is_text_channel(channel.kind) => {
            tracing::info!(
                "Target channel found: #{} in guild {}",
                channel.name,
                channel.guild_id
            );
        }
        Ok(_) => {
            dashboard
                .disable(&format!("channel {} is not a text channel", channel_id))
                .await;
        }
        Err(e) => {
            dashboard
                .disable(&format!("could not find channel {}: {}", channel_id, e))
                .await;
        }
    }
}

/// Whether a channel of this kind can hold the dashboard message.
pub fn is_text_channel(kind: ChannelType) -> bool {
    matches!(kind, ChannelType::Text | ChannelType::News)
}
