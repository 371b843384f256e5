//! Guild event handlers for resolving the dashboard target.
//!
//! The `guild_create` event fires on startup for each guild the bot is in, when the
//! bot joins a guild and when a guild becomes available again after an outage. When
//! the guild holds the dashboard channel, the bot's permissions in that channel are
//! checked and the dashboard target is set. Large guilds only send part of their
//! member list with guild create, so the rest is requested in chunks and the first
//! update waits for the last chunk.

use dioxus_logger::tracing;
use serenity::all::{
    ChannelId, ChunkGuildFilter, Context, Guild, GuildMembersChunkEvent, Permissions,
};
use std::time::Duration;

use crate::server::{
    bot::handler::ready::is_text_channel,
    scheduler::refresh::DebouncedRefresh,
    service::dashboard::{DashboardService, DashboardTarget},
};

/// Permissions the bot needs in the dashboard channel, with display names.
const REQUIRED_PERMISSIONS: [(Permissions, &str); 3] = [
    (Permissions::SEND_MESSAGES, "send_messages"),
    (Permissions::EMBED_LINKS, "embed_links"),
    (Permissions::READ_MESSAGE_HISTORY, "read_message_history"),
];

/// Handles the guild_create event when a guild becomes available or the bot joins a new guild.
///
/// Guilds that do not contain the dashboard channel are ignored. For the dashboard
/// guild, a channel that is not a text channel or lacks required permissions disables
/// the dashboard. Otherwise the target is set and either an immediate refresh is
/// triggered or, when members are missing, the member list is requested in chunks.
///
/// # Arguments
/// - `dashboard` - Dashboard service to resolve
/// - `refresh` - Debounced refresh used to publish right away
/// - `ctx` - Discord context for the member lookup and chunk request
/// - `guild` - Guild data from Discord including channels
/// - `_is_new` - Whether this is a new guild join (unused, required by event handler signature)
pub async fn handle_guild_create(
    dashboard: &DashboardService,
    refresh: &DebouncedRefresh<DashboardService>,
    ctx: Context,
    guild: Guild,
    _is_new: Option<bool>,
) {
    let channel_id = ChannelId::new(dashboard.settings().channel_id);

    tracing::debug!(
        "Guild create event: {} ({}) - member_count: {}",
        guild.name,
        guild.id,
        guild.member_count,
    );

    let Some(channel) = guild.channels.get(&channel_id) else {
        return;
    };

    if dashboard.is_disabled().await {
        return;
    }

    if !is_text_channel(channel.kind) {
        dashboard
            .disable(&format!("channel {} is not a text channel", channel_id))
            .await;
        return;
    }

    let bot_id = ctx.cache.current_user().id;
    let member = match guild.member(&ctx, bot_id).await {
        Ok(member) => member,
        Err(e) => {
            tracing::error!(
                "Failed to fetch bot member in guild {} ({}): {}",
                guild.id,
                guild.name,
                e
            );
            return;
        }
    };

    let missing = missing_permissions(guild.user_permissions_in(channel, &member));
    if !missing.is_empty() {
        dashboard
            .disable(&format!("missing permissions: {}", missing.join(", ")))
            .await;
        return;
    }

    tracing::info!("All required permissions granted in #{}", channel.name);

    dashboard
        .set_target(DashboardTarget {
            cache: ctx.cache.clone(),
            http: ctx.http.clone(),
            guild_id: guild.id,
            channel_id,
        })
        .await;

    if has_all_members(guild.members.len(), guild.member_count) {
        refresh.trigger(Duration::ZERO).await;
        return;
    }

    tracing::info!(
        "Requesting member list of {} ({} of {} members cached)",
        guild.name,
        guild.members.len(),
        guild.member_count
    );
    ctx.shard
        .chunk_guild(guild.id, None, true, ChunkGuildFilter::None, None);
}

/// Handles the guild_members_chunk event for the member list requested on guild create.
///
/// The first dashboard update waits for the last chunk, so it counts every member.
pub async fn handle_guild_members_chunk(
    dashboard: &DashboardService,
    refresh: &DebouncedRefresh<DashboardService>,
    _ctx: Context,
    chunk: GuildMembersChunkEvent,
) {
    if dashboard.target_guild_id().await != Some(chunk.guild_id) {
        return;
    }

    tracing::debug!(
        "Member chunk {}/{} for guild {}",
        chunk.chunk_index + 1,
        chunk.chunk_count,
        chunk.guild_id
    );

    if is_last_chunk(chunk.chunk_index, chunk.chunk_count) {
        tracing::info!("Member list of guild {} loaded", chunk.guild_id);
        refresh.trigger(Duration::ZERO).await;
    }
}

/// Whether guild create already carried the whole member list.
pub fn has_all_members(cached: usize, member_count: u64) -> bool {
    cached as u64 >= member_count
}

/// Whether this is the final chunk of a member list response.
pub fn is_last_chunk(chunk_index: u32, chunk_count: u32) -> bool {
    chunk_index + 1 >= chunk_count
}

/// Names of the required permissions that `granted` lacks.
pub fn missing_permissions(granted: Permissions) -> Vec<&'static str> {
    REQUIRED_PERMISSIONS
        .iter()
        .filter(|(permission, _)| !granted.contains(*permission))
        .map(|(_, name)| *name)
        .collect()
}
