use dioxus_logger::tracing;
use serenity::all::{Context, GuildId, Member, User};
use std::time::Duration;

use crate::server::{
    scheduler::refresh::DebouncedRefresh, service::dashboard::DashboardService,
};

/// Handles the guild_member_addition event when a member joins a guild
///
/// Member count changes refresh the dashboard immediately.
pub async fn handle_guild_member_addition(
    dashboard: &DashboardService,
    refresh: &DebouncedRefresh<DashboardService>,
    _ctx: Context,
    new_member: Member,
) {
    if dashboard.target_guild_id().await != Some(new_member.guild_id) {
        return;
    }

    tracing::info!("Member joined: {}", new_member.user.name);
    refresh.trigger(Duration::ZERO).await;
}

/// Handles the guild_member_removal event when a member leaves a guild
///
/// Member count changes refresh the dashboard immediately.
pub async fn handle_guild_member_removal(
    dashboard: &DashboardService,
    refresh: &DebouncedRefresh<DashboardService>,
    _ctx: Context,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    if dashboard.target_guild_id().await != Some(guild_id) {
        return;
    }

    tracing::info!("Member left: {}", user.name);
    refresh.trigger(Duration::ZERO).await;
}
