use dioxus_logger::tracing;
use serenity::all::{ChannelId, Context, VoiceState};
use std::time::Duration;

use crate::server::{
    scheduler::refresh::DebouncedRefresh, service::dashboard::DashboardService,
};

/// Handles the voice_state_update event
///
/// Only joining or leaving voice refreshes the dashboard; moving between channels,
/// muting and deafening do not change the counts shown. Refreshes wait for
/// `voice_debounce` so a burst of joins publishes once.
pub async fn handle_voice_state_update(
    dashboard: &DashboardService,
    refresh: &DebouncedRefresh<DashboardService>,
    voice_debounce: Duration,
    _ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let old_channel = old.and_then(|state| state.channel_id);
    if !is_join_or_leave(old_channel, new.channel_id) {
        return;
    }

    let Some(guild_id) = new.guild_id else {
        return;
    };
    if dashboard.target_guild_id().await != Some(guild_id) {
        return;
    }

    let name = new
        .member
        .as_ref()
        .map(|member| member.user.name.clone())
        .unwrap_or_else(|| new.user_id.to_string());
    tracing::info!("Voice state change: {}", name);

    refresh.trigger(voice_debounce).await;
}

/// Whether the member went from no voice channel to one, or the reverse.
pub fn is_join_or_leave(old: Option<ChannelId>, new: Option<ChannelId>) -> bool {
    old.is_none() != new.is_none()
}
