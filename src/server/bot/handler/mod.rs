use serenity::all::{
    Context, EventHandler, Guild, GuildId, GuildMembersChunkEvent, Member, Presence, Ready,
    User, VoiceState,
};
use serenity::async_trait;
use std::{sync::Arc, time::Duration};

use crate::server::{
    scheduler::refresh::DebouncedRefresh, service::dashboard::DashboardService,
};

pub mod guild;
pub mod member;
pub mod presence;
pub mod ready;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub dashboard: DashboardService,
    pub refresh: Arc<DebouncedRefresh<DashboardService>>,
    pub voice_debounce: Duration,
}

impl Handler {
    pub fn new(
        dashboard: DashboardService,
        refresh: Arc<DebouncedRefresh<DashboardService>>,
        voice_debounce: Duration,
    ) -> Self {
        Self {
            dashboard,
            refresh,
            voice_debounce,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.dashboard, ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.dashboard, &self.refresh, ctx, guild, is_new).await;
    }

    /// Called for each chunk of a requested guild member list
    async fn guild_members_chunk(&self, ctx: Context, chunk: GuildMembersChunkEvent) {
        guild::handle_guild_members_chunk(&self.dashboard, &self.refresh, ctx, chunk).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.dashboard, &self.refresh, ctx, new_member)
            .await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(
            &self.dashboard,
            &self.refresh,
            ctx,
            guild_id,
            user,
            member_data_if_available,
        )
        .await;
    }

    /// Called when a member joins, leaves, moves between or mutes in a voice channel
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(
            &self.dashboard,
            &self.refresh,
            self.voice_debounce,
            ctx,
            old,
            new,
        )
        .await;
    }

    /// Called when a member's presence changes
    async fn presence_update(&self, ctx: Context, new_data: Presence) {
        presence::handle_presence_update(ctx, new_data).await;
    }
}
