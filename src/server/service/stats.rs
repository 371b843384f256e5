//! Statistics collection from the gateway cache.
//!
//! Converts a cached `serenity` guild into the `GuildStats` rendered on the dashboard.
//! Presences and voice states come from the gateway, so the numbers are only as
//! complete as the `GUILD_PRESENCES`, `GUILD_VOICE_STATES` and `GUILD_MEMBERS` intents
//! and the member chunking done on guild create allow.

use serenity::all::{ChannelType, Guild, OnlineStatus};

use crate::server::model::stats::{
    BoostStats, GuildStats, MemberCounts, MemberSample, MemberStatus, VoiceStats,
};

/// Collects dashboard statistics from a cached guild.
///
/// # Arguments
/// - `guild` - Guild as held in the serenity cache
///
/// # Returns
/// - `GuildStats` - Member, status, voice and boost statistics of the guild
pub fn collect_guild_stats(guild: &Guild) -> GuildStats {
    let samples = guild.members.values().map(|member| {
        let user_id = member.user.id;

        MemberSample {
            bot: member.user.bot,
            status: guild
                .presences
                .get(&user_id)
                .map(|presence| member_status(presence.status))
                .unwrap_or(MemberStatus::Offline),
            voice_channel: guild
                .voice_states
                .get(&user_id)
                .and_then(|state| state.channel_id)
                .map(|channel_id| channel_id.get()),
            boosting: member.premium_since.is_some(),
        }
    });
    let counts = MemberCounts::tally(samples);

    let total_voice_channels = guild
        .channels
        .values()
        .filter(|channel| matches!(channel.kind, ChannelType::Voice | ChannelType::Stage))
        .count() as u64;

    GuildStats {
        guild_id: guild.id.get(),
        guild_name: guild.name.clone(),
        icon_url: guild.icon_url(),
        total_members: counts.total_members,
        total_bots: counts.total_bots,
        reported_members: guild.member_count,
        status: counts.status,
        voice: VoiceStats {
            members_in_voice: counts.members_in_voice,
            total_voice_channels,
            active_voice_channels: counts.active_voice_channels,
        },
        boost: BoostStats {
            boost_count: guild.premium_subscription_count.unwrap_or(0),
            boost_level: u8::from(guild.premium_tier),
            boosters: counts.boosters,
        },
    }
}

/// Maps a gateway presence to the dashboard status. Invisible members appear offline.
fn member_status(status: OnlineStatus) -> MemberStatus {
    match status {
        OnlineStatus::Online => MemberStatus::Online,
        OnlineStatus::Idle => MemberStatus::Idle,
        OnlineStatus::DoNotDisturb => MemberStatus::DoNotDisturb,
        _ => MemberStatus::Offline,
    }
}
