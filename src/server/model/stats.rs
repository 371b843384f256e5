//! Guild statistics shown on the dashboard.
//!
//! The counting rules live here, over plain `MemberSample` values, so they can be
//! exercised without a Discord cache. The mapping from the cached `serenity` guild
//! to samples is done in `service::stats`.

use std::collections::HashSet;

/// Presence of a member as far as the dashboard is concerned.
///
/// Invisible members and members without a known presence are reported as `Offline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberStatus {
    Online,
    Idle,
    DoNotDisturb,
    Offline,
}

/// The facts about one guild member that feed into the statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberSample {
    pub bot: bool,
    pub status: MemberStatus,
    /// Voice channel the member is connected to, if any.
    pub voice_channel: Option<u64>,
    /// Whether the member is boosting the guild.
    pub boosting: bool,
}

/// Per-status counts of non-bot members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub online: u64,
    pub idle: u64,
    pub dnd: u64,
    pub offline: u64,
}

impl StatusCounts {
    /// Members that are online, idle or busy.
    pub fn total_online(&self) -> u64 {
        self.online + self.idle + self.dnd
    }
}

/// Voice channel occupancy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoiceStats {
    /// Non-bot members connected to any voice channel.
    pub members_in_voice: u64,
    pub total_voice_channels: u64,
    /// Voice channels with at least one connected member.
    pub active_voice_channels: u64,
}

/// Server boost information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoostStats {
    pub boost_count: u64,
    /// Premium tier 0-3.
    pub boost_level: u8,
    /// Members currently boosting.
    pub boosters: u64,
}

/// All statistics rendered on the dashboard for one guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildStats {
    pub guild_id: u64,
    pub guild_name: String,
    pub icon_url: Option<String>,
    /// Non-bot members.
    pub total_members: u64,
    pub total_bots: u64,
    /// Member count reported by Discord, bots included.
    pub reported_members: u64,
    pub status: StatusCounts,
    pub voice: VoiceStats,
    pub boost: BoostStats,
}

impl GuildStats {
    /// Non-bot members that are not offline.
    pub fn online_members(&self) -> u64 {
        self.status.total_online()
    }

    /// Whether every member Discord reports has been counted.
    ///
    /// Large guilds only send part of their member list with guild create and the
    /// rest in chunks, so counts taken before the last chunk are too low.
    pub fn is_complete(&self) -> bool {
        self.total_members + self.total_bots >= self.reported_members
    }
}

/// Member totals derived from a set of `MemberSample`s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemberCounts {
    /// Non-bot members.
    pub total_members: u64,
    pub total_bots: u64,
    pub status: StatusCounts,
    /// Non-bot members connected to voice.
    pub members_in_voice: u64,
    /// Distinct voice channels with anyone connected, bots included.
    pub active_voice_channels: u64,
    pub boosters: u64,
}

impl MemberCounts {
    /// Counts member samples into totals, status counts, voice occupancy and boosters.
    ///
    /// Bots are excluded from every count except `total_bots` and `boosters`; Discord
    /// attributes boosts to accounts, so a boosting bot still counts as a booster.
    pub fn tally<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = MemberSample>,
    {
        let mut counts = Self::default();
        let mut active_channels = HashSet::new();

        for sample in samples {
            if let Some(channel_id) = sample.voice_channel {
                active_channels.insert(channel_id);
            }
            if sample.boosting {
                counts.boosters += 1;
            }

            if sample.bot {
                counts.total_bots += 1;
                continue;
            }

            counts.total_members += 1;
            match sample.status {
                MemberStatus::Online => counts.status.online += 1,
                MemberStatus::Idle => counts.status.idle += 1,
                MemberStatus::DoNotDisturb => counts.status.dnd += 1,
                MemberStatus::Offline => counts.status.offline += 1,
            }
            if sample.voice_channel.is_some() {
                counts.members_in_voice += 1;
            }
        }

        counts.active_voice_channels = active_channels.len() as u64;
        counts
    }
}
