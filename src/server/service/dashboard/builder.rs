//! Dashboard embed builder utilities.
//!
//! Pure formatting helpers that turn `GuildStats` plus the growth figures into the
//! dashboard and error embeds. Nothing here talks to Discord, so the output can be
//! checked by serializing the embed.

use chrono::{DateTime, Utc};
use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::{snapshot::GrowthTrend, stats::GuildStats},
};

/// Discord blurple, used for the live dashboard.
pub const PRIMARY_COLOR: u32 = 0x5865F2;

/// Discord red, used for the error embed.
pub const DANGER_COLOR: u32 = 0xED4245;

const PROGRESS_BAR_LENGTH: usize = 20;
const PROGRESS_FILLED: char = '▰';
const PROGRESS_EMPTY: char = '▱';

/// Embed fields need a name; a zero-width space renders as none.
const BLANK_FIELD_NAME: &str = "\u{200b}";

/// Everything the dashboard embed shows besides the guild statistics.
pub struct DashboardHeader<'a> {
    pub community_name: &'a str,
    /// Displayed growth percentage in `[0, 100]`.
    pub growth: u8,
    pub trend: GrowthTrend,
    /// Seconds between scheduled updates, shown in the footer.
    pub update_interval_secs: u64,
}

/// Builds the live dashboard embed.
///
/// # Arguments
/// - `stats` - Statistics of the dashboard guild
/// - `header` - Community name, growth figures and update interval
/// - `now` - Time shown in the footer and used as the embed timestamp
///
/// # Returns
/// - `Ok(CreateEmbed)` - Dashboard embed ready for sending or editing
/// - `Err(AppError::InternalErr)` - `now` cannot be represented as a Discord timestamp
pub fn build_dashboard_embed(
    stats: &GuildStats,
    header: &DashboardHeader<'_>,
    now: DateTime<Utc>,
) -> Result<CreateEmbed, AppError> {
    let online = stats.online_members();

    let title = format!(
        "⚡ {} Live Dashboard {}",
        header.community_name,
        activity_indicator(online)
    );
    let description = format!(
        "**{}** • Real-time metrics • {}% server growth {}\n{}",
        stats.guild_name,
        header.growth,
        header.trend.glyph(),
        progress_bar(header.growth)
    );

    let server_pulse = if online > 0 {
        "🟢 Server Online"
    } else {
        "🔴 Server Quiet"
    };
    let mut footer = CreateEmbedFooter::new(format!(
        "🕐 {} • {} • Auto-updates every {}s",
        format_timestamp(now),
        server_pulse,
        header.update_interval_secs
    ));
    if let Some(icon_url) = &stats.icon_url {
        footer = footer.icon_url(icon_url);
    }

    let mut embed = CreateEmbed::new()
        .title(title)
        .description(description)
        .field(BLANK_FIELD_NAME, dashboard_layout(stats), false)
        .footer(footer)
        .color(PRIMARY_COLOR)
        .timestamp(discord_timestamp(now)?);

    if let Some(icon_url) = &stats.icon_url {
        embed = embed.thumbnail(icon_url);
    }

    Ok(embed)
}

/// Builds the embed posted when a cycle fails unexpectedly.
///
/// # Arguments
/// - `message` - Error text shown in a code block
/// - `now` - Time of the failure
///
/// # Returns
/// - `Ok(CreateEmbed)` - Error embed
/// - `Err(AppError::InternalErr)` - `now` cannot be represented as a Discord timestamp
pub fn build_error_embed(message: &str, now: DateTime<Utc>) -> Result<CreateEmbed, AppError> {
    Ok(CreateEmbed::new()
        .title("⚠️ Dashboard Error")
        .description(format!("```\n{}\n```", message))
        .field(
            "🕒 Error Time",
            format!("```\n{}\n```", format_timestamp(now)),
            false,
        )
        .footer(CreateEmbedFooter::new(
            "Dashboard will retry on next update cycle",
        ))
        .color(DANGER_COLOR)
        .timestamp(discord_timestamp(now)?))
}

/// Multi-line body of the dashboard field.
pub fn dashboard_layout(stats: &GuildStats) -> String {
    let online = stats.online_members();

    let member_trend = if online * 2 > stats.total_members {
        "📈"
    } else {
        "📊"
    };
    let voice_indicator = if stats.voice.members_in_voice > 0 {
        "🔊"
    } else {
        "🔇"
    };
    let boost_sparkle = if stats.boost.boost_count > 0 {
        "✨"
    } else {
        "💫"
    };

    format!(
        "💎 **│** Total Members: **{}** {}\n\n\
         🌟 **│** Online Right Now: **{}**\n\n\
         {} **│** Active in Voice: **{}** users\n\n\
         {} **│** Server Boosts: **{}** (Tier {})\n\n\
         🚀 **│** Boosting Heroes: **{}** legends\n\n\
         ```diff\n+ Status Breakdown\n```\n\
         🟢 Online: **{}** • 🟡 Away: **{}** • 🔴 Busy: **{}** • ⚫ Offline: **{}**",
        format_number(stats.total_members),
        member_trend,
        format_number(online),
        voice_indicator,
        format_number(stats.voice.members_in_voice),
        boost_sparkle,
        format_number(stats.boost.boost_count),
        stats.boost.boost_level,
        format_number(stats.boost.boosters),
        format_number(stats.status.online),
        format_number(stats.status.idle),
        format_number(stats.status.dnd),
        format_number(stats.status.offline),
    )
}

/// 🔥 above 5 members online, ⚡ above 2, otherwise 💤.
pub fn activity_indicator(online_members: u64) -> &'static str {
    if online_members > 5 {
        "🔥"
    } else if online_members > 2 {
        "⚡"
    } else {
        "💤"
    }
}

/// Renders a 20-cell progress bar; values above 100 render as a full bar.
pub fn progress_bar(percentage: u8) -> String {
    let filled = PROGRESS_BAR_LENGTH * usize::from(percentage.min(100)) / 100;

    std::iter::repeat(PROGRESS_FILLED)
        .take(filled)
        .chain(std::iter::repeat(PROGRESS_EMPTY).take(PROGRESS_BAR_LENGTH - filled))
        .collect()
}

/// Formats a count with comma thousands separators, e.g. `12,345`.
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// `MM/DD/YYYY HH:MM AM/PM` in UTC.
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.format("%m/%d/%Y %I:%M %p").to_string()
}

fn discord_timestamp(time: DateTime<Utc>) -> Result<Timestamp, AppError> {
    Timestamp::from_unix_timestamp(time.timestamp()).map_err(|e| {
        InternalError::InvalidDiscordTimestamp {
            timestamp: time.timestamp(),
            reason: e.to_string(),
        }
        .into()
    })
}
