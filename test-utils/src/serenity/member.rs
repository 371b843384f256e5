//! Test factories for the member-related parts of a Serenity guild.
//!
//! These return the raw gateway JSON rather than Serenity structs, since members,
//! presences and voice states only reach a `Guild` through its own deserialization.
//! Pass them to `guild::create_populated_guild` via `GuildPopulation`.

use serde_json::{json, Value};

/// Creates a guild member record as sent in the guild create payload.
///
/// # Arguments
/// - `guild_id` - Guild the member belongs to
/// - `user_id` - Discord user ID (snowflake)
/// - `name` - Username
/// - `bot` - Whether the account is a bot
/// - `premium_since` - ISO-8601 time the member started boosting, if boosting
///
/// # Examples
///
/// ```rust,ignore
/// let booster = test_member(1, 42, "alice", false, Some("2026-01-01T00:00:00+00:00"));
/// ```
pub fn test_member(
    guild_id: u64,
    user_id: u64,
    name: &str,
    bot: bool,
    premium_since: Option<&str>,
) -> Value {
    json!({
        "guild_id": guild_id.to_string(),
        "user": {
            "id": user_id.to_string(),
            "username": name,
            "global_name": null,
            "avatar": null,
            "bot": bot,
        },
        "nick": null,
        "avatar": null,
        "roles": [],
        "joined_at": "2024-01-01T00:00:00.000000+00:00",
        "premium_since": premium_since,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "communication_disabled_until": null,
    })
}

/// Creates a presence record with the given status.
///
/// # Arguments
/// - `status` - One of `"online"`, `"idle"`, `"dnd"`, `"invisible"` or `"offline"`
pub fn test_presence(guild_id: u64, user_id: u64, status: &str) -> Value {
    json!({
        "guild_id": guild_id.to_string(),
        "user": { "id": user_id.to_string() },
        "status": status,
        "activities": [],
        "client_status": null,
    })
}

/// Creates a voice state record; `channel_id` of `None` means not connected.
pub fn test_voice_state(guild_id: u64, user_id: u64, channel_id: Option<u64>) -> Value {
    json!({
        "guild_id": guild_id.to_string(),
        "channel_id": channel_id.map(|id| id.to_string()),
        "user_id": user_id.to_string(),
        "session_id": format!("session-{}", user_id),
        "deaf": false,
        "mute": false,
        "self_deaf": false,
        "self_mute": false,
        "self_stream": false,
        "self_video": false,
        "suppress": false,
        "request_to_speak_timestamp": null,
    })
}

/// Creates a guild channel record.
///
/// # Arguments
/// - `kind` - Discord channel type number (0 text, 2 voice, 13 stage)
pub fn test_channel(guild_id: u64, channel_id: u64, name: &str, kind: u8) -> Value {
    json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": kind,
        "name": name,
        "position": 0,
        "permission_overwrites": [],
        "nsfw": false,
        "parent_id": null,
        "bitrate": 64000,
        "user_limit": 0,
        "rate_limit_per_user": 0,
        "flags": 0,
    })
}
