//! Test factory for creating Serenity Guild objects.
//!
//! This module provides factory functions for creating mock Serenity `Guild` structs
//! for testing purposes. These factories create valid Guild objects by deserializing
//! JSON, simulating what Discord's API would return.

use serde_json::Value;
use serenity::all::Guild;

/// Members, presences, voice states and channels to put into a test guild.
///
/// Build the entries with the factories in `serenity::member`. `member_count` is the
/// count Discord reports in the guild create payload; it defaults to the number of
/// `members`, which is how a guild looks once every member chunk has arrived.
#[derive(Default)]
pub struct GuildPopulation {
    pub member_count: Option<u64>,
    pub members: Vec<Value>,
    pub presences: Vec<Value>,
    pub voice_states: Vec<Value>,
    pub channels: Vec<Value>,
}

/// Creates a test Serenity Guild with customizable fields.
///
/// Creates a Guild object by deserializing JSON with the provided values.
/// The icon hash is automatically padded to 32 characters (Discord's icon hash format)
/// if it's shorter. All other fields are set to reasonable defaults.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `icon_hash` - Optional icon hash (will be padded to 32 characters if shorter)
/// - `premium_tier` - Boost tier 0-3
/// - `boost_count` - Number of server boosts
///
/// # Returns
/// - `Guild` - A valid Serenity Guild struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::guild::create_test_guild;
///
/// // Create guild without icon or boosts
/// let guild = create_test_guild(123456789, "Test Guild", None, 0, 0);
///
/// // Create a tier 2 guild with 9 boosts and an icon (padded to 32 chars)
/// let guild = create_test_guild(123456789, "Test Guild", Some("abc123"), 2, 9);
/// assert_eq!(guild.icon.unwrap().to_string(), "abc12300000000000000000000000000");
/// ```
pub fn create_test_guild(
    guild_id: u64,
    name: &str,
    icon_hash: Option<&str>,
    premium_tier: u8,
    boost_count: u64,
) -> Guild {
    create_populated_guild(
        guild_id,
        name,
        icon_hash,
        premium_tier,
        boost_count,
        GuildPopulation::default(),
    )
}

/// Creates a test Serenity Guild holding the given members and channels.
///
/// Same as `create_test_guild`, with the member list, presences, voice states and
/// channels taken from `population`.
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::{guild::*, member::*};
///
/// // Guild create of a large guild before any member chunk arrived
/// let guild = create_populated_guild(1, "Large", None, 0, 0, GuildPopulation {
///     member_count: Some(300),
///     ..Default::default()
/// });
/// ```
pub fn create_populated_guild(
    guild_id: u64,
    name: &str,
    icon_hash: Option<&str>,
    premium_tier: u8,
    boost_count: u64,
    population: GuildPopulation,
) -> Guild {
    // Pad icon hash to be 32 characters if provided (Discord icon hash format)
    // Note: Animated icons should be 34 characters ("a_" prefix + 32 hex chars)
    let formatted_icon = icon_hash.map(|hash| {
        if hash.starts_with("a_") {
            // Animated icon - ensure it's 34 characters total
            if hash.len() < 34 {
                format!("{:0<34}", hash)
            } else {
                hash.to_string()
            }
        } else if hash.len() < 32 {
            // Normal icon - pad to 32 characters
            format!("{:0<32}", hash)
        } else {
            hash.to_string()
        }
    });

    let member_count = population
        .member_count
        .unwrap_or(population.members.len() as u64);

    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": formatted_icon,
        "icon_hash": formatted_icon,
        "owner_id": "100000000000000000",
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": [],
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": premium_tier,
        "premium_subscription_count": boost_count,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": member_count,
        "voice_states": population.voice_states,
        "channels": population.channels,
        "threads": [],
        "presences": population.presences,
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": population.members,
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
