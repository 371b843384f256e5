use std::{net::SocketAddr, path::PathBuf, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_GROWTH_DATA_FILE: &str = "growth_data.json";
const DEFAULT_UPDATE_INTERVAL_SECONDS: u64 = 60;
const DEFAULT_VOICE_DEBOUNCE_SECONDS: u64 = 5;
const DEFAULT_COMMUNITY_NAME: &str = "Paranoia Community";

pub struct Config {
    pub discord_bot_token: String,
    pub discord_channel_id: u64,

    pub growth_data_file: PathBuf,
    pub update_interval: Duration,
    pub voice_debounce: Duration,

    /// Address for the JSON status surface; the surface is disabled when unset.
    pub status_bind_addr: Option<SocketAddr>,

    pub community_name: String,
    pub debug_logging: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let discord_bot_token = std::env::var("DISCORD_BOT_TOKEN")
            .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;
        let discord_channel_id = std::env::var("DISCORD_CHANNEL_ID")
            .map_err(|_| ConfigError::MissingEnvVar("DISCORD_CHANNEL_ID".to_string()))
            .and_then(|raw| parse_channel_id(&raw))?;

        let update_interval = match std::env::var("UPDATE_INTERVAL_SECONDS") {
            Ok(raw) => parse_seconds("UPDATE_INTERVAL_SECONDS", &raw, false)?,
            Err(_) => Duration::from_secs(DEFAULT_UPDATE_INTERVAL_SECONDS),
        };
        let voice_debounce = match std::env::var("VOICE_DEBOUNCE_SECONDS") {
            Ok(raw) => parse_seconds("VOICE_DEBOUNCE_SECONDS", &raw, true)?,
            Err(_) => Duration::from_secs(DEFAULT_VOICE_DEBOUNCE_SECONDS),
        };

        let status_bind_addr = match std::env::var("STATUS_BIND_ADDR") {
            Ok(raw) => Some(raw.trim().parse::<SocketAddr>().map_err(|e| {
                ConfigError::InvalidEnvVar {
                    name: "STATUS_BIND_ADDR".to_string(),
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?),
            Err(_) => None,
        };

        Ok(Self {
            discord_bot_token,
            discord_channel_id,
            growth_data_file: std::env::var("GROWTH_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_GROWTH_DATA_FILE)),
            update_interval,
            voice_debounce,
            status_bind_addr,
            community_name: std::env::var("COMMUNITY_NAME")
                .unwrap_or_else(|_| DEFAULT_COMMUNITY_NAME.to_string()),
            debug_logging: std::env::var("STATBOARD_DEBUG").is_ok(),
        })
    }
}

/// Parses the dashboard channel ID, tolerating whitespace and surrounding quotes
/// that commonly sneak into `.env` files and hosting dashboards.
///
/// # Arguments
/// - `raw` - Value of `DISCORD_CHANNEL_ID` as read from the environment
///
/// # Returns
/// - `Ok(u64)` - Parsed, non-zero channel ID
/// - `Err(ConfigError::InvalidEnvVar)` - Value is empty, zero or not a number
pub fn parse_channel_id(raw: &str) -> Result<u64, ConfigError> {
    let cleaned = raw.trim().trim_matches(|c| c == '"' || c == '\'').trim();

    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: "DISCORD_CHANNEL_ID".to_string(),
        value: raw.to_string(),
        reason,
    };

    match cleaned.parse::<u64>() {
        Ok(0) => Err(invalid("channel ID must not be zero".to_string())),
        Ok(id) => Ok(id),
        Err(e) => Err(invalid(e.to_string())),
    }
}

fn parse_seconds(name: &str, raw: &str, allow_zero: bool) -> Result<Duration, ConfigError> {
    let seconds = raw
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: raw.to_string(),
            reason: e.to_string(),
        })?;

    if seconds == 0 && !allow_zero {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: raw.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(Duration::from_secs(seconds))
}
