//! Snapshot factory for creating persisted growth history records.
//!
//! This module provides a builder for snapshot records with sensible defaults,
//! reducing boilerplate in tests that seed a growth history file.

use chrono::{DateTime, SecondsFormat, SubsecRound, Timelike, Utc};
use serde_json::{json, Value};

/// Guild ID used by snapshots unless overridden.
pub const DEFAULT_GUILD_ID: u64 = 1_100_000_000_000_000_001;

/// Factory for creating snapshot records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::snapshot::SnapshotFactory;
///
/// let record = SnapshotFactory::new()
///     .timestamp(now - chrono::Duration::days(3))
///     .total_members(250)
///     .online_members(40)
///     .build();
/// ```
pub struct SnapshotFactory {
    timestamp: DateTime<Utc>,
    guild_id: u64,
    total_members: u64,
    online_members: u64,
}

impl SnapshotFactory {
    /// Creates a new SnapshotFactory with default values.
    ///
    /// Defaults:
    /// - timestamp: now, truncated to whole seconds
    /// - guild_id: `DEFAULT_GUILD_ID`
    /// - total_members: `100`
    /// - online_members: `25`
    pub fn new() -> Self {
        Self {
            timestamp: Utc::now().trunc_subsecs(0),
            guild_id: DEFAULT_GUILD_ID,
            total_members: 100,
            online_members: 25,
        }
    }

    /// Sets the measurement time; `date` and `hour` are derived from it.
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp.trunc_subsecs(0);
        self
    }

    /// Sets the guild the snapshot belongs to.
    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id;
        self
    }

    /// Sets the non-bot member count.
    pub fn total_members(mut self, total_members: u64) -> Self {
        self.total_members = total_members;
        self
    }

    /// Sets the online member count.
    pub fn online_members(mut self, online_members: u64) -> Self {
        self.online_members = online_members;
        self
    }

    /// Builds the snapshot record in the persisted JSON format.
    ///
    /// # Returns
    /// - `Value` - JSON object with `timestamp`, `guild_id`, `total_members`,
    ///   `online_members`, `date` and `hour`
    pub fn build(self) -> Value {
        json!({
            "timestamp": self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            "guild_id": self.guild_id,
            "total_members": self.total_members,
            "online_members": self.online_members,
            "date": self.timestamp.format("%Y-%m-%d").to_string(),
            "hour": self.timestamp.hour(),
        })
    }
}

impl Default for SnapshotFactory {
    fn default() -> Self {
        Self::new()
    }
}
