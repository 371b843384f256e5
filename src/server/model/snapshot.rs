//! Growth history domain models.
//!
//! A `Snapshot` is one measurement of a guild's member counts. Snapshots are kept in
//! two chronological logs inside `SnapshotLogs`: a fine-grained log holding every
//! recorded measurement for a week, and a daily log holding at most one measurement
//! per guild per calendar day for a month. Both logs are written to disk together as
//! a single JSON document.

use chrono::{DateTime, Duration, NaiveDate, SubsecRound, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// How long fine-grained snapshots are retained.
pub const FINE_GRAINED_RETENTION_DAYS: i64 = 7;

/// How long daily snapshots are retained.
pub const DAILY_RETENTION_DAYS: i64 = 30;

/// One recorded measurement of a guild's member counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Moment of measurement, truncated to whole seconds.
    #[serde(with = "timestamp_format")]
    pub timestamp: DateTime<Utc>,
    /// Discord guild the measurement was taken from.
    pub guild_id: u64,
    /// Number of non-bot members.
    pub total_members: u64,
    /// Number of non-bot members whose status is not offline.
    pub online_members: u64,
    /// Calendar date of `timestamp`, used to deduplicate the daily log.
    pub date: NaiveDate,
    /// Hour of day of `timestamp`. Informational only.
    pub hour: u32,
}

impl Snapshot {
    /// Creates a snapshot taken at `now`.
    ///
    /// # Arguments
    /// - `now` - Measurement time; sub-second precision is dropped
    /// - `guild_id` - Discord guild ID the counts belong to
    /// - `total_members` - Non-bot member count
    /// - `online_members` - Non-bot, non-offline member count
    ///
    /// # Returns
    /// - `Snapshot` - New snapshot with `date` and `hour` derived from `now`
    pub fn new(now: DateTime<Utc>, guild_id: u64, total_members: u64, online_members: u64) -> Self {
        let timestamp = now.trunc_subsecs(0);
        Self {
            timestamp,
            guild_id,
            total_members,
            online_members,
            date: timestamp.date_naive(),
            hour: timestamp.hour(),
        }
    }
}

/// The persisted growth history: fine-grained and daily snapshot logs.
///
/// Both logs are ordered by insertion, which is chronological in practice. The
/// aliases accept files written by the earlier deployment, where the fine-grained
/// log was called `daily_snapshots` and the daily log `weekly_snapshots`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotLogs {
    /// Every recorded snapshot from the last 7 days.
    #[serde(default, alias = "daily_snapshots")]
    pub fine_grained: Vec<Snapshot>,
    /// At most one snapshot per guild per date from the last 30 days.
    #[serde(default, alias = "weekly_snapshots")]
    pub daily: Vec<Snapshot>,
}

impl SnapshotLogs {
    pub fn is_empty(&self) -> bool {
        self.fine_grained.is_empty() && self.daily.is_empty()
    }

    /// Drops fine-grained snapshots that are not strictly newer than `now - 7 days`.
    pub fn prune_fine_grained(&mut self, now: DateTime<Utc>) {
        let cutoff = now - Duration::days(FINE_GRAINED_RETENTION_DAYS);
        self.fine_grained.retain(|s| s.timestamp > cutoff);
    }

    /// Drops daily snapshots that are not strictly newer than `now - 30 days`.
    pub fn prune_daily(&mut self, now: DateTime<Utc>) {
        let cutoff = now - Duration::days(DAILY_RETENTION_DAYS);
        self.daily.retain(|s| s.timestamp > cutoff);
    }

    /// Whether the daily log already holds an entry for `guild_id` on `date`.
    pub fn has_daily_snapshot(&self, guild_id: u64, date: NaiveDate) -> bool {
        self.daily
            .iter()
            .any(|s| s.guild_id == guild_id && s.date == date)
    }

    /// Fine-grained snapshots of a single guild, oldest first.
    pub fn fine_grained_for(
        &self,
        guild_id: u64,
    ) -> impl DoubleEndedIterator<Item = &Snapshot> + '_ {
        self.fine_grained
            .iter()
            .filter(move |s| s.guild_id == guild_id)
    }

    /// Daily snapshots of a single guild, oldest first.
    pub fn daily_for(&self, guild_id: u64) -> impl DoubleEndedIterator<Item = &Snapshot> + '_ {
        self.daily.iter().filter(move |s| s.guild_id == guild_id)
    }
}

/// Direction of member count change between the two most recent snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthTrend {
    Up,
    Down,
    Flat,
}

impl GrowthTrend {
    /// Glyph shown next to the growth percentage on the dashboard.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Up => "📈",
            Self::Down => "📉",
            Self::Flat => "📊",
        }
    }
}

/// Serde adapter for snapshot timestamps.
///
/// Writes RFC 3339 with second precision in UTC. Reads RFC 3339 with any offset, and
/// also naive ISO-8601 date-times (no offset), which are taken to be UTC.
mod timestamp_format {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let raw = String::deserialize(deserializer)?;
        if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(parsed.with_timezone(&Utc));
        }

        raw.parse::<NaiveDateTime>()
            .map(|naive| naive.and_utc())
            .map_err(D::Error::custom)
    }
}
