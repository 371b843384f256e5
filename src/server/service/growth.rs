//! Growth tracking service.
//!
//! `GrowthTracker` records one snapshot per dashboard cycle and derives the growth
//! percentage and trend glyph shown on the dashboard. The percentage is a display
//! value, not a literal percent change: zero growth is shown as 50%, and when there
//! is no daily history yet the value is derived from recent online activity instead.
//!
//! All read-side operations are scoped to one guild. Snapshots of other guilds in the
//! same file are retained and pruned like any others but never influence the result.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use crate::server::{
    data::snapshot::SnapshotStore,
    error::AppError,
    model::snapshot::{GrowthTrend, Snapshot, SnapshotLogs},
};

/// Displayed growth when there is no history of any kind.
const DEFAULT_GROWTH: u8 = 75;

/// Offset added to real growth so that zero growth shows as the midpoint.
const GROWTH_MIDPOINT: f64 = 50.0;

/// Number of most recent fine-grained snapshots averaged for activity-based growth.
const ACTIVITY_SAMPLE_SIZE: usize = 10;

/// Offset added to the average online ratio for activity-based growth.
const ACTIVITY_OFFSET: f64 = 40.0;

/// Lowest value activity-based growth will display.
const ACTIVITY_FLOOR: f64 = 25.0;

/// Service owning the growth history for the lifetime of the process.
///
/// Opened once at startup and shared behind a mutex; every recorded snapshot is
/// flushed to the store before `record_snapshot` returns.
pub struct GrowthTracker {
    store: SnapshotStore,
    logs: SnapshotLogs,
}

impl GrowthTracker {
    /// Opens the tracker, loading any persisted history from the store.
    ///
    /// # Arguments
    /// - `store` - Snapshot store the history is read from and written to
    ///
    /// # Returns
    /// - `GrowthTracker` - Tracker holding the loaded history (empty on a first start)
    pub fn open(store: SnapshotStore) -> Self {
        let logs = store.load();
        Self { store, logs }
    }

    /// Current in-memory history, including snapshots not yet persisted.
    pub fn logs(&self) -> &SnapshotLogs {
        &self.logs
    }

    /// Most recent fine-grained snapshot of any guild.
    pub fn latest_snapshot(&self) -> Option<&Snapshot> {
        self.logs.fine_grained.last()
    }

    /// Records a snapshot taken now. See `record_snapshot_at`.
    pub fn record_snapshot(
        &mut self,
        guild_id: u64,
        total_members: u64,
        online_members: u64,
    ) -> Result<(), AppError> {
        self.record_snapshot_at(Utc::now(), guild_id, total_members, online_members)
    }

    /// Records a snapshot taken at `now` and persists the history.
    ///
    /// The snapshot is always appended to the fine-grained log, which is then pruned
    /// to the last 7 days. If the daily log has no entry for this guild on this date,
    /// the snapshot is appended there too and the daily log is pruned to the last 30
    /// days. Finally both logs are saved.
    ///
    /// The in-memory history is updated even when saving fails, so the next
    /// successful save also persists this snapshot.
    ///
    /// # Arguments
    /// - `now` - Measurement time
    /// - `guild_id` - Discord guild ID the counts belong to
    /// - `total_members` - Non-bot member count
    /// - `online_members` - Non-bot, non-offline member count
    ///
    /// # Returns
    /// - `Ok(())` - Snapshot recorded and history persisted
    /// - `Err(AppError::IoErr)` / `Err(AppError::JsonErr)` - History could not be saved
    pub fn record_snapshot_at(
        &mut self,
        now: DateTime<Utc>,
        guild_id: u64,
        total_members: u64,
        online_members: u64,
    ) -> Result<(), AppError> {
        let snapshot = Snapshot::new(now, guild_id, total_members, online_members);
        let date = snapshot.date;

        self.logs.fine_grained.push(snapshot.clone());
        self.logs.prune_fine_grained(now);

        if !self.logs.has_daily_snapshot(guild_id, date) {
            self.logs.daily.push(snapshot);
            self.logs.prune_daily(now);
        }

        self.store.save(&self.logs)
    }

    /// Calculates the displayed growth percentage for a guild.
    ///
    /// Compares `current_members` against the oldest daily snapshot of the guild. Real
    /// growth is rounded and offset by 50, then clamped to `[0, 100]`, so no change
    /// shows as 50% and the value saturates for large changes in either direction.
    /// An oldest snapshot with zero members shows as 100%. Without any daily snapshots
    /// the result comes from `activity_based_growth`.
    ///
    /// # Arguments
    /// - `guild_id` - Guild whose history is consulted
    /// - `current_members` - Current non-bot member count
    ///
    /// # Returns
    /// - `u8` - Display percentage in `[0, 100]`
    pub fn calculate_growth_percentage(&self, guild_id: u64, current_members: u64) -> u8 {
        // min_by_key keeps the first of equally old entries
        let Some(oldest) = self.logs.daily_for(guild_id).min_by_key(|s| s.timestamp) else {
            return self.activity_based_growth(guild_id);
        };

        let past_members = oldest.total_members;
        if past_members == 0 {
            return 100;
        }

        let growth =
            (current_members as f64 - past_members as f64) / past_members as f64 * 100.0;

        clamp_display(growth.round() + GROWTH_MIDPOINT, 0.0, 100.0)
    }

    /// Estimates growth from recent online activity when there is no daily history.
    ///
    /// Averages the online ratio (in percent) of the guild's 10 most recent
    /// fine-grained snapshots, treating a zero member count as one, then adds 40 and
    /// clamps to `[25, 100]`. Without any fine-grained snapshots the result is 75.
    ///
    /// # Arguments
    /// - `guild_id` - Guild whose history is consulted
    ///
    /// # Returns
    /// - `u8` - Display percentage in `[25, 100]`
    pub fn activity_based_growth(&self, guild_id: u64) -> u8 {
        let recent: Vec<&Snapshot> = self
            .logs
            .fine_grained_for(guild_id)
            .rev()
            .take(ACTIVITY_SAMPLE_SIZE)
            .collect();

        if recent.is_empty() {
            return DEFAULT_GROWTH;
        }

        let ratio_sum: f64 = recent
            .iter()
            .map(|s| s.online_members as f64 / s.total_members.max(1) as f64 * 100.0)
            .sum();
        let average = ratio_sum / recent.len() as f64;

        clamp_display(average.round() + ACTIVITY_OFFSET, ACTIVITY_FLOOR, 100.0)
    }

    /// Compares the guild's two most recent fine-grained snapshots.
    ///
    /// # Returns
    /// - `GrowthTrend::Up` - Latest total is greater than the previous one
    /// - `GrowthTrend::Down` - Latest total is less than the previous one
    /// - `GrowthTrend::Flat` - Totals are equal, or fewer than two snapshots exist
    pub fn growth_trend(&self, guild_id: u64) -> GrowthTrend {
        let mut recent = self.logs.fine_grained_for(guild_id).rev();

        let (Some(latest), Some(previous)) = (recent.next(), recent.next()) else {
            return GrowthTrend::Flat;
        };

        match latest.total_members.cmp(&previous.total_members) {
            Ordering::Greater => GrowthTrend::Up,
            Ordering::Less => GrowthTrend::Down,
            Ordering::Equal => GrowthTrend::Flat,
        }
    }
}

fn clamp_display(value: f64, min: f64, max: f64) -> u8 {
    value.clamp(min, max) as u8
}
