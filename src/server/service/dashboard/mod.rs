//! Dashboard service for the live statistics message.
//!
//! This module provides the `DashboardService` which owns the single dashboard message
//! in the configured channel. Each update cycle collects statistics from the gateway
//! cache, records a growth snapshot, rebuilds the embed and publishes it.
//!
//! The service is organized into separate modules by concern:
//! - `builder` - Embed building and formatting utilities
//! - `posting` - Sending, editing and recreating the dashboard message
//!
//! Cycles are serialised by the state mutex, which is held for the whole cycle. A
//! cycle does nothing until the target channel has been resolved from the ready and
//! guild create events, and nothing ever again once the dashboard has been disabled.

pub mod builder;
pub mod posting;

use chrono::Utc;
use dioxus_logger::tracing;
use serenity::{
    all::{Cache, ChannelId, GuildId, MessageId},
    async_trait,
    http::Http,
};
use std::{sync::Arc, time::Duration};
use tokio::sync::Mutex;

use crate::server::{
    error::{internal::InternalError, AppError},
    model::{snapshot::GrowthTrend, stats::GuildStats},
    scheduler::refresh::Refresh,
    service::{growth::GrowthTracker, stats::collect_guild_stats},
};

use self::builder::{build_dashboard_embed, DashboardHeader};

/// Static settings of the dashboard, taken from the configuration.
pub struct DashboardSettings {
    pub channel_id: u64,
    pub community_name: String,
    pub update_interval: Duration,
}

/// Discord handles and target guild, known once the channel has been resolved.
#[derive(Clone)]
pub struct DashboardTarget {
    pub cache: Arc<Cache>,
    pub http: Arc<Http>,
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
}

#[derive(Default)]
struct DashboardState {
    target: Option<DashboardTarget>,
    message_id: Option<MessageId>,
    disabled: bool,
}

/// How a failed cycle is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleFailure {
    /// Discord refused with 403; the dashboard is disabled until restart.
    Forbidden,
    /// Any other HTTP error; retried on the next cycle.
    Http,
    /// Not an HTTP error; reported in the channel with an error embed.
    Unexpected,
}

impl CycleFailure {
    pub fn classify(err: &AppError) -> Self {
        match err.discord_status() {
            Some(403) => Self::Forbidden,
            Some(_) => Self::Http,
            None => Self::Unexpected,
        }
    }
}

/// Service maintaining the live dashboard message.
///
/// Cheap to clone; all clones share the same state, growth tracker and settings.
#[derive(Clone)]
pub struct DashboardService {
    tracker: Arc<Mutex<GrowthTracker>>,
    settings: Arc<DashboardSettings>,
    state: Arc<Mutex<DashboardState>>,
}

impl DashboardService {
    /// Creates a new DashboardService with no resolved target.
    ///
    /// # Arguments
    /// - `tracker` - Growth tracker shared with the status surface
    /// - `settings` - Channel, community name and update interval
    ///
    /// # Returns
    /// - `DashboardService` - Service whose cycles are skipped until `set_target` is called
    pub fn new(tracker: Arc<Mutex<GrowthTracker>>, settings: DashboardSettings) -> Self {
        Self {
            tracker,
            settings: Arc::new(settings),
            state: Arc::new(Mutex::new(DashboardState::default())),
        }
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Sets the resolved channel and guild, enabling update cycles.
    pub async fn set_target(&self, target: DashboardTarget) {
        let mut state = self.state.lock().await;
        tracing::info!(
            "Dashboard target set to channel {} in guild {}",
            target.channel_id,
            target.guild_id
        );
        state.target = Some(target);
    }

    /// Stops all future cycles until the process restarts.
    pub async fn disable(&self, reason: &str) {
        let mut state = self.state.lock().await;
        if !state.disabled {
            tracing::error!("Dashboard disabled: {}", reason);
        }
        state.disabled = true;
    }

    pub async fn is_disabled(&self) -> bool {
        self.state.lock().await.disabled
    }

    /// Guild of the resolved dashboard channel, if resolved.
    pub async fn target_guild_id(&self) -> Option<GuildId> {
        let state = self.state.lock().await;
        state.target.as_ref().map(|target| target.guild_id)
    }

    /// Runs one update cycle.
    ///
    /// Collects statistics, records a growth snapshot, builds the dashboard embed and
    /// publishes it. Failures are logged and handled here: a 403 disables the
    /// dashboard, other HTTP errors wait for the next cycle, and anything else is
    /// reported in the channel with an error embed on a best-effort basis.
    pub async fn run_cycle(&self) {
        let mut state = self.state.lock().await;

        if state.disabled {
            return;
        }
        let Some(target) = state.target.clone() else {
            tracing::debug!("Skipping dashboard update, target channel not resolved yet");
            return;
        };

        let Err(e) = self.update(&mut state, &target).await else {
            return;
        };

        match CycleFailure::classify(&e) {
            CycleFailure::Forbidden => {
                tracing::error!("Missing permissions to send or edit the dashboard: {}", e);
                state.disabled = true;
            }
            CycleFailure::Http => {
                tracing::error!("HTTP error during dashboard update: {}", e);
            }
            CycleFailure::Unexpected => {
                tracing::error!("Unexpected error during dashboard update: {}", e);
                posting::send_error_embed(&target, &e.to_string()).await;
            }
        }
    }

    async fn update(
        &self,
        state: &mut DashboardState,
        target: &DashboardTarget,
    ) -> Result<(), AppError> {
        // GuildRef must not be held across an await
        let stats = {
            let guild = target
                .cache
                .guild(target.guild_id)
                .ok_or(InternalError::GuildNotCached(target.guild_id.get()))?;
            collect_guild_stats(&guild)
        };

        tracing::info!("Updating dashboard for {}", stats.guild_name);

        let Some((growth, trend)) = self.record_growth(&stats).await else {
            return Ok(());
        };

        let header = DashboardHeader {
            community_name: &self.settings.community_name,
            growth,
            trend,
            update_interval_secs: self.settings.update_interval.as_secs(),
        };
        let embed = build_dashboard_embed(&stats, &header, Utc::now())?;

        state.message_id = Some(posting::publish(target, state.message_id, embed).await?);

        Ok(())
    }

    /// Records a snapshot of `stats` and estimates growth and trend from the history.
    ///
    /// Stats taken while the member list is still arriving in chunks are not recorded,
    /// since a short count would become the day's daily snapshot.
    ///
    /// # Returns
    /// - `Some((growth, trend))` - Snapshot recorded (or its save failure logged)
    /// - `None` - Member list incomplete; nothing recorded
    async fn record_growth(&self, stats: &GuildStats) -> Option<(u8, GrowthTrend)> {
        if !stats.is_complete() {
            tracing::info!(
                "Member list of {} still loading ({} of {} members cached), skipping update",
                stats.guild_name,
                stats.total_members + stats.total_bots,
                stats.reported_members
            );
            return None;
        }

        let mut tracker = self.tracker.lock().await;

        if let Err(e) =
            tracker.record_snapshot(stats.guild_id, stats.total_members, stats.online_members())
        {
            tracing::error!("Failed to persist growth snapshot: {}", e);
        }

        Some((
            tracker.calculate_growth_percentage(stats.guild_id, stats.total_members),
            tracker.growth_trend(stats.guild_id),
        ))
    }
}

#[async_trait]
impl Refresh for DashboardService {
    async fn refresh(&self) {
        self.run_cycle().await;
    }
}
