use chrono::{DateTime, Duration, TimeZone, Utc};
use test_utils::{
    builder::TestBuilder,
    context::TestContext,
    error::TestError,
    factory::snapshot::{SnapshotFactory, DEFAULT_GUILD_ID},
};

use crate::server::{
    data::snapshot::SnapshotStore, model::snapshot::GrowthTrend, service::growth::GrowthTracker,
};

mod activity_based_growth;
mod calculate_growth_percentage;
mod growth_trend;
mod record_snapshot;

const OTHER_GUILD_ID: u64 = 2_200_000_000_000_000_002;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
}

fn open_tracker(test: &TestContext) -> GrowthTracker {
    GrowthTracker::open(SnapshotStore::new(test.data_file()))
}
