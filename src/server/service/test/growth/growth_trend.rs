use super::*;

fn tracker_with_totals(test_totals: &[u64]) -> Result<(TestContext, GrowthTracker), TestError> {
    let mut builder = TestBuilder::new();
    for (i, total) in test_totals.iter().enumerate() {
        builder = builder.with_fine_grained(
            SnapshotFactory::new()
                .timestamp(now() + Duration::minutes(i as i64))
                .total_members(*total),
        );
    }
    let test = builder.build()?;
    let tracker = open_tracker(&test);
    Ok((test, tracker))
}

/// Tests an increasing member count.
///
/// Expected: Up
#[test]
fn increasing_total_is_up() -> Result<(), TestError> {
    let (_test, tracker) = tracker_with_totals(&[10, 20])?;
    assert_eq!(tracker.growth_trend(DEFAULT_GUILD_ID), GrowthTrend::Up);
    Ok(())
}

/// Tests a decreasing member count.
///
/// Expected: Down
#[test]
fn decreasing_total_is_down() -> Result<(), TestError> {
    let (_test, tracker) = tracker_with_totals(&[20, 10])?;
    assert_eq!(tracker.growth_trend(DEFAULT_GUILD_ID), GrowthTrend::Down);
    Ok(())
}

/// Tests an unchanged member count.
///
/// Expected: Flat
#[test]
fn unchanged_total_is_flat() -> Result<(), TestError> {
    let (_test, tracker) = tracker_with_totals(&[10, 10])?;
    assert_eq!(tracker.growth_trend(DEFAULT_GUILD_ID), GrowthTrend::Flat);
    Ok(())
}

/// Tests the trend with fewer than two snapshots.
///
/// Expected: Flat for zero and one snapshot
#[test]
fn fewer_than_two_snapshots_is_flat() -> Result<(), TestError> {
    let (_test, tracker) = tracker_with_totals(&[])?;
    assert_eq!(tracker.growth_trend(DEFAULT_GUILD_ID), GrowthTrend::Flat);

    let (_test, tracker) = tracker_with_totals(&[10])?;
    assert_eq!(tracker.growth_trend(DEFAULT_GUILD_ID), GrowthTrend::Flat);
    Ok(())
}

/// Tests that only the two most recent snapshots are compared.
///
/// Expected: Down, even though the count grew overall
#[test]
fn compares_two_most_recent_only() -> Result<(), TestError> {
    let (_test, tracker) = tracker_with_totals(&[5, 30, 29])?;
    assert_eq!(tracker.growth_trend(DEFAULT_GUILD_ID), GrowthTrend::Down);
    Ok(())
}

/// Tests that interleaved snapshots of another guild are skipped.
///
/// Expected: Up for the default guild, Flat for the guild with one snapshot
#[test]
fn skips_other_guilds_snapshots() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fine_grained(SnapshotFactory::new().timestamp(now()).total_members(10))
        .with_fine_grained(
            SnapshotFactory::new()
                .guild_id(OTHER_GUILD_ID)
                .timestamp(now() + Duration::minutes(1))
                .total_members(500),
        )
        .with_fine_grained(
            SnapshotFactory::new()
                .timestamp(now() + Duration::minutes(2))
                .total_members(11),
        )
        .build()?;
    let tracker = open_tracker(&test);

    assert_eq!(tracker.growth_trend(DEFAULT_GUILD_ID), GrowthTrend::Up);
    assert_eq!(tracker.growth_trend(OTHER_GUILD_ID), GrowthTrend::Flat);

    Ok(())
}
