use super::*;

/// Tests growth with no history at all.
///
/// Expected: 75 for any member count
#[test]
fn defaults_to_75_without_history() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let tracker = open_tracker(&test);

    for current in [0, 1, 100, 1_000_000] {
        assert_eq!(tracker.calculate_growth_percentage(DEFAULT_GUILD_ID, current), 75);
    }

    Ok(())
}

/// Tests growth from a guild that had no members.
///
/// Expected: 100 regardless of the current count
#[test]
fn zero_past_members_is_full_growth() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_daily(SnapshotFactory::new().timestamp(now()).total_members(0))
        .build()?;
    let tracker = open_tracker(&test);

    assert_eq!(tracker.calculate_growth_percentage(DEFAULT_GUILD_ID, 0), 100);
    assert_eq!(tracker.calculate_growth_percentage(DEFAULT_GUILD_ID, 42), 100);

    Ok(())
}

/// Tests the midpoint and offset mapping against a past count of 100.
///
/// Expected: 100 -> 50, 150 -> 100, 90 -> 40, 0 -> 0, large growth saturates
#[test]
fn offsets_real_growth_by_fifty_and_clamps() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_daily(SnapshotFactory::new().timestamp(now()).total_members(100))
        .build()?;
    let tracker = open_tracker(&test);

    assert_eq!(tracker.calculate_growth_percentage(DEFAULT_GUILD_ID, 100), 50);
    assert_eq!(tracker.calculate_growth_percentage(DEFAULT_GUILD_ID, 150), 100);
    assert_eq!(tracker.calculate_growth_percentage(DEFAULT_GUILD_ID, 90), 40);
    assert_eq!(tracker.calculate_growth_percentage(DEFAULT_GUILD_ID, 0), 0);
    assert_eq!(tracker.calculate_growth_percentage(DEFAULT_GUILD_ID, 10_000), 100);

    Ok(())
}

/// Tests rounding of fractional growth.
///
/// Expected: 33.3% -> 83, 12.5% -> 63
#[test]
fn rounds_fractional_growth() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_daily(SnapshotFactory::new().timestamp(now()).total_members(3))
        .with_daily(
            SnapshotFactory::new()
                .guild_id(OTHER_GUILD_ID)
                .timestamp(now())
                .total_members(8),
        )
        .build()?;
    let tracker = open_tracker(&test);

    assert_eq!(tracker.calculate_growth_percentage(DEFAULT_GUILD_ID, 4), 83);
    assert_eq!(tracker.calculate_growth_percentage(OTHER_GUILD_ID, 9), 63);

    Ok(())
}

/// Tests that the oldest entry is chosen by timestamp, not by position.
///
/// Expected: growth measured against the 5-day-old entry
#[test]
fn compares_against_oldest_by_timestamp() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_daily(
            SnapshotFactory::new()
                .timestamp(now() - Duration::days(1))
                .total_members(200),
        )
        .with_daily(
            SnapshotFactory::new()
                .timestamp(now() - Duration::days(5))
                .total_members(100),
        )
        .build()?;
    let tracker = open_tracker(&test);

    assert_eq!(tracker.calculate_growth_percentage(DEFAULT_GUILD_ID, 100), 50);

    Ok(())
}

/// Tests tie-breaking between equally old entries.
///
/// Expected: the first entry in the log wins
#[test]
fn equally_old_entries_use_first_encountered() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_daily(SnapshotFactory::new().timestamp(now()).total_members(100))
        .with_daily(SnapshotFactory::new().timestamp(now()).total_members(200))
        .build()?;
    let tracker = open_tracker(&test);

    assert_eq!(tracker.calculate_growth_percentage(DEFAULT_GUILD_ID, 100), 50);

    Ok(())
}

/// Tests the fallback to activity when only fine-grained history exists.
///
/// Expected: same value as activity_based_growth
#[test]
fn falls_back_to_activity_without_daily_history() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fine_grained(
            SnapshotFactory::new()
                .timestamp(now())
                .total_members(100)
                .online_members(20),
        )
        .build()?;
    let tracker = open_tracker(&test);

    assert_eq!(tracker.calculate_growth_percentage(DEFAULT_GUILD_ID, 500), 60);
    assert_eq!(
        tracker.calculate_growth_percentage(DEFAULT_GUILD_ID, 500),
        tracker.activity_based_growth(DEFAULT_GUILD_ID)
    );

    Ok(())
}

/// Tests that another guild's daily history is not used.
///
/// Expected: default of 75 for a guild without its own history
#[test]
fn ignores_other_guilds_history() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_daily(
            SnapshotFactory::new()
                .guild_id(OTHER_GUILD_ID)
                .timestamp(now())
                .total_members(0),
        )
        .build()?;
    let tracker = open_tracker(&test);

    assert_eq!(tracker.calculate_growth_percentage(DEFAULT_GUILD_ID, 10), 75);
    assert_eq!(tracker.calculate_growth_percentage(OTHER_GUILD_ID, 10), 100);

    Ok(())
}

/// Tests that the result always stays within the display range.
///
/// Expected: every combination yields a value in [0, 100]
#[test]
fn always_within_display_range() -> Result<(), TestError> {
    for past in [1u64, 7, 100, 5_000] {
        let test = TestBuilder::new()
            .with_daily(SnapshotFactory::new().timestamp(now()).total_members(past))
            .build()?;
        let tracker = open_tracker(&test);

        for current in [0u64, 1, 50, 100, 10_000, u32::MAX as u64] {
            let growth = tracker.calculate_growth_percentage(DEFAULT_GUILD_ID, current);
            assert!(growth <= 100, "past {past}, current {current} gave {growth}");
        }
    }

    Ok(())
}
