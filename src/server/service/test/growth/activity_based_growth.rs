use super::*;

/// Tests activity growth without any fine-grained history.
///
/// Expected: 75
#[test]
fn defaults_to_75_without_snapshots() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let tracker = open_tracker(&test);

    assert_eq!(tracker.activity_based_growth(DEFAULT_GUILD_ID), 75);

    Ok(())
}

/// Tests the offset applied to the average online ratio.
///
/// Expected: 10% and 30% online average to 20%, shown as 60
#[test]
fn averages_online_ratio_and_adds_forty() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fine_grained(
            SnapshotFactory::new()
                .timestamp(now() - Duration::minutes(1))
                .total_members(100)
                .online_members(10),
        )
        .with_fine_grained(
            SnapshotFactory::new()
                .timestamp(now())
                .total_members(100)
                .online_members(30),
        )
        .build()?;
    let tracker = open_tracker(&test);

    assert_eq!(tracker.activity_based_growth(DEFAULT_GUILD_ID), 60);

    Ok(())
}

/// Tests that only the 10 most recent snapshots are averaged.
///
/// Seeds 5 idle snapshots followed by 10 snapshots at 50% online.
///
/// Expected: 90, the idle snapshots are ignored
#[test]
fn uses_ten_most_recent_snapshots() -> Result<(), TestError> {
    let mut builder = TestBuilder::new();
    for i in 0..5 {
        builder = builder.with_fine_grained(
            SnapshotFactory::new()
                .timestamp(now() - Duration::hours(2) + Duration::minutes(i))
                .total_members(100)
                .online_members(0),
        );
    }
    for i in 0..10 {
        builder = builder.with_fine_grained(
            SnapshotFactory::new()
                .timestamp(now() - Duration::hours(1) + Duration::minutes(i))
                .total_members(100)
                .online_members(50),
        );
    }
    let test = builder.build()?;
    let tracker = open_tracker(&test);

    assert_eq!(tracker.activity_based_growth(DEFAULT_GUILD_ID), 90);

    Ok(())
}

/// Tests the divide-by-zero guard for empty guilds.
///
/// Expected: a zero total is treated as one member
#[test]
fn zero_total_is_treated_as_one() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fine_grained(
            SnapshotFactory::new()
                .timestamp(now())
                .total_members(0)
                .online_members(0),
        )
        .build()?;
    let tracker = open_tracker(&test);
    assert_eq!(tracker.activity_based_growth(DEFAULT_GUILD_ID), 40);

    let test = TestBuilder::new()
        .with_fine_grained(
            SnapshotFactory::new()
                .timestamp(now())
                .total_members(0)
                .online_members(3),
        )
        .build()?;
    let tracker = open_tracker(&test);
    assert_eq!(tracker.activity_based_growth(DEFAULT_GUILD_ID), 100);

    Ok(())
}

/// Tests that other guilds' snapshots do not count towards the average.
///
/// Expected: only the guild's own snapshot is averaged
#[test]
fn ignores_other_guilds_snapshots() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fine_grained(
            SnapshotFactory::new()
                .timestamp(now() - Duration::minutes(1))
                .total_members(10)
                .online_members(5),
        )
        .with_fine_grained(
            SnapshotFactory::new()
                .guild_id(OTHER_GUILD_ID)
                .timestamp(now())
                .total_members(10)
                .online_members(0),
        )
        .build()?;
    let tracker = open_tracker(&test);

    assert_eq!(tracker.activity_based_growth(DEFAULT_GUILD_ID), 90);
    assert_eq!(tracker.activity_based_growth(OTHER_GUILD_ID), 40);

    Ok(())
}
